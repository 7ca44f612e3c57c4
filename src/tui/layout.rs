use crate::model::controls::LayoutMode;

/// Position of one card in the gallery, in column/row units relative to the
/// top of the scrollable gallery content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub col: usize,
    pub y: usize,
    pub height: usize,
}

impl CardSlot {
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Place cards of the given heights into `columns` columns.
///
/// Masonry puts each card into the currently shortest column (leftmost on
/// ties). Grid fills row by row and gives every card the tallest height.
pub fn layout_cards(heights: &[usize], columns: usize, mode: LayoutMode) -> Vec<CardSlot> {
    let columns = columns.max(1);
    match mode {
        LayoutMode::Masonry => {
            let mut bottoms = vec![0usize; columns];
            heights
                .iter()
                .map(|&height| {
                    let (col, y) = bottoms
                        .iter()
                        .copied()
                        .enumerate()
                        .min_by_key(|&(col, y)| (y, col))
                        .unwrap_or((0, 0));
                    bottoms[col] = y + height;
                    CardSlot { col, y, height }
                })
                .collect()
        }
        LayoutMode::Grid => {
            let height = heights.iter().copied().max().unwrap_or(0);
            (0..heights.len())
                .map(|i| CardSlot {
                    col: i % columns,
                    y: (i / columns) * height,
                    height,
                })
                .collect()
        }
    }
}

/// Total content height of a layout
pub fn content_height(slots: &[CardSlot]) -> usize {
    slots.iter().map(CardSlot::bottom).max().unwrap_or(0)
}

/// The card reached from `from` by moving one step in `dir`, if any.
///
/// Up/down stay in the same column. Left/right move to the adjacent column,
/// choosing the card whose top is vertically closest.
pub fn neighbor(slots: &[CardSlot], from: usize, dir: Direction) -> Option<usize> {
    let cur = slots.get(from)?;
    let candidates = slots.iter().enumerate().filter(|(i, _)| *i != from);
    match dir {
        Direction::Up => candidates
            .filter(|(_, s)| s.col == cur.col && s.y < cur.y)
            .max_by_key(|(_, s)| s.y)
            .map(|(i, _)| i),
        Direction::Down => candidates
            .filter(|(_, s)| s.col == cur.col && s.y > cur.y)
            .min_by_key(|(_, s)| s.y)
            .map(|(i, _)| i),
        Direction::Left | Direction::Right => {
            let col = if dir == Direction::Left {
                cur.col.checked_sub(1)?
            } else {
                cur.col + 1
            };
            candidates
                .filter(|(_, s)| s.col == col)
                .min_by_key(|(_, s)| s.y.abs_diff(cur.y))
                .map(|(i, _)| i)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_masonry_shortest_column() {
        let slots = layout_cards(&[5, 3, 4, 2], 3, LayoutMode::Masonry);
        assert_eq!(
            slots,
            vec![
                CardSlot { col: 0, y: 0, height: 5 },
                CardSlot { col: 1, y: 0, height: 3 },
                CardSlot { col: 2, y: 0, height: 4 },
                // Column 1 is shortest (3)
                CardSlot { col: 1, y: 3, height: 2 },
            ]
        );
        assert_eq!(content_height(&slots), 5);
    }

    #[test]
    fn test_grid_uniform_rows() {
        let slots = layout_cards(&[5, 3, 4, 2], 3, LayoutMode::Grid);
        let positions: Vec<(usize, usize, usize)> =
            slots.iter().map(|s| (s.col, s.y, s.height)).collect();
        assert_eq!(positions, vec![(0, 0, 5), (1, 0, 5), (2, 0, 5), (0, 5, 5)]);
        assert_eq!(content_height(&slots), 10);
    }

    #[test]
    fn test_empty_layout() {
        assert!(layout_cards(&[], 4, LayoutMode::Masonry).is_empty());
        assert_eq!(content_height(&[]), 0);
        assert_eq!(neighbor(&[], 0, Direction::Down), None);
    }

    #[test]
    fn test_neighbor_in_grid() {
        let slots = layout_cards(&[3; 7], 3, LayoutMode::Grid);
        assert_eq!(neighbor(&slots, 0, Direction::Down), Some(3));
        assert_eq!(neighbor(&slots, 4, Direction::Up), Some(1));
        assert_eq!(neighbor(&slots, 4, Direction::Left), Some(3));
        assert_eq!(neighbor(&slots, 4, Direction::Right), Some(5));
        assert_eq!(neighbor(&slots, 3, Direction::Left), None);
        assert_eq!(neighbor(&slots, 5, Direction::Down), None);
        assert_eq!(neighbor(&slots, 2, Direction::Down), Some(5));
        assert_eq!(neighbor(&slots, 3, Direction::Down), Some(6));
    }

    #[test]
    fn test_neighbor_in_masonry_picks_closest_top() {
        // col0: [0..6) [6..9), col1: [0..2) [2..5) [5..8)
        let slots = layout_cards(&[6, 2, 3, 3, 3], 2, LayoutMode::Masonry);
        assert_eq!(slots[3].col, 1);
        assert_eq!(slots[4].col, 0);
        assert_eq!(neighbor(&slots, 4, Direction::Right), Some(3));
        assert_eq!(neighbor(&slots, 0, Direction::Right), Some(1));
        assert_eq!(neighbor(&slots, 0, Direction::Down), Some(4));
    }
}
