pub mod dialogs;
pub mod gallery_view;
pub mod header;
pub mod help_overlay;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use crate::util::unicode;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | control bar | tag bar + separator | gallery | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // search, colour, sort, layout, size
            Constraint::Length(2), // tag bar + separator
            Constraint::Min(1),    // gallery
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    header::render_control_bar(frame, app, chunks[1]);
    header::render_tag_bar(frame, app, chunks[2]);
    gallery_view::render_gallery(frame, app, chunks[3]);

    match app.mode {
        Mode::Upload => dialogs::render_upload_dialog(frame, app, area),
        Mode::Detail => dialogs::render_detail_dialog(frame, app, area),
        Mode::QuickEdit => dialogs::render_quick_edit_dialog(frame, app, area),
        Mode::Navigate | Mode::Search | Mode::Import => {}
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[4]);
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() || text.is_empty() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_helpers::*;
    use crate::tui::app::Mode;

    #[test]
    fn test_highlighted_spans_split_on_matches() {
        let re = Regex::new("(?i)ui").unwrap();
        let mut spans = Vec::new();
        let base = Style::default();
        let hl = Style::default().bg(ratatui::style::Color::Yellow);
        push_highlighted_spans(&mut spans, "UI Kit for ui", base, hl, Some(&re));
        let parts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["UI", " Kit for ", "ui"]);
        assert_eq!(spans[0].style, hl);
        assert_eq!(spans[1].style, base);
        assert_eq!(spans_width(&spans), 13);
    }

    #[test]
    fn test_highlighted_spans_without_match() {
        let re = Regex::new("zzz").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            "Logo",
            Style::default(),
            Style::default(),
            Some(&re),
        );
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "Logo");
    }

    #[test]
    fn test_full_screen_render() {
        let mut app = sample_app();
        let output = render_app(&mut app, TERM_W, TERM_H);
        assert!(output.contains("My Design Clips"));
        assert!(output.contains("Brand Design"));
        assert!(output.contains("Typography"));
        // Key hints in the status row
        assert!(output.lines().last().unwrap().contains("? help"));
        assert_eq!(app.card_slots.len(), 6);
    }

    #[test]
    fn test_full_screen_render_with_dialog() {
        let mut app = sample_app();
        app.open_upload();
        assert_eq!(app.mode, Mode::Upload);
        let output = render_app(&mut app, TERM_W, TERM_H);
        assert!(output.contains("Add Image"));
        assert!(output.contains("Image URL"));
    }
}
