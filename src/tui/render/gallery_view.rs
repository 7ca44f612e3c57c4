use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::controls::LayoutMode;
use crate::model::image::ImageRecord;
use crate::tui::app::App;
use crate::tui::layout::{self, CardSlot};
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::{push_highlighted_spans, spans_width};

pub const EMPTY_MESSAGE: &str = "No matching images found";

/// Columns between cards
const GAP: u16 = 1;
/// Narrowest card: two borders and one content cell
const MIN_CARD_WIDTH: u16 = 3;
const MAX_TITLE_LINES: usize = 2;
const MAX_MEMO_LINES: usize = 3;

/// Render the card gallery, keeping the selected card scrolled into view.
/// Records the card layout on the app for spatial navigation.
pub fn render_gallery(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.gallery.visible();

    if visible.is_empty() || area.height == 0 {
        app.card_slots.clear();
        app.gallery_height = area.height as usize;
        let y = area.y + area.height / 2;
        let message = Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .centered();
        if area.height > 0 {
            frame.render_widget(
                Paragraph::new(message),
                Rect::new(area.x, y, area.width, 1),
            );
        }
        return;
    }

    let columns = fitting_columns(app.columns() as u16, area.width);
    let col_width = (area.width.saturating_sub(GAP * (columns - 1)) / columns).max(MIN_CARD_WIDTH);
    let inner = col_width as usize - 2;
    let search_re = app.search_re();

    let bodies: Vec<Vec<Line>> = visible
        .iter()
        .map(|record| card_body(record, inner, app.layout, &app.theme, search_re.as_ref()))
        .collect();
    let heights: Vec<usize> = bodies.iter().map(|b| b.len() + 2).collect();
    let slots = layout::layout_cards(&heights, columns as usize, app.layout);

    let height = area.height as usize;
    let cursor = app.cursor.min(slots.len() - 1);
    app.scroll = scroll_into_view(app.scroll, &slots[cursor], height);
    app.scroll = app
        .scroll
        .min(layout::content_height(&slots).saturating_sub(height));
    let scroll = app.scroll;

    for (i, (slot, body)) in slots.iter().zip(bodies).enumerate() {
        if slot.bottom() <= scroll || slot.y >= scroll + height {
            continue;
        }
        let x = area.x + slot.col as u16 * (col_width + GAP);
        let rows = card_rows(body, slot.height, inner, i == cursor, &app.theme);
        for (offset, row) in rows.into_iter().enumerate() {
            let y = slot.y + offset;
            if y < scroll || y >= scroll + height {
                continue;
            }
            let rect = Rect::new(x, area.y + (y - scroll) as u16, col_width, 1).intersection(area);
            if rect.is_empty() {
                continue;
            }
            frame.render_widget(Paragraph::new(row).style(Style::default().bg(bg)), rect);
        }
    }

    app.card_slots = slots;
    app.gallery_height = height;
}

/// Columns that fit in `width`, at most `wanted` and never fewer than one
fn fitting_columns(wanted: u16, width: u16) -> u16 {
    let fit = width.saturating_add(GAP) / (MIN_CARD_WIDTH + GAP);
    wanted.min(fit).max(1)
}

/// Smallest scroll change that shows the whole card (or its top, if it is
/// taller than the viewport)
fn scroll_into_view(scroll: usize, slot: &CardSlot, height: usize) -> usize {
    if slot.y < scroll {
        slot.y
    } else if slot.bottom() > scroll + height {
        if slot.height > height {
            slot.y
        } else {
            slot.bottom() - height
        }
    } else {
        scroll
    }
}

/// Content lines of one card, without borders.
///
/// Masonry cards grow with their title and memo. Grid cards always have the
/// same number of lines.
fn card_body<'a>(
    record: &ImageRecord,
    width: usize,
    mode: LayoutMode,
    theme: &Theme,
    search_re: Option<&Regex>,
) -> Vec<Line<'a>> {
    let bg = theme.surface;
    let mut lines = Vec::new();

    // Swatch band standing in for the thumbnail
    let band = match record.color {
        Some(color) => Span::styled(
            "\u{2580}".repeat(width),
            Style::default().fg(theme.swatch(color)).bg(bg),
        ),
        None => Span::styled(
            "\u{2591}".repeat(width),
            Style::default().fg(theme.dim).bg(bg),
        ),
    };
    lines.push(Line::from(band));

    // Title, with a favorite star
    let title_style = Style::default()
        .fg(theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let match_style = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    let star = if record.is_favorite { "\u{2605} " } else { "" };
    let title_width = width.saturating_sub(unicode::display_width(star));
    let title_lines = match mode {
        LayoutMode::Masonry => wrap_limited(&record.title, title_width, MAX_TITLE_LINES),
        LayoutMode::Grid => vec![unicode::truncate_to_width(&record.title, title_width)],
    };
    for (i, text) in title_lines.iter().enumerate() {
        let mut spans = Vec::new();
        if i == 0 && !star.is_empty() {
            spans.push(Span::styled(star, Style::default().fg(theme.favorite).bg(bg)));
        }
        push_highlighted_spans(&mut spans, text, title_style, match_style, search_re);
        lines.push(Line::from(spans));
    }

    // Tags
    let tags = record
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ");
    let mut spans = Vec::new();
    push_highlighted_spans(
        &mut spans,
        &unicode::truncate_to_width(&tags, width),
        Style::default().fg(theme.highlight).bg(bg),
        match_style,
        search_re,
    );
    lines.push(Line::from(spans));

    // Memo
    let memo = record.memo.as_deref().unwrap_or("");
    let memo_lines = match mode {
        LayoutMode::Masonry => wrap_limited(memo, width, MAX_MEMO_LINES),
        LayoutMode::Grid => vec![unicode::truncate_to_width(memo, width)],
    };
    for text in &memo_lines {
        let mut spans = Vec::new();
        push_highlighted_spans(
            &mut spans,
            text,
            Style::default().fg(theme.text).bg(bg),
            match_style,
            search_re,
        );
        lines.push(Line::from(spans));
    }

    // Date and collection
    let footer = match &record.collection {
        Some(collection) => format!("{}  \u{25A4} {}", record.date, collection),
        None => record.date.to_string(),
    };
    lines.push(Line::from(Span::styled(
        unicode::truncate_to_width(&footer, width),
        Style::default().fg(theme.dim).bg(bg),
    )));

    lines
}

/// Word-wrap and keep at most `max` lines, marking the cut with an ellipsis
fn wrap_limited(text: &str, width: usize, max: usize) -> Vec<String> {
    let mut lines = unicode::wrap_to_width(text, width);
    if lines.len() > max {
        lines.truncate(max);
        if let Some(last) = lines.last_mut() {
            let cut = unicode::truncate_to_width(last, width.saturating_sub(1));
            *last = format!("{}\u{2026}", cut.trim_end_matches('\u{2026}'));
        }
    }
    lines
}

/// Frame the body in a border, padded to `height` rows
fn card_rows<'a>(
    body: Vec<Line<'a>>,
    height: usize,
    inner: usize,
    selected: bool,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let (h, v, tl, tr, bl, br) = if selected {
        ("\u{2501}", "\u{2503}", "\u{250F}", "\u{2513}", "\u{2517}", "\u{251B}")
    } else {
        ("\u{2500}", "\u{2502}", "\u{256D}", "\u{256E}", "\u{2570}", "\u{256F}")
    };
    let border = Style::default()
        .fg(if selected {
            theme.selection_border
        } else {
            theme.border
        })
        .bg(theme.background);
    let fill = Style::default().bg(if selected {
        theme.selection_bg
    } else {
        theme.surface
    });

    let mut rows = Vec::with_capacity(height);
    rows.push(Line::from(Span::styled(
        format!("{}{}{}", tl, h.repeat(inner), tr),
        border,
    )));
    let body_rows = height.saturating_sub(2);
    let mut body = body.into_iter();
    for _ in 0..body_rows {
        let mut spans = vec![Span::styled(v, border)];
        let content = body.next().unwrap_or_default();
        let used = spans_width(&content.spans);
        spans.extend(content.spans.into_iter().map(|s| {
            let style = if selected { s.style.patch(fill) } else { s.style };
            Span::styled(s.content, style)
        }));
        spans.push(Span::styled(" ".repeat(inner.saturating_sub(used)), fill));
        spans.push(Span::styled(v, border));
        rows.push(Line::from(spans));
    }
    rows.push(Line::from(Span::styled(
        format!("{}{}{}", bl, h.repeat(inner), br),
        border,
    )));
    rows
}
