use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect;

const KEY_WIDTH: usize = 11;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(80, 90, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .title(Span::styled(" Key Bindings ", header_style))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let mut left: Vec<Line> = vec![Line::from("")];
    left.push(Line::from(Span::styled(" Navigate", header_style)));
    add_binding(&mut left, " \u{2190}\u{2191}\u{2193}\u{2192}", "Move selection", key_style, desc_style);
    add_binding(&mut left, " hjkl", "Move selection", key_style, desc_style);
    add_binding(&mut left, " g/G", "First / last", key_style, desc_style);
    add_binding(&mut left, " Enter", "Image details", key_style, desc_style);
    add_binding(&mut left, " e", "Quick edit", key_style, desc_style);
    left.push(Line::from(""));
    left.push(Line::from(Span::styled(" Actions", header_style)));
    add_binding(&mut left, " f", "Toggle favorite", key_style, desc_style);
    add_binding(&mut left, " a", "Add image", key_style, desc_style);
    add_binding(&mut left, " i", "Import from URL", key_style, desc_style);
    add_binding(&mut left, " Esc", "Clear search", key_style, desc_style);

    let mut right: Vec<Line> = vec![Line::from("")];
    right.push(Line::from(Span::styled(" View", header_style)));
    add_binding(&mut right, " /", "Search", key_style, desc_style);
    add_binding(&mut right, " Tab/S-Tab", "Next / prev tag", key_style, desc_style);
    add_binding(&mut right, " c/C", "Cycle color", key_style, desc_style);
    add_binding(&mut right, " s", "Cycle sort", key_style, desc_style);
    add_binding(&mut right, " m", "Masonry / grid", key_style, desc_style);
    add_binding(&mut right, " 1/2/3", "Card size S/M/L", key_style, desc_style);
    add_binding(&mut right, " d", "Dark mode", key_style, desc_style);
    right.push(Line::from(""));
    right.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut right, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut right, " q", "Quit", key_style, desc_style);
    add_binding(&mut right, " Ctrl+C", "Quit (anywhere)", key_style, desc_style);

    for (lines, rect) in [(left, columns[0]), (right, columns[1])] {
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().bg(bg)),
            rect,
        );
    }
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(unicode::pad_to_width(key, KEY_WIDTH), key_style),
        Span::styled(desc, desc_style),
    ]));
}
