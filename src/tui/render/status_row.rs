use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::spans_width;

const NAVIGATE_HINTS: &str = "/ search  Tab tag  c color  s sort  f fav  a add  i import  ? help  q quit";
const DIALOG_HINTS: &str = "Tab next field  Enter save  Esc close";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (mut spans, hint) = match app.mode {
        Mode::Import => (
            prompt_spans(app, "Import URL: ", &app.import_input, app.import_edit.cursor),
            "Enter import  Esc cancel",
        ),
        Mode::Search => (
            prompt_spans(
                app,
                "/",
                &app.gallery.controls().query,
                app.search_edit.cursor,
            ),
            "Enter done  Esc clear",
        ),
        Mode::Upload | Mode::Detail | Mode::QuickEdit => (Vec::new(), DIALOG_HINTS),
        Mode::Navigate => (
            Vec::new(),
            if app.config.ui.show_key_hints {
                NAVIGATE_HINTS
            } else {
                ""
            },
        ),
    };

    // An error or a fresh toast takes the left side of the row
    if spans.is_empty() {
        if let Some(err) = &app.status_error {
            spans.push(Span::styled(
                format!(" {}", err),
                Style::default()
                    .fg(app.theme.error)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if let Some(toast) = app.gallery.notifier().current() {
            spans.push(Span::styled(
                format!(" \u{2713} {}", toast.notice.message()),
                Style::default().fg(app.theme.success).bg(bg),
            ));
        }
    }

    let used = spans_width(&spans);
    if spans.is_empty() {
        spans.push(Span::styled(
            format!(" {}", unicode::truncate_to_width(hint, width.saturating_sub(1))),
            dim,
        ));
    } else {
        let hint_width = unicode::display_width(hint);
        if used + hint_width + 2 <= width {
            spans.push(Span::styled(
                " ".repeat(width - used - hint_width - 1),
                Style::default().bg(bg),
            ));
            spans.push(Span::styled(hint, dim));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// `label` + text with a block cursor at byte offset `cursor`
fn prompt_spans<'a>(app: &App, label: &'a str, text: &str, cursor: usize) -> Vec<Span<'a>> {
    let bg = app.theme.background;
    let cursor = cursor.min(text.len());
    let (before, after) = text.split_at(cursor);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    vec![
        Span::styled(format!(" {}", label), Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(before.to_string(), text_style),
        Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(after.to_string(), text_style),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::image::ImageId;
    use crate::tui::line_edit::LineEdit;
    use crate::tui::render::test_helpers::*;

    fn row(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn test_key_hints() {
        let mut app = sample_app();
        assert!(row(&app).starts_with(" / search  Tab tag"));
        app.config.ui.show_key_hints = false;
        assert_eq!(row(&app), "");
    }

    #[test]
    fn test_toast_replaces_hints() {
        let mut app = sample_app();
        app.gallery.toggle_favorite(&ImageId::from("2")).unwrap();
        assert_eq!(row(&app), " \u{2713} Removed from favorites");
    }

    #[test]
    fn test_error_shown() {
        let mut app = sample_app();
        app.flash_error("image not found: 9");
        assert_eq!(row(&app), " image not found: 9");
    }

    #[test]
    fn test_import_prompt_with_cursor() {
        let mut app = sample_app();
        app.open_import();
        app.import_input = "https://x.io/a.png".into();
        app.import_edit = LineEdit::at_end(&app.import_input);
        let output = row(&app);
        assert!(output.starts_with(" Import URL: https://x.io/a.png\u{258C}"));
        assert!(output.ends_with("Enter import  Esc cancel"));
    }

    #[test]
    fn test_search_prompt() {
        let mut app = sample_app();
        app.mode = Mode::Search;
        app.gallery.controls_mut().query = "web".into();
        app.search_edit.cursor = 1;
        assert!(row(&app).starts_with(" /w\u{258C}eb"));
    }

    #[test]
    fn test_dialog_hints() {
        let mut app = sample_app();
        app.open_quick_edit();
        assert_eq!(row(&app), " Tab next field  Enter save  Esc close");
    }
}
