use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::tui::app::{App, DetailField, QuickEditField, UploadField};
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::centered_rect;

/// Field label, marked when focused, with an optional key hint
fn label_line<'a>(theme: &Theme, label: &'a str, focused: bool, hint: &'a str) -> Line<'a> {
    let bg = theme.background;
    if !focused {
        return Line::from(Span::styled(
            format!("  {}", label),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    let style = Style::default()
        .fg(theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(format!("\u{203A} {}", label), style)];
    if !hint.is_empty() {
        spans.push(Span::styled(
            format!("  ({})", hint),
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}

/// Label line plus value line of one text field
fn text_field<'a>(
    theme: &Theme,
    label: &'a str,
    value: &str,
    cursor: Option<usize>,
    placeholder: &'a str,
) -> Vec<Line<'a>> {
    let bg = theme.background;
    let label_line = label_line(theme, label, cursor.is_some(), "");

    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let mut spans = vec![Span::styled("  ", text_style)];
    match cursor {
        Some(cursor) => {
            let (before, after) = value.split_at(cursor.min(value.len()));
            spans.push(Span::styled(before.to_string(), text_style));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(after.to_string(), text_style));
        }
        None if value.is_empty() => {
            spans.push(Span::styled(placeholder, Style::default().fg(theme.dim).bg(bg)));
        }
        None => spans.push(Span::styled(value.to_string(), text_style)),
    }
    vec![label_line, Line::from(spans)]
}

fn dialog_block<'a>(theme: &Theme, title: String) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.selection_border).bg(theme.background))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.text_bright)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background))
}

fn error_line<'a>(theme: &Theme, message: String) -> Line<'a> {
    Line::from(Span::styled(
        format!("  \u{26A0} {}", message),
        Style::default().fg(theme.error).bg(theme.background),
    ))
}

fn show(frame: &mut Frame, area: Rect, block: Block, lines: Vec<Line>) {
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

pub fn render_upload_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.upload else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;
    let rect = centered_rect(70, 80, area);
    let mut lines = vec![Line::from(Span::styled(
        "  Paste a URL or drop an image file",
        Style::default().fg(theme.dim).bg(bg),
    ))];

    for field in [
        UploadField::Url,
        UploadField::Title,
        UploadField::SourceUrl,
        UploadField::Memo,
    ] {
        let value = match field {
            UploadField::Url => &dialog.draft.url,
            UploadField::Title => &dialog.draft.title,
            UploadField::SourceUrl => &dialog.draft.source_url,
            UploadField::Memo => &dialog.draft.memo,
            UploadField::Tags => continue,
        };
        let cursor = (dialog.focus == field).then_some(dialog.edit.cursor);
        let placeholder = match field {
            UploadField::Url | UploadField::Title => "(required)",
            _ => "(optional)",
        };
        lines.extend(text_field(theme, field.label(), value, cursor, placeholder));
    }

    // Tag picker
    let focused = dialog.focus == UploadField::Tags;
    lines.push(label_line(
        theme,
        UploadField::Tags.label(),
        focused,
        "\u{2190}\u{2192} move, Space select",
    ));
    let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];
    for (i, tag) in dialog.available_tags.iter().enumerate() {
        let mark = if dialog.draft.is_selected(tag) { "\u{25A0}" } else { "\u{25A1}" };
        let mut style = Style::default().fg(theme.text).bg(bg);
        if dialog.draft.is_selected(tag) {
            style = style.fg(theme.text_bright).add_modifier(Modifier::BOLD);
        }
        if focused && i == dialog.tag_cursor {
            style = style.bg(theme.selection_bg);
        }
        spans.push(Span::styled(format!("{} {}", mark, tag), style));
        spans.push(Span::styled("  ", Style::default().bg(bg)));
    }
    if dialog.available_tags.is_empty() {
        spans.push(Span::styled(
            "(no tags yet)",
            Style::default().fg(theme.dim).bg(bg),
        ));
    }
    lines.push(Line::from(spans));

    if let Some(err) = &dialog.error {
        lines.push(Line::from(""));
        lines.push(error_line(theme, err.to_string()));
    }

    show(frame, rect, dialog_block(theme, "Add Image".into()), lines);
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

pub fn render_detail_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.detail else {
        return;
    };
    let Some(record) = app.gallery.get(&dialog.image_id) else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;
    let dim = Style::default().fg(theme.dim).bg(bg);
    let rect = centered_rect(74, 86, area);
    let inner_width = rect.width.saturating_sub(4) as usize;

    let mut info = vec![Span::styled(format!("  {}", record.date), dim)];
    if let Some(color) = record.color {
        info.push(Span::styled("  ", dim));
        info.push(Span::styled(
            "\u{25CF} ",
            Style::default().fg(theme.swatch(color)).bg(bg),
        ));
        info.push(Span::styled(color.label(), dim));
    }
    if record.is_favorite {
        info.push(Span::styled(
            "  \u{2605} favorite",
            Style::default().fg(theme.favorite).bg(bg),
        ));
    }
    let mut lines = vec![
        Line::from(info),
        Line::from(Span::styled(
            format!("  {}", unicode::truncate_to_width(&record.url, inner_width)),
            dim,
        )),
    ];

    for field in [DetailField::Memo, DetailField::SourceUrl] {
        let value = match field {
            DetailField::Memo => &dialog.draft.memo,
            _ => &dialog.draft.source_url,
        };
        let cursor = (dialog.focus == field).then_some(dialog.edit.cursor);
        lines.extend(text_field(theme, field.label(), value, cursor, "(empty)"));
    }

    // Tags: chips, then the new-tag input and its suggestions
    let tags_focused = dialog.focus == DetailField::Tags;
    let mut tag_lines = text_field(
        theme,
        DetailField::Tags.label(),
        &dialog.draft.new_tag,
        tags_focused.then_some(dialog.edit.cursor),
        "",
    );
    let mut chips = vec![Span::styled("  ", Style::default().bg(bg))];
    for tag in &dialog.draft.tags {
        chips.push(Span::styled(
            format!(" #{} ", tag),
            Style::default().fg(theme.text_bright).bg(theme.selection_bg),
        ));
        chips.push(Span::styled(" ", Style::default().bg(bg)));
    }
    if let Some(input) = tag_lines.pop() {
        chips.extend(input.spans.into_iter().skip(1));
    }
    tag_lines.push(Line::from(chips));
    lines.extend(tag_lines);
    if tags_focused {
        let suggestions = dialog.suggestions(&app.config.tags.suggested);
        if !suggestions.is_empty() {
            let mut spans = vec![Span::styled("    ", dim)];
            for (i, s) in suggestions.iter().enumerate() {
                let style = if dialog.suggestion == Some(i) {
                    Style::default().fg(theme.text_bright).bg(theme.selection_bg)
                } else {
                    dim
                };
                spans.push(Span::styled(format!("+{}", s), style));
                spans.push(Span::styled(" ", dim));
            }
            lines.push(Line::from(spans));
        }
    }

    // Collection selector
    let collection_focused = dialog.focus == DetailField::Collection;
    let collection = if dialog.draft.collection.is_empty() {
        "none"
    } else {
        dialog.draft.collection.as_str()
    };
    lines.push(label_line(
        theme,
        DetailField::Collection.label(),
        collection_focused,
        "\u{2190}\u{2192} change",
    ));
    lines.push(Line::from(Span::styled(
        format!("  \u{2039} {} \u{203A}", collection),
        Style::default().fg(theme.text_bright).bg(bg),
    )));

    lines.push(Line::from(""));
    if dialog.draft.has_changes(record) {
        lines.push(Line::from(Span::styled(
            "  \u{25CF} unsaved changes (Enter to save)",
            Style::default().fg(theme.favorite).bg(bg),
        )));
    }

    show(frame, rect, dialog_block(theme, record.title.clone()), lines);
}

// ---------------------------------------------------------------------------
// Quick edit
// ---------------------------------------------------------------------------

pub fn render_quick_edit_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dialog) = &app.quick_edit else {
        return;
    };
    let theme = &app.theme;
    let rect = centered_rect(60, 50, area);
    let mut lines = Vec::new();
    for (field, label, value) in [
        (QuickEditField::Title, "Title", &dialog.draft.title),
        (QuickEditField::Memo, "Memo", &dialog.draft.memo),
    ] {
        let cursor = (dialog.focus == field).then_some(dialog.edit.cursor);
        lines.extend(text_field(theme, label, value, cursor, "(empty)"));
    }
    if let Some(err) = &dialog.error {
        lines.push(Line::from(""));
        lines.push(error_line(theme, err.to_string()));
    }
    show(frame, rect, dialog_block(theme, "Quick Edit".into()), lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::image::ValidationError;
    use crate::tui::render::test_helpers::*;

    fn render_dialog(app: &App, f: fn(&mut Frame, &App, Rect)) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| f(frame, app, area))
    }

    #[test]
    fn test_upload_dialog_fields() {
        let mut app = sample_app();
        app.open_upload();
        if let Some(dialog) = app.upload.as_mut() {
            dialog.draft.url = "https://example.com/a.png".into();
            dialog.focus(UploadField::Url);
            dialog.draft.toggle_tag("UI");
            dialog.error = Some(ValidationError::MissingTitle);
        }
        let output = render_dialog(&app, render_upload_dialog);
        assert!(output.contains(" Add Image "));
        assert!(output.contains("\u{203A} Image URL"));
        assert!(output.contains("https://example.com/a.png\u{258C}"));
        assert!(output.contains("(required)"));
        assert!(output.contains("\u{25A0} UI"));
        assert!(output.contains("\u{25A1} Web"));
        assert!(output.contains("a title is required"));
    }

    #[test]
    fn test_detail_dialog_shows_record() {
        let mut app = sample_app();
        app.cursor = 4; // record 2, favorite
        app.open_detail();
        let output = render_dialog(&app, render_detail_dialog);
        assert!(output.contains(" Typography Example "));
        assert!(output.contains("2024-11-02"));
        assert!(output.contains("\u{2605} favorite"));
        assert!(output.contains("Beautiful font pairing\u{258C}"));
        assert!(output.contains("#Typography"));
        assert!(output.contains("\u{2039} none \u{203A}"));
        assert!(!output.contains("unsaved changes"));

        if let Some(dialog) = app.detail.as_mut() {
            dialog.draft.add_tag("Print");
        }
        let output = render_dialog(&app, render_detail_dialog);
        assert!(output.contains("#Print"));
        assert!(output.contains("unsaved changes"));
    }

    #[test]
    fn test_detail_dialog_suggestions() {
        let mut app = sample_app();
        app.open_detail(); // record 6: Logo, Typography
        if let Some(dialog) = app.detail.as_mut() {
            dialog.focus(DetailField::Tags);
            dialog.draft.new_tag = "u".into();
            dialog.edit.cursor = 1;
        }
        let output = render_dialog(&app, render_detail_dialog);
        assert!(output.contains("+UI"));
        assert!(!output.contains("+Typography"));
    }

    #[test]
    fn test_quick_edit_dialog() {
        let mut app = sample_app();
        app.open_quick_edit();
        let output = render_dialog(&app, render_quick_edit_dialog);
        assert!(output.contains(" Quick Edit "));
        assert!(output.contains("Brand Design\u{258C}"));
        assert!(output.contains("Corporate branding elements"));
    }
}
