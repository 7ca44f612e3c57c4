use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::controls::{ColorFilter, LayoutMode};
use crate::model::image::ImageColor;
use crate::tui::app::{App, Mode};

use super::spans_width;

/// Title on the left, counts on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![
        Span::styled(" \u{25C6} ", Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            "My Design Clips",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let images = app.gallery.images();
    let favorites = images.iter().filter(|r| r.is_favorite).count();
    let counts = format!(
        "{}/{} images  \u{2605} {} ",
        app.visible_len(),
        images.len(),
        favorites
    );
    let used = spans_width(&spans);
    let counts_width = counts.chars().count();
    if used + counts_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - counts_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Search box, colour filter swatches, sort, layout and size
pub fn render_control_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let text = Style::default().fg(app.theme.text).bg(bg);
    let bright = Style::default().fg(app.theme.text_bright).bg(bg);
    let sep = Span::styled("  \u{2502}  ", dim);
    let controls = app.gallery.controls();

    let mut spans = vec![Span::styled(" \u{2315} ", dim)];
    if controls.query.is_empty() && app.mode != Mode::Search {
        spans.push(Span::styled("search", dim));
    } else {
        spans.push(Span::styled(controls.query.clone(), bright));
    }
    if app.mode == Mode::Search {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    spans.push(sep.clone());

    // Colour swatches: the active one is raised with brackets
    let all_active = controls.color == ColorFilter::All;
    spans.push(Span::styled(
        if all_active { "[all]" } else { " all " },
        if all_active { bright } else { dim },
    ));
    for color in ImageColor::ALL {
        let active = controls.color == ColorFilter::Only(color);
        let swatch = Style::default().fg(app.theme.swatch(color)).bg(bg);
        if active {
            spans.push(Span::styled("[", bright));
            spans.push(Span::styled("\u{25CF}", swatch));
            spans.push(Span::styled("]", bright));
            spans.push(Span::styled(format!(" {}", color.label()), text));
        } else {
            spans.push(Span::styled(" \u{25CF} ", swatch));
        }
    }
    spans.push(sep.clone());

    spans.push(Span::styled("sort ", dim));
    spans.push(Span::styled(controls.sort.label(), text));
    spans.push(sep.clone());

    let layout = match app.layout {
        LayoutMode::Masonry => "masonry",
        LayoutMode::Grid => "grid",
    };
    spans.push(Span::styled(layout, text));
    spans.push(Span::styled(" \u{00B7} ", dim));
    spans.push(Span::styled(app.view_size.label(), text));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// Tag filter options with the active one highlighted, then a separator line
pub fn render_tag_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let bg = app.theme.background;
    let current = app.gallery.controls().tag.as_option().to_string();
    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for option in app.gallery.tag_options() {
        let style = if option == current {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.border).bg(bg),
        )),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::controls::{SortBy, TagFilter};
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_header_counts() {
        let mut app = sample_app();
        app.gallery.controls_mut().tag = TagFilter::Tag("UI".into());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.starts_with(" \u{25C6} My Design Clips"));
        assert!(output.ends_with("3/6 images  \u{2605} 2"));
    }

    #[test]
    fn test_control_bar_shows_state() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_control_bar(frame, &app, area);
        });
        assert!(output.contains("search"));
        assert!(output.contains("[all]"));
        assert!(output.contains("sort Newest"));
        assert!(output.contains("masonry \u{00B7} M"));

        let controls = app.gallery.controls_mut();
        controls.query = "logo".into();
        controls.color = ColorFilter::Only(ImageColor::Green);
        controls.sort = SortBy::Favorite;
        app.layout = LayoutMode::Grid;
        let output = render_to_string(100, 1, |frame, area| {
            render_control_bar(frame, &app, area);
        });
        assert!(output.contains("logo"));
        assert!(!output.contains("search"));
        assert!(output.contains(" all "));
        // The label sits right after the active swatch
        assert!(output.contains("[\u{25CF}] Green \u{25CF} "));
        assert!(output.contains("sort Favorites"));
        assert!(output.contains("grid"));
    }

    #[test]
    fn test_tag_bar_lists_options() {
        let app = sample_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_tag_bar(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert_eq!(first, "  All   Web   UI   Typography   Logo");
        assert!(output.lines().nth(1).unwrap().starts_with("\u{2500}\u{2500}"));
    }
}
