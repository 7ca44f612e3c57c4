use crossterm::event::{KeyCode, KeyEvent};

use crate::model::controls::ViewSize;
use crate::tui::app::{App, Mode};
use crate::tui::layout::{self, Direction};
use crate::tui::line_edit::LineEdit;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts everything; ?, Esc or q close it
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => move_cursor(app, Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => move_cursor(app, Direction::Right),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // View controls
        KeyCode::Char('/') => {
            app.search_edit = LineEdit::at_end(&app.gallery.controls().query);
            app.mode = Mode::Search;
        }
        KeyCode::Tab => app.cycle_tag(true),
        KeyCode::BackTab => app.cycle_tag(false),
        KeyCode::Char('c') => {
            let controls = app.gallery.controls_mut();
            controls.color = controls.color.next();
            app.after_view_change();
        }
        KeyCode::Char('C') => {
            let controls = app.gallery.controls_mut();
            controls.color = controls.color.prev();
            app.after_view_change();
        }
        KeyCode::Char('s') => {
            let keep = app.selected_id();
            let controls = app.gallery.controls_mut();
            controls.sort = controls.sort.next();
            if let Some(id) = keep {
                app.select_id(&id);
            }
        }
        KeyCode::Char('m') => {
            app.layout = app.layout.toggle();
            app.scroll = 0;
        }
        KeyCode::Char('1') => set_view_size(app, ViewSize::Small),
        KeyCode::Char('2') => set_view_size(app, ViewSize::Medium),
        KeyCode::Char('3') => set_view_size(app, ViewSize::Large),
        KeyCode::Char('d') => app.set_dark_mode(!app.dark_mode),
        KeyCode::Esc => {
            if app.gallery.controls().query.is_empty() {
                app.gallery.notifier_mut().dismiss();
            } else {
                app.gallery.controls_mut().query.clear();
                app.after_view_change();
            }
        }

        // Record actions
        KeyCode::Char('f') => toggle_favorite(app),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Char('e') => app.open_quick_edit(),
        KeyCode::Char('a') => app.open_upload(),
        KeyCode::Char('i') => app.open_import(),
        _ => {}
    }
}

fn set_view_size(app: &mut App, size: ViewSize) {
    app.view_size = size;
    app.scroll = 0;
}

/// Move spatially using the card positions from the last render. Before
/// anything has been rendered, fall back to index arithmetic.
fn move_cursor(app: &mut App, dir: Direction) {
    let len = app.visible_len();
    if len == 0 {
        return;
    }
    if app.card_slots.len() == len {
        if let Some(next) = layout::neighbor(&app.card_slots, app.cursor, dir) {
            app.cursor = next;
        }
        return;
    }
    let cols = app.columns();
    app.cursor = match dir {
        Direction::Up => app.cursor.saturating_sub(cols),
        Direction::Down if app.cursor + cols < len => app.cursor + cols,
        Direction::Down => app.cursor,
        Direction::Left => app.cursor.saturating_sub(1),
        Direction::Right => (app.cursor + 1).min(len - 1),
    };
}

fn toggle_favorite(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    match app.gallery.toggle_favorite(&id) {
        Ok(_) => app.select_id(&id),
        Err(e) => app.flash_error(e.to_string()),
    }
}
