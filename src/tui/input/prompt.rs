use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::edit_text;

/// Live search: every edit re-filters the gallery
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.mode = Mode::Navigate,
        KeyCode::Esc => {
            app.gallery.controls_mut().query.clear();
            app.after_view_change();
            app.mode = Mode::Navigate;
        }
        _ => {
            let query = &mut app.gallery.controls_mut().query;
            let before = query.clone();
            edit_text(&mut app.search_edit, query, key);
            if *query != before {
                app.after_view_change();
            }
        }
    }
}

pub(super) fn handle_import(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.mode = Mode::Navigate,
        KeyCode::Enter => {
            app.mode = Mode::Navigate;
            let url = std::mem::take(&mut app.import_input);
            if url.trim().is_empty() {
                return;
            }
            match app.gallery.import_from_url(&url) {
                Ok(id) => app.select_id(&id),
                Err(e) => app.flash_error(e.to_string()),
            }
        }
        _ => {
            edit_text(&mut app.import_edit, &mut app.import_input, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::test_keys::*;
    use super::*;

    #[test]
    fn test_search_filters_live_and_enter_keeps_query() {
        let mut app = app();
        handle_key(&mut app, ch('/'));
        assert_eq!(app.mode, Mode::Search);
        type_str(&mut app, "LAYOUT");
        assert_eq!(app.visible_len(), 1);
        assert_eq!(app.selected_id().unwrap().as_str(), "5");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.gallery.controls().query, "LAYOUT");
    }

    #[test]
    fn test_search_backspace_and_esc() {
        let mut app = app();
        handle_key(&mut app, ch('/'));
        type_str(&mut app, "uix");
        assert_eq!(app.visible_len(), 0);
        handle_key(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.gallery.controls().query, "ui");
        assert_eq!(app.visible_len(), 3);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.gallery.controls().query, "");
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_search_resumes_at_end_of_query() {
        let mut app = app();
        app.gallery.controls_mut().query = "we".into();
        handle_key(&mut app, ch('/'));
        type_str(&mut app, "b");
        assert_eq!(app.gallery.controls().query, "web");
    }

    #[test]
    fn test_import_adds_record_and_selects_it() {
        let mut app = app();
        handle_key(&mut app, ch('i'));
        type_str(&mut app, "  https://example.com/shot.png ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.gallery.len(), 7);
        let selected = app.selected().unwrap();
        assert_eq!(selected.title, "Imported Image");
        assert_eq!(selected.url, "https://example.com/shot.png");
        let toast = app.gallery.notifier().current().unwrap();
        assert_eq!(toast.notice.message(), "Imported image from URL");
    }

    #[test]
    fn test_import_blank_is_ignored() {
        let mut app = app();
        handle_key(&mut app, ch('i'));
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.gallery.len(), 6);
        assert!(app.status_error.is_none());
        assert!(app.gallery.notifier().is_empty());
    }

    #[test]
    fn test_import_esc_cancels() {
        let mut app = app();
        handle_key(&mut app, ch('i'));
        type_str(&mut app, "https://example.com/x.png");
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.gallery.len(), 6);
    }
}
