mod dialogs;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::intake;

use super::app::{App, DetailDialog, Mode, QuickEditDialog, UploadDialog, UploadField};
use super::line_edit::LineEdit;

use dialogs::{handle_detail, handle_quick_edit, handle_upload};
use navigate::handle_navigate;
use prompt::{handle_import, handle_search};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_error = None;

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Import => handle_import(app, key),
        Mode::Upload => handle_upload(app, key),
        Mode::Detail => handle_detail(app, key),
        Mode::QuickEdit => handle_quick_edit(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
///
/// A pasted image path (what terminals emit on drag-and-drop) pre-fills the
/// upload dialog, opening it first when pasted over the gallery. Anything else
/// is inserted into the focused text field with newlines flattened.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() {
        return;
    }
    if matches!(app.mode, Mode::Navigate | Mode::Upload)
        && let Some(dropped) = intake::dropped_image(text)
    {
        if app.upload.is_none() {
            app.open_upload();
        }
        if let Some(dialog) = &mut app.upload {
            tracing::debug!(url = %dropped.url, "image file dropped");
            dialog.draft.prefill(dropped.url, dropped.suggested_title);
            dialog.error = None;
            dialog.focus(UploadField::Title);
        }
        return;
    }

    let clean = text.replace(['\n', '\r'], " ");
    match app.mode {
        Mode::Navigate => {}
        Mode::Search => {
            let query = &mut app.gallery.controls_mut().query;
            app.search_edit.insert_str(query, &clean);
            app.after_view_change();
        }
        Mode::Import => app.import_edit.insert_str(&mut app.import_input, &clean),
        Mode::Upload => {
            if let Some(dialog) = &mut app.upload {
                insert_upload_text(dialog, &clean);
            }
        }
        Mode::Detail => {
            if let Some(dialog) = &mut app.detail
                && let Some(buf) = DetailDialog::field_text(&mut dialog.draft, dialog.focus)
            {
                dialog.edit.insert_str(buf, &clean);
            }
        }
        Mode::QuickEdit => {
            if let Some(dialog) = &mut app.quick_edit {
                let buf = QuickEditDialog::field_text(&mut dialog.draft, dialog.focus);
                dialog.edit.insert_str(buf, &clean);
            }
        }
    }
}

fn insert_upload_text(dialog: &mut UploadDialog, text: &str) {
    if let Some(buf) = UploadDialog::field_text(&mut dialog.draft, dialog.focus) {
        dialog.edit.insert_str(buf, text);
    }
}

/// Shared single-line editing keys. Returns true if the key was consumed.
fn edit_text(edit: &mut LineEdit, buf: &mut String, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('a') if ctrl => edit.home(),
        KeyCode::Char('e') if ctrl => edit.end(buf),
        KeyCode::Char('u') if ctrl => edit.clear_to_start(buf),
        KeyCode::Char(c) if !ctrl => edit.insert_char(buf, c),
        KeyCode::Backspace => {
            edit.backspace(buf);
        }
        KeyCode::Delete => edit.delete(buf),
        KeyCode::Left => edit.left(buf),
        KeyCode::Right => edit.right(buf),
        KeyCode::Home => edit.home(),
        KeyCode::End => edit.end(buf),
        _ => return false,
    }
    true
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::model::config::ClipsConfig;
    use crate::model::sample::sample_images;
    use crate::tui::app::App;

    pub fn app() -> App {
        App::new(ClipsConfig::default(), sample_images())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn ch(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            super::handle_key(app, ch(c));
        }
    }
}
