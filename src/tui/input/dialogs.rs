use crossterm::event::{KeyCode, KeyEvent};

use crate::model::draft::DetailDraft;
use crate::model::image::ValidationError;
use crate::ops::GalleryError;
use crate::ops::image_ops::today;
use crate::tui::app::{
    App, DetailDialog, DetailField, QuickEditDialog, UploadDialog, UploadField,
};

use super::edit_text;

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

pub(super) fn handle_upload(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.upload.as_mut() else {
        app.close_dialogs();
        return;
    };
    match key.code {
        KeyCode::Esc => app.close_dialogs(),
        KeyCode::Tab => dialog.focus(dialog.focus.next()),
        KeyCode::BackTab => dialog.focus(dialog.focus.prev()),
        KeyCode::Enter => submit_upload(app),
        _ if dialog.focus == UploadField::Tags => handle_tag_picker(dialog, key),
        _ => {
            if let Some(buf) = UploadDialog::field_text(&mut dialog.draft, dialog.focus) {
                edit_text(&mut dialog.edit, buf, key);
            }
        }
    }
}

fn handle_tag_picker(dialog: &mut UploadDialog, key: KeyEvent) {
    let count = dialog.available_tags.len();
    if count == 0 {
        return;
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            dialog.tag_cursor = (dialog.tag_cursor + count - 1) % count;
        }
        KeyCode::Right | KeyCode::Char('l') => {
            dialog.tag_cursor = (dialog.tag_cursor + 1) % count;
        }
        KeyCode::Char(' ') => {
            if let Some(tag) = dialog.available_tags.get(dialog.tag_cursor) {
                dialog.draft.toggle_tag(tag);
                dialog.error = None;
            }
        }
        _ => {}
    }
}

fn submit_upload(app: &mut App) {
    let Some(dialog) = app.upload.as_mut() else {
        return;
    };
    if let Err(e) = dialog.draft.validate() {
        dialog.error = Some(e);
        return;
    }
    let draft = dialog.draft.to_image_draft(today());
    match app.gallery.add_image(draft) {
        Ok(id) => {
            app.close_dialogs();
            app.select_id(&id);
        }
        Err(GalleryError::Validation(e)) => {
            if let Some(dialog) = app.upload.as_mut() {
                dialog.error = Some(e);
            }
        }
        Err(e) => app.flash_error(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

pub(super) fn handle_detail(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.detail.as_mut() else {
        app.close_dialogs();
        return;
    };
    match (key.code, dialog.focus) {
        (KeyCode::Esc, _) => app.close_dialogs(),
        (KeyCode::Tab, _) => dialog.focus(dialog.focus.next()),
        (KeyCode::BackTab, _) => dialog.focus(dialog.focus.prev()),
        (KeyCode::Enter, DetailField::Tags) => {
            let suggested = app.config.tags.suggested.clone();
            let chosen = dialog
                .suggestion
                .and_then(|i| dialog.suggestions(&suggested).get(i).map(|s| s.to_string()));
            if let Some(tag) = chosen {
                dialog.draft.add_tag(&tag);
            } else if !dialog.draft.new_tag.trim().is_empty() {
                let typed = dialog.draft.new_tag.clone();
                dialog.draft.add_tag(&typed);
            } else {
                save_detail(app);
                return;
            }
            dialog.suggestion = None;
            dialog.edit.home();
        }
        (KeyCode::Enter, _) => save_detail(app),
        (KeyCode::Up | KeyCode::Down, DetailField::Tags) => {
            let count = dialog.suggestions(&app.config.tags.suggested).len();
            dialog.suggestion = step_suggestion(dialog.suggestion, count, key.code == KeyCode::Down);
        }
        (KeyCode::Backspace, DetailField::Tags) if dialog.draft.new_tag.is_empty() => {
            dialog.draft.tags.pop();
        }
        (KeyCode::Left | KeyCode::Right, DetailField::Collection) => {
            let current = dialog.draft.collection.clone();
            let choices = app.collection_choices(&current);
            let idx = choices.iter().position(|c| *c == current).unwrap_or(0);
            let next = if key.code == KeyCode::Right {
                (idx + 1) % choices.len()
            } else {
                (idx + choices.len() - 1) % choices.len()
            };
            if let Some(dialog) = app.detail.as_mut() {
                dialog.draft.collection = choices[next].clone();
            }
        }
        (_, field) => {
            if let Some(buf) = DetailDialog::field_text(&mut dialog.draft, field) {
                edit_text(&mut dialog.edit, buf, key);
                if field == DetailField::Tags {
                    dialog.suggestion = None;
                }
            }
        }
    }
}

/// Move through the suggestion list; None means the typed text itself
fn step_suggestion(current: Option<usize>, count: usize, down: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match (current, down) {
        (None, true) => Some(0),
        (None, false) => None,
        (Some(i), true) => Some((i + 1).min(count - 1)),
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    }
}

/// Save the detail draft if it differs from the stored record. The dialog
/// stays open on the saved values.
fn save_detail(app: &mut App) {
    let Some(dialog) = app.detail.as_ref() else {
        return;
    };
    let id = dialog.image_id.clone();
    let Some(record) = app.gallery.get(&id).cloned() else {
        app.flash_error(GalleryError::NotFound(id).to_string());
        app.close_dialogs();
        return;
    };
    if !dialog.draft.has_changes(&record) {
        return;
    }
    let updated = dialog.draft.apply(&record);
    match app.gallery.update_image(updated) {
        Ok(()) => {
            if let Some(saved) = app.gallery.get(&id).cloned()
                && let Some(dialog) = app.detail.as_mut()
            {
                dialog.draft = DetailDraft::from_record(&saved);
                let focus = dialog.focus;
                dialog.focus(focus);
            }
            app.select_id(&id);
        }
        Err(e) => app.flash_error(e.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Quick edit
// ---------------------------------------------------------------------------

pub(super) fn handle_quick_edit(app: &mut App, key: KeyEvent) {
    let Some(dialog) = app.quick_edit.as_mut() else {
        app.close_dialogs();
        return;
    };
    match key.code {
        KeyCode::Esc => app.close_dialogs(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => dialog.toggle_focus(),
        KeyCode::Enter => save_quick_edit(app),
        _ => {
            let buf = QuickEditDialog::field_text(&mut dialog.draft, dialog.focus);
            edit_text(&mut dialog.edit, buf, key);
            dialog.error = None;
        }
    }
}

fn save_quick_edit(app: &mut App) {
    let Some(dialog) = app.quick_edit.as_mut() else {
        return;
    };
    if dialog.draft.title.trim().is_empty() {
        dialog.error = Some(ValidationError::MissingTitle);
        return;
    }
    let id = dialog.image_id.clone();
    let Some(record) = app.gallery.get(&id) else {
        app.flash_error(GalleryError::NotFound(id).to_string());
        app.close_dialogs();
        return;
    };
    let updated = dialog.draft.apply(record);
    match app.gallery.update_image(updated) {
        Ok(()) => {
            app.close_dialogs();
            app.select_id(&id);
        }
        Err(e) => app.flash_error(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_keys::*;
    use super::super::{handle_key, handle_paste};
    use super::*;
    use crate::tui::app::{Mode, QuickEditField};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, key(code));
    }

    #[test]
    fn test_upload_requires_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Enter);
        let dialog = app.upload.as_ref().unwrap();
        assert_eq!(dialog.error, Some(ValidationError::MissingUrl));
        assert_eq!(app.gallery.len(), 6);
        assert_eq!(app.mode, Mode::Upload);
    }

    #[test]
    fn test_upload_full_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        handle_paste(&mut app, "https://example.com/hero.png");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "Hero shot");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "big type");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.upload.as_ref().unwrap().focus, UploadField::Tags);

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.upload.as_ref().unwrap().error,
            Some(ValidationError::NoTags)
        );

        // Tags offered: Web, UI, Typography, Logo
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.upload.as_ref().unwrap().draft.selected_tags, vec!["UI"]);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.upload.is_none());
        assert_eq!(app.gallery.len(), 7);
        let added = &app.gallery.images()[0];
        assert_eq!(added.title, "Hero shot");
        assert_eq!(added.url, "https://example.com/hero.png");
        assert_eq!(added.memo.as_deref(), Some("big type"));
        assert_eq!(added.source_url, None);
        assert_eq!(added.tags, vec!["UI"]);
        assert_eq!(app.selected_id(), Some(added.id.clone()));
        let toast = app.gallery.notifier().current().unwrap();
        assert_eq!(toast.notice.message(), "Image uploaded");
    }

    #[test]
    fn test_upload_esc_discards() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "https://example.com/a.png");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.upload.as_ref().unwrap().draft.url, "");
    }

    #[test]
    fn test_detail_add_tag_and_save() {
        let mut app = app();
        app.cursor = 4; // record 2
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "mod");
        let suggested = app.config.tags.suggested.clone();
        assert!(app.detail.as_ref().unwrap().suggestions(&suggested).is_empty());
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.detail.as_ref().unwrap().draft.tags,
            vec!["Typography", "mod"]
        );

        // Empty input + Enter saves
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Detail);
        let record = app.gallery.get(&"2".into()).unwrap();
        assert_eq!(record.tags, vec!["Typography", "mod"]);
        let toast = app.gallery.notifier().current().unwrap();
        assert_eq!(toast.notice.message(), "Changes saved");
        let dialog = app.detail.as_ref().unwrap();
        assert!(!dialog.draft.has_changes(record));
    }

    #[test]
    fn test_detail_pick_suggestion() {
        let mut app = app();
        app.cursor = 4; // record 2, tags [Typography]
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "o");
        // Logo (Typography is already on the record)
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        let dialog = app.detail.as_ref().unwrap();
        assert_eq!(dialog.draft.tags, vec!["Typography", "Logo"]);
        assert_eq!(dialog.draft.new_tag, "");
    }

    #[test]
    fn test_detail_backspace_removes_last_tag() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // record 6, [Logo, Typography]
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.detail.as_ref().unwrap().focus, DetailField::Tags);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.detail.as_ref().unwrap().draft.tags, vec!["Logo"]);
    }

    #[test]
    fn test_detail_without_changes_does_not_save() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.gallery.notifier().is_empty());
        assert_eq!(app.mode, Mode::Detail);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
    }

    #[test]
    fn test_detail_cycle_collection() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // record 6, no collection
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.detail.as_ref().unwrap().focus, DetailField::Collection);
        press(&mut app, KeyCode::Right);
        assert_eq!(
            app.detail.as_ref().unwrap().draft.collection,
            "LPデザイン集"
        );
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.detail.as_ref().unwrap().draft.collection, "配色サンプル");
        press(&mut app, KeyCode::Enter);
        let record = app.gallery.get(&"6".into()).unwrap();
        assert_eq!(record.collection.as_deref(), Some("配色サンプル"));
    }

    #[test]
    fn test_detail_edit_memo_keeps_date() {
        let mut app = app();
        press(&mut app, KeyCode::Enter); // record 6
        handle_key(&mut app, ctrl('u'));
        type_str(&mut app, "Brand book");
        press(&mut app, KeyCode::Enter);
        let record = app.gallery.get(&"6".into()).unwrap();
        assert_eq!(record.memo.as_deref(), Some("Brand book"));
        assert_eq!(record.date.to_string(), "2024-11-06");
    }

    #[test]
    fn test_quick_edit_saves_and_closes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e')); // record 6
        type_str(&mut app, " v2");
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.quick_edit.as_ref().unwrap().focus,
            QuickEditField::Memo
        );
        handle_key(&mut app, ctrl('u'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        let record = app.gallery.get(&"6".into()).unwrap();
        assert_eq!(record.title, "Brand Design v2");
        assert_eq!(record.memo, None);
        assert_eq!(
            app.gallery.notifier().current().unwrap().notice.message(),
            "Changes saved"
        );
    }

    #[test]
    fn test_quick_edit_rejects_empty_title() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        handle_key(&mut app, ctrl('u'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::QuickEdit);
        assert_eq!(
            app.quick_edit.as_ref().unwrap().error,
            Some(ValidationError::MissingTitle)
        );
        assert_eq!(app.gallery.get(&"6".into()).unwrap().title, "Brand Design");
    }
}
