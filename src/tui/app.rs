use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::model::config::ClipsConfig;
use crate::model::controls::{LayoutMode, TagFilter, ViewSize};
use crate::model::draft::{DetailDraft, QuickEditDraft, UploadDraft};
use crate::model::image::{ImageId, ImageRecord, ValidationError};
use crate::ops::Gallery;
use crate::ops::tags::suggest_tags;

use super::input;
use super::layout::CardSlot;
use super::line_edit::LineEdit;
use super::render;
use super::theme::Theme;
use super::toast::Toasts;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing in the search box; the view filters live
    Search,
    /// Typing a URL to import
    Import,
    Upload,
    Detail,
    QuickEdit,
}

// ---------------------------------------------------------------------------
// Dialog state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadField {
    Url,
    Title,
    SourceUrl,
    Memo,
    Tags,
}

impl UploadField {
    const ORDER: [UploadField; 5] = [
        UploadField::Url,
        UploadField::Title,
        UploadField::SourceUrl,
        UploadField::Memo,
        UploadField::Tags,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadField::Url => "Image URL",
            UploadField::Title => "Title",
            UploadField::SourceUrl => "Source URL",
            UploadField::Memo => "Memo",
            UploadField::Tags => "Tags",
        }
    }
}

/// Upload dialog: a new record being composed
#[derive(Debug, Clone)]
pub struct UploadDialog {
    pub draft: UploadDraft,
    pub focus: UploadField,
    pub edit: LineEdit,
    /// Tags offered for selection (tag options without "All")
    pub available_tags: Vec<String>,
    pub tag_cursor: usize,
    pub error: Option<ValidationError>,
}

impl UploadDialog {
    pub fn new(available_tags: Vec<String>) -> Self {
        UploadDialog {
            draft: UploadDraft::default(),
            focus: UploadField::Url,
            edit: LineEdit::default(),
            available_tags,
            tag_cursor: 0,
            error: None,
        }
    }

    /// The text buffer behind a field; None for the tag picker
    pub fn field_text(draft: &mut UploadDraft, field: UploadField) -> Option<&mut String> {
        match field {
            UploadField::Url => Some(&mut draft.url),
            UploadField::Title => Some(&mut draft.title),
            UploadField::SourceUrl => Some(&mut draft.source_url),
            UploadField::Memo => Some(&mut draft.memo),
            UploadField::Tags => None,
        }
    }

    pub fn focus(&mut self, field: UploadField) {
        self.focus = field;
        self.edit = match Self::field_text(&mut self.draft, field) {
            Some(buf) => LineEdit::at_end(buf),
            None => LineEdit::default(),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    Memo,
    SourceUrl,
    Tags,
    Collection,
}

impl DetailField {
    const ORDER: [DetailField; 4] = [
        DetailField::Memo,
        DetailField::SourceUrl,
        DetailField::Tags,
        DetailField::Collection,
    ];

    pub fn next(self) -> Self {
        cycle(&Self::ORDER, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ORDER, self, Self::ORDER.len() - 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailField::Memo => "Memo",
            DetailField::SourceUrl => "Source URL",
            DetailField::Tags => "Tags",
            DetailField::Collection => "Collection",
        }
    }
}

/// Detail dialog: memo, source, tags and collection of one record
#[derive(Debug, Clone)]
pub struct DetailDialog {
    pub image_id: ImageId,
    pub draft: DetailDraft,
    pub focus: DetailField,
    pub edit: LineEdit,
    /// Highlighted tag suggestion, if the user moved into the list
    pub suggestion: Option<usize>,
}

impl DetailDialog {
    pub fn new(record: &ImageRecord) -> Self {
        DetailDialog {
            image_id: record.id.clone(),
            draft: DetailDraft::from_record(record),
            focus: DetailField::Memo,
            edit: LineEdit::at_end(record.memo.as_deref().unwrap_or("")),
            suggestion: None,
        }
    }

    pub fn field_text(draft: &mut DetailDraft, field: DetailField) -> Option<&mut String> {
        match field {
            DetailField::Memo => Some(&mut draft.memo),
            DetailField::SourceUrl => Some(&mut draft.source_url),
            DetailField::Tags => Some(&mut draft.new_tag),
            DetailField::Collection => None,
        }
    }

    pub fn focus(&mut self, field: DetailField) {
        self.focus = field;
        self.suggestion = None;
        self.edit = match Self::field_text(&mut self.draft, field) {
            Some(buf) => LineEdit::at_end(buf),
            None => LineEdit::default(),
        };
    }

    /// Tag suggestions for the text being typed
    pub fn suggestions<'a>(&self, suggested: &'a [String]) -> Vec<&'a str> {
        suggest_tags(suggested, &self.draft.tags, &self.draft.new_tag)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickEditField {
    Title,
    Memo,
}

/// Quick edit dialog: title and memo only
#[derive(Debug, Clone)]
pub struct QuickEditDialog {
    pub image_id: ImageId,
    pub draft: QuickEditDraft,
    pub focus: QuickEditField,
    pub edit: LineEdit,
    pub error: Option<ValidationError>,
}

impl QuickEditDialog {
    pub fn new(record: &ImageRecord) -> Self {
        QuickEditDialog {
            image_id: record.id.clone(),
            draft: QuickEditDraft::from_record(record),
            focus: QuickEditField::Title,
            edit: LineEdit::at_end(&record.title),
            error: None,
        }
    }

    pub fn field_text(draft: &mut QuickEditDraft, field: QuickEditField) -> &mut String {
        match field {
            QuickEditField::Title => &mut draft.title,
            QuickEditField::Memo => &mut draft.memo,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            QuickEditField::Title => QuickEditField::Memo,
            QuickEditField::Memo => QuickEditField::Title,
        };
        self.edit = LineEdit::at_end(Self::field_text(&mut self.draft, self.focus));
    }
}

fn cycle<T: Copy + PartialEq>(order: &[T], current: T, step: usize) -> T {
    let idx = order.iter().position(|x| *x == current).unwrap_or(0);
    order[(idx + step) % order.len()]
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Main application state
pub struct App {
    pub gallery: Gallery<Toasts>,
    pub config: ClipsConfig,
    pub theme: Theme,
    pub dark_mode: bool,
    pub layout: LayoutMode,
    pub view_size: ViewSize,
    pub mode: Mode,
    pub should_quit: bool,
    /// Index into the visible records
    pub cursor: usize,
    /// First visible gallery row
    pub scroll: usize,
    pub show_help: bool,
    pub search_edit: LineEdit,
    pub import_input: String,
    pub import_edit: LineEdit,
    pub upload: Option<UploadDialog>,
    pub detail: Option<DetailDialog>,
    pub quick_edit: Option<QuickEditDialog>,
    /// Error shown in the status row until the next key press
    pub status_error: Option<String>,
    /// Card positions from the last render, used for spatial navigation
    pub card_slots: Vec<CardSlot>,
    /// Gallery rows visible in the last render
    pub gallery_height: usize,
}

impl App {
    pub fn new(config: ClipsConfig, images: Vec<ImageRecord>) -> Self {
        let dark_mode = config.ui.dark_mode;
        App {
            gallery: Gallery::new(images, Toasts::new()),
            theme: Theme::from_config(&config.ui, dark_mode),
            dark_mode,
            layout: config.ui.layout,
            view_size: config.ui.view_size,
            config,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            show_help: false,
            search_edit: LineEdit::default(),
            import_input: String::new(),
            import_edit: LineEdit::default(),
            upload: None,
            detail: None,
            quick_edit: None,
            status_error: None,
            card_slots: Vec::new(),
            gallery_height: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.view_size.columns()
    }

    pub fn visible_len(&self) -> usize {
        self.gallery.visible().len()
    }

    /// The record under the cursor
    pub fn selected(&self) -> Option<&ImageRecord> {
        self.gallery.visible().get(self.cursor).copied()
    }

    pub fn selected_id(&self) -> Option<ImageId> {
        self.selected().map(|r| r.id.clone())
    }

    /// Move the cursor onto a record if it is visible, otherwise clamp
    pub fn select_id(&mut self, id: &ImageId) {
        if let Some(pos) = self.gallery.visible().iter().position(|r| &r.id == id) {
            self.cursor = pos;
        } else {
            self.clamp_cursor();
        }
    }

    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.theme = Theme::from_config(&self.config.ui, dark);
    }

    /// Step the tag filter through the tag options, wrapping around
    pub fn cycle_tag(&mut self, forward: bool) {
        let options = self.gallery.tag_options();
        let current = self.gallery.controls().tag.as_option().to_string();
        let idx = options.iter().position(|o| *o == current).unwrap_or(0);
        let next = if forward {
            (idx + 1) % options.len()
        } else {
            (idx + options.len() - 1) % options.len()
        };
        self.gallery.controls_mut().tag = TagFilter::from_option(&options[next]);
        self.after_view_change();
    }

    /// Reset cursor and scroll after a control changed which records are visible
    pub fn after_view_change(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Case-insensitive regex for highlighting the search term
    pub fn search_re(&self) -> Option<Regex> {
        let query = &self.gallery.controls().query;
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    pub fn flash_error(&mut self, message: impl Into<String>) {
        self.status_error = Some(message.into());
    }

    // -----------------------------------------------------------------------
    // Dialogs
    // -----------------------------------------------------------------------

    pub fn open_upload(&mut self) {
        let available = self.gallery.tag_options().into_iter().skip(1).collect();
        self.upload = Some(UploadDialog::new(available));
        self.mode = Mode::Upload;
    }

    pub fn open_detail(&mut self) {
        let Some(dialog) = self.selected().map(DetailDialog::new) else {
            return;
        };
        self.detail = Some(dialog);
        self.mode = Mode::Detail;
    }

    pub fn open_quick_edit(&mut self) {
        let Some(dialog) = self.selected().map(QuickEditDialog::new) else {
            return;
        };
        self.quick_edit = Some(dialog);
        self.mode = Mode::QuickEdit;
    }

    pub fn open_import(&mut self) {
        self.import_input.clear();
        self.import_edit = LineEdit::default();
        self.mode = Mode::Import;
    }

    pub fn close_dialogs(&mut self) {
        self.upload = None;
        self.detail = None;
        self.quick_edit = None;
        self.mode = Mode::Navigate;
    }

    /// Collection choices in the detail dialog: none, then the configured names,
    /// plus the record's own value if it is not one of them
    pub fn collection_choices(&self, current: &str) -> Vec<String> {
        let mut choices = vec![String::new()];
        choices.extend(self.config.collections.names.iter().cloned());
        if !choices.iter().any(|c| c == current) {
            choices.push(current.to_string());
        }
        choices
    }
}

/// Run the TUI application
pub fn run(config: ClipsConfig, images: Vec<ImageRecord>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config, images);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::debug!(images = app.gallery.len(), "tui started");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.gallery.notifier_mut().prune();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::sample_images;

    fn app() -> App {
        App::new(ClipsConfig::default(), sample_images())
    }

    #[test]
    fn test_new_app_uses_config() {
        let mut config = ClipsConfig::default();
        config.ui.dark_mode = true;
        config.ui.layout = LayoutMode::Grid;
        config.ui.view_size = ViewSize::Large;
        let app = App::new(config, sample_images());
        assert!(app.dark_mode);
        assert_eq!(app.layout, LayoutMode::Grid);
        assert_eq!(app.columns(), 2);
        assert_eq!(app.theme.background, Theme::dark().background);
        assert_eq!(app.selected().map(|r| r.id.as_str()), Some("6"));
    }

    #[test]
    fn test_cycle_tag_wraps() {
        let mut app = app();
        app.cycle_tag(true);
        assert_eq!(app.gallery.controls().tag, TagFilter::Tag("Web".into()));
        app.cycle_tag(false);
        app.cycle_tag(false);
        assert_eq!(app.gallery.controls().tag, TagFilter::Tag("Logo".into()));
        app.cycle_tag(true);
        assert_eq!(app.gallery.controls().tag, TagFilter::All);
    }

    #[test]
    fn test_select_id_follows_record() {
        let mut app = app();
        app.select_id(&ImageId::from("3"));
        assert_eq!(app.cursor, 3);
        app.gallery.controls_mut().tag = TagFilter::Tag("UI".into());
        app.select_id(&ImageId::from("3"));
        // Not visible any more: clamped into range
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_search_re_escapes_query() {
        let mut app = app();
        assert!(app.search_re().is_none());
        app.gallery.controls_mut().query = "a.b".into();
        let re = app.search_re().unwrap();
        assert!(re.is_match("A.B"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_collection_choices_include_custom_value() {
        let app = app();
        let choices = app.collection_choices("");
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0], "");
        let choices = app.collection_choices("Misc");
        assert_eq!(choices.last().map(String::as_str), Some("Misc"));
    }

    #[test]
    fn test_upload_dialog_focus_cycle() {
        assert_eq!(UploadField::Tags.next(), UploadField::Url);
        assert_eq!(UploadField::Url.prev(), UploadField::Tags);
        assert_eq!(DetailField::Collection.next(), DetailField::Memo);
        let mut app = app();
        app.open_upload();
        let dialog = app.upload.as_ref().unwrap();
        assert_eq!(dialog.available_tags, vec!["Web", "UI", "Typography", "Logo"]);
        assert_eq!(app.mode, Mode::Upload);
    }
}
