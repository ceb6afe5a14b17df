//! Application shell: owns the session and routes terminal events

use crate::cli::AppConfig;
use crate::domain::{InputRouter, MoveOutcome, SelectionEvent, Session};
use crate::error::SorterError;
use crate::preview::Viewer;
use crate::status::ModifierStatus;
use crate::tui::{
    handle_key_event, handle_prompt_input, is_modifier_only, Dialog, FolderPrompt, Hit, KeyAction,
    PromptAction, ShellLayout, ViewState,
};
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::text::Line;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppControl {
    Continue,
    Quit,
}

pub struct App {
    config: AppConfig,
    session: Session,
    viewer: Viewer,
    router: InputRouter,
    status: ModifierStatus,
    view: ViewState,
    dialogs: VecDeque<Dialog>,
    /// Focused button: bucket indices, then the Open Folder button
    focus: usize,
    message: Option<String>,
    current_size: Option<u64>,
    area: Rect,
}

impl App {
    /// Builds the shell and opens `config.folder`, or shows the folder prompt
    /// when none was given.
    pub fn new(config: AppConfig, enhanced_keyboard: bool, now: Instant) -> Self {
        let folder = config.folder.clone();
        let mut app = App {
            viewer: Viewer::new(config.max_height),
            status: ModifierStatus::new(enhanced_keyboard, config.status_interval, now),
            config,
            session: Session::new(),
            router: InputRouter::default(),
            view: ViewState::Browsing,
            dialogs: VecDeque::new(),
            focus: 0,
            message: None,
            current_size: None,
            area: Rect::default(),
        };

        match folder {
            Some(folder) => app.open_folder(&folder),
            None => app.start_folder_prompt(),
        }
        app
    }

    /// Opens `folder` as the new session.
    ///
    /// An unreadable folder leaves the current session in place and shows a dialog.
    pub fn open_folder(&mut self, folder: &Path) {
        let report = match self.session.open(folder, &self.config.sidecar_name) {
            Ok(report) => report,
            Err(e) => {
                warn!("{}", e);
                self.push_dialog(&e);
                return;
            }
        };

        self.router = InputRouter::new(self.session.buckets());
        for conflict in self.router.conflicts() {
            warn!("{}", conflict);
        }
        self.focus = 0;

        let mut parts = vec![format!(
            "{} images, {} buckets",
            report.images,
            self.session.buckets().len()
        )];
        if let Some(first) = report.warnings.first() {
            parts.push(if report.warnings.len() == 1 {
                first.to_string()
            } else {
                format!("{} ({} records skipped)", first, report.warnings.len())
            });
        }
        if let Some(conflict) = self.router.conflicts().first() {
            parts.push(conflict.to_string());
        }
        self.message = Some(parts.join("; "));

        if let Some(error) = report.config_error {
            self.push_dialog(&error);
        }

        self.refresh_viewer();
    }

    /// Shows the folder prompt, prefilled with the open folder or the
    /// working directory.
    pub fn start_folder_prompt(&mut self) {
        let start = self
            .session
            .folder()
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.view = ViewState::OpenFolder(FolderPrompt { input: start });
    }

    /// Routes a selection to the classifier. Returns true when it was consumed.
    pub fn dispatch(&mut self, event: SelectionEvent) -> bool {
        let Some(index) = self.router.resolve(event) else {
            return false;
        };
        debug!(?event, bucket = index, "Dispatching selection");

        match self.session.classify(index) {
            Ok(MoveOutcome::Moved { record, remaining }) => {
                let name = record
                    .from
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.message = Some(format!(
                    "Moved {} to {} at {} ({} left)",
                    name,
                    record.label,
                    record.at.format("%H:%M:%S"),
                    remaining
                ));
                self.refresh_viewer();
            }
            Ok(MoveOutcome::Idle) => {
                self.message = Some("No images left to sort".to_string());
            }
            Err(SorterError::UnknownBucket(index)) => {
                debug!(bucket = index, "Ignoring selection of unknown bucket");
            }
            Err(e) => {
                warn!("{}", e);
                self.push_dialog(&e);
            }
        }
        true
    }

    /// Shows the image at the cursor, or clears the pane when none is left
    pub fn refresh_viewer(&mut self) {
        let Some(current) = self.session.current_image().map(Path::to_path_buf) else {
            self.viewer.clear();
            self.current_size = None;
            return;
        };

        self.current_size = fs::metadata(&current).map(|m| m.len()).ok();
        if let Err(e) = self.viewer.show(&current) {
            warn!("{}", e);
            self.message = Some(e.to_string());
        }
    }

    pub fn handle_event(&mut self, event: Event) -> AppControl {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    self.handle_click(mouse.column, mouse.row);
                }
                AppControl::Continue
            }
            _ => AppControl::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppControl {
        self.status.observe(&key);
        if key.kind == KeyEventKind::Release || is_modifier_only(&key) {
            return AppControl::Continue;
        }

        // Dialogs are modal
        if self.dialogs.pop_front().is_some() {
            return AppControl::Continue;
        }

        match self.view {
            ViewState::Help => {
                self.view = ViewState::Browsing;
                return AppControl::Continue;
            }
            ViewState::OpenFolder(_) => {
                self.handle_prompt_key(key);
                return AppControl::Continue;
            }
            ViewState::Browsing => {}
        }

        match handle_key_event(key) {
            KeyAction::Quit => return AppControl::Quit,
            KeyAction::OpenFolder => self.start_folder_prompt(),
            KeyAction::FocusNext => self.focus = (self.focus + 1) % self.focus_slots(),
            KeyAction::FocusPrevious => {
                let slots = self.focus_slots();
                self.focus = (self.focus + slots - 1) % slots;
            }
            KeyAction::Activate => self.activate_focused(),
            KeyAction::Help => self.view = ViewState::Help,
            KeyAction::Select(c) => {
                if !self.dispatch(SelectionEvent::Hotkey(c)) {
                    debug!(key = %c, "Key not bound to a bucket");
                }
            }
            KeyAction::None => {}
        }
        AppControl::Continue
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let ViewState::OpenFolder(prompt) = &mut self.view else {
            return;
        };

        match handle_prompt_input(key) {
            PromptAction::Insert(c) => prompt.input.push(c),
            PromptAction::Backspace => {
                prompt.input.pop();
            }
            PromptAction::Clear => prompt.input.clear(),
            PromptAction::Cancel => self.view = ViewState::Browsing,
            PromptAction::Submit => {
                let folder = expand_path(prompt.input.trim());
                self.view = ViewState::Browsing;
                self.open_folder(&folder);
            }
            PromptAction::None => {}
        }
    }

    fn handle_click(&mut self, col: u16, row: u16) {
        if self.dialogs.pop_front().is_some() {
            return;
        }
        match self.view {
            ViewState::Help => {
                self.view = ViewState::Browsing;
                return;
            }
            ViewState::OpenFolder(_) => return,
            ViewState::Browsing => {}
        }

        let layout = ShellLayout::compute(self.area, self.session.buckets().len());
        match layout.hit_test(col, row) {
            Some(Hit::Bucket(index)) => {
                self.focus = index;
                self.dispatch(SelectionEvent::Button(index));
            }
            Some(Hit::OpenFolder) => {
                self.focus = self.session.buckets().len();
                self.start_folder_prompt();
            }
            None => {}
        }
    }

    fn activate_focused(&mut self) {
        if self.focus < self.session.buckets().len() {
            self.dispatch(SelectionEvent::Button(self.focus));
        } else {
            self.start_folder_prompt();
        }
    }

    fn focus_slots(&self) -> usize {
        self.session.buckets().len() + 1
    }

    fn push_dialog(&mut self, error: &SorterError) {
        self.dialogs.push_back(Dialog {
            title: error.title().to_string(),
            message: error.to_string(),
        });
    }

    /// Drives the caps-lock label. Returns true when it was refreshed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.status.tick(now)
    }

    pub fn until_next_tick(&self, now: Instant) -> Duration {
        self.status.until_next_tick(now)
    }

    /// Records the terminal size used for mouse hit-testing
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Rendered image for a pane of `cols` x `rows` cells
    pub fn image_lines(&mut self, cols: u16, rows: u16) -> &[Line<'static>] {
        self.viewer.lines_for(cols, rows)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn router(&self) -> &InputRouter {
        &self.router
    }

    pub fn status(&self) -> &ModifierStatus {
        &self.status
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// The dialog currently shown, if any
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Size in bytes of the current image file
    pub fn current_size(&self) -> Option<u64> {
        self.current_size
    }
}

/// Expands a leading `~` to the home directory
pub fn expand_path(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::buckets::DEFAULT_SIDECAR_NAME;
    use crate::domain::is_image;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent};
    use tempfile::TempDir;

    fn write_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_pixel(20, 10, image::Rgb([10, 120, 200]))
            .save(&path)
            .unwrap();
        path
    }

    /// Sidecar paths starting with `./` are rewritten to absolute paths
    /// inside the temp folder.
    fn folder_with(images: &[&str], sidecar: Option<&str>) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        for name in images {
            if is_image(Path::new(name)) {
                write_image(temp_dir.path(), name);
            } else {
                fs::write(temp_dir.path().join(name), b"not an image").unwrap();
            }
        }
        if let Some(contents) = sidecar {
            let absolute = format!("\"{}/", temp_dir.path().display());
            let contents = contents.replace("\"./", &absolute);
            fs::write(temp_dir.path().join(DEFAULT_SIDECAR_NAME), contents).unwrap();
        }
        temp_dir
    }

    const CATS_AND_DOGS: &str =
        r#"[{"value":"Cats","path":"./cats","key":"c"},{"value":"Dogs","path":"./dogs","key":"d"}]"#;

    fn open(folder: &Path) -> App {
        let config = AppConfig {
            folder: Some(folder.to_path_buf()),
            ..AppConfig::default()
        };
        let mut app = App::new(config, true, Instant::now());
        app.set_area(Rect::new(0, 0, 100, 30));
        app
    }

    fn press(app: &mut App, code: KeyCode) -> AppControl {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(app: &mut App, col: u16, row: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    mod open_tests {
        use super::*;

        #[test]
        fn test_open_folder_shows_first_image() {
            let temp_dir = folder_with(&["a.jpg", "b.png", "c.txt"], Some(CATS_AND_DOGS));

            let app = open(temp_dir.path());

            assert_eq!(app.session().images().len(), 2);
            assert_eq!(app.session().buckets().len(), 2);
            assert!(app.dialog().is_none());
            let displayed = app.viewer().displayed().unwrap();
            assert_eq!(Some(displayed.path.as_path()), app.session().current_image());
            assert!(app.message().unwrap().contains("2 images, 2 buckets"));
        }

        #[test]
        fn test_start_without_folder_shows_prompt() {
            let app = App::new(AppConfig::default(), false, Instant::now());

            assert!(matches!(app.view(), ViewState::OpenFolder(_)));
            assert!(app.session().folder().is_none());
        }

        #[test]
        fn test_missing_sidecar_opens_with_dialog() {
            let temp_dir = folder_with(&["a.png"], None);

            let app = open(temp_dir.path());

            assert_eq!(app.session().images().len(), 1);
            assert!(app.session().buckets().is_empty());
            assert_eq!(app.dialog().unwrap().title, "Config Error");
        }

        #[test]
        fn test_unreadable_folder_keeps_session() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            app.open_folder(Path::new("/nonexistent/folder/12345"));

            assert_eq!(app.dialog().unwrap().title, "Folder Error");
            assert_eq!(app.session().images().len(), 1);
            assert_eq!(app.session().buckets().len(), 2);
        }

        #[test]
        fn test_skipped_record_reported_on_status_line() {
            let temp_dir = folder_with(
                &["a.png"],
                Some(r#"[{"value":"Cats","path":"./cats"},{"path":"./broken"}]"#),
            );

            let app = open(temp_dir.path());

            assert_eq!(app.session().buckets().len(), 1);
            assert!(app.message().unwrap().contains("skipped"));
            assert!(app.dialog().is_none());
        }

        #[test]
        fn test_prompt_submit_opens_folder() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = App::new(AppConfig::default(), false, Instant::now());

            app.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('u'),
                KeyModifiers::CONTROL,
            )));
            for c in temp_dir.path().display().to_string().chars() {
                press(&mut app, KeyCode::Char(c));
            }
            press(&mut app, KeyCode::Enter);

            assert_eq!(app.view(), &ViewState::Browsing);
            assert_eq!(app.session().images().len(), 1);
            assert_eq!(app.session().buckets().len(), 2);
        }

        #[test]
        fn test_prompt_cancel_keeps_session() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            app.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('o'),
                KeyModifiers::CONTROL,
            )));
            assert!(matches!(app.view(), ViewState::OpenFolder(_)));

            // Hotkeys are typed into the prompt, not dispatched
            press(&mut app, KeyCode::Char('c'));
            press(&mut app, KeyCode::Esc);

            assert_eq!(app.view(), &ViewState::Browsing);
            assert_eq!(app.session().images().len(), 1);
        }
    }

    mod dispatch_tests {
        use super::*;

        #[test]
        fn test_hotkey_moves_current_image() {
            let temp_dir = folder_with(&["a.jpg", "b.png", "c.txt"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());
            let first = app.session().current_image().unwrap().to_path_buf();

            press(&mut app, KeyCode::Char('c'));

            let moved = temp_dir.path().join("cats").join(first.file_name().unwrap());
            assert!(moved.exists());
            assert!(!first.exists());
            assert_eq!(app.session().images().len(), 1);
            assert_eq!(app.session().cursor(), 0);
            let shown = app.viewer().displayed().unwrap();
            assert_eq!(Some(shown.path.as_path()), app.session().current_image());
            assert!(temp_dir.path().join("c.txt").exists());
        }

        #[test]
        fn test_click_bucket_button() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());
            let layout = ShellLayout::compute(Rect::new(0, 0, 100, 30), 2);
            let dogs = layout.buttons[1];

            click(&mut app, dogs.x + 1, dogs.y + 1);

            assert!(temp_dir.path().join("dogs").join("a.png").exists());
            assert_eq!(app.session().moved_count(1), 1);
            assert_eq!(app.focus(), 1);
        }

        #[test]
        fn test_click_open_folder_button() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());
            let layout = ShellLayout::compute(Rect::new(0, 0, 100, 30), 2);

            click(&mut app, layout.open_button.x + 1, layout.open_button.y + 1);

            assert!(matches!(app.view(), ViewState::OpenFolder(_)));
        }

        #[test]
        fn test_focus_and_enter_activate_buttons() {
            let temp_dir = folder_with(&["a.png", "b.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            press(&mut app, KeyCode::Down);
            assert_eq!(app.focus(), 1);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.session().moved_count(1), 1);

            // Wraps around: Cats, Dogs, Open Folder
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Down);
            assert_eq!(app.focus(), 0);
            press(&mut app, KeyCode::Up);
            assert_eq!(app.focus(), 2);
            press(&mut app, KeyCode::Enter);
            assert!(matches!(app.view(), ViewState::OpenFolder(_)));
        }

        #[test]
        fn test_shared_hotkey_goes_to_first_bucket() {
            let temp_dir = folder_with(
                &["a.png"],
                Some(
                    r#"[{"value":"Cats","path":"./cats","key":"d"},{"value":"Dogs","path":"./dogs","key":"d"}]"#,
                ),
            );
            let mut app = open(temp_dir.path());
            assert_eq!(app.router().conflicts().len(), 1);

            press(&mut app, KeyCode::Char('d'));

            assert!(temp_dir.path().join("cats").join("a.png").exists());
            assert!(!temp_dir.path().join("dogs").exists());
        }

        #[test]
        fn test_unbound_key_does_nothing() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            assert_eq!(press(&mut app, KeyCode::Char('x')), AppControl::Continue);
            // Hotkeys are case-sensitive
            press(&mut app, KeyCode::Char('C'));

            assert_eq!(app.session().images().len(), 1);
            assert_eq!(app.session().total_moved(), 0);
        }

        #[test]
        fn test_caps_lock_shifts_hotkey_case() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());
            let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
            key.state = KeyEventState::CAPS_LOCK;

            app.handle_event(Event::Key(key));

            assert_eq!(app.session().total_moved(), 0);
        }

        #[test]
        fn test_caps_lock_fires_uppercase_hotkey() {
            let temp_dir = folder_with(
                &["a.png"],
                Some(r#"[{"value":"Cats","path":"./cats","key":"C"}]"#),
            );
            let mut app = open(temp_dir.path());
            let mut key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
            key.state = KeyEventState::CAPS_LOCK;

            app.handle_event(Event::Key(key));

            assert_eq!(app.session().total_moved(), 1);
            assert!(temp_dir.path().join("cats").join("a.png").exists());
        }

        #[test]
        fn test_lock_and_modifier_keys_keep_dialog_open() {
            use crossterm::event::ModifierKeyCode;

            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let cats = temp_dir.path().join("cats");
            fs::create_dir(&cats).unwrap();
            fs::write(cats.join("a.png"), b"occupied").unwrap();
            let mut app = open(temp_dir.path());
            press(&mut app, KeyCode::Char('c'));
            assert!(app.dialog().is_some());

            press(&mut app, KeyCode::CapsLock);
            app.handle_event(Event::Key(KeyEvent::new(
                KeyCode::Modifier(ModifierKeyCode::LeftShift),
                KeyModifiers::SHIFT,
            )));

            assert_eq!(app.dialog().unwrap().title, "Move Failed");

            press(&mut app, KeyCode::Enter);
            assert!(app.dialog().is_none());
        }

        #[test]
        fn test_moving_last_image_clears_viewer() {
            let temp_dir = folder_with(&["only.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());
            assert!(app.viewer().displayed().is_some());

            press(&mut app, KeyCode::Char('c'));

            assert!(app.session().images().is_empty());
            assert!(app.viewer().displayed().is_none());
            assert!(app.message().unwrap().contains("0 left"));

            // Further selections are no-ops
            press(&mut app, KeyCode::Char('d'));
            assert_eq!(app.session().total_moved(), 1);
            assert!(!temp_dir.path().join("dogs").exists());
        }

        #[test]
        fn test_collision_shows_dialog_and_keeps_state() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let cats = temp_dir.path().join("cats");
            fs::create_dir(&cats).unwrap();
            fs::write(cats.join("a.png"), b"occupied").unwrap();
            let mut app = open(temp_dir.path());

            press(&mut app, KeyCode::Char('c'));

            assert_eq!(app.dialog().unwrap().title, "Move Failed");
            assert_eq!(app.session().images().len(), 1);
            assert!(temp_dir.path().join("a.png").exists());
            assert_eq!(fs::read(cats.join("a.png")).unwrap(), b"occupied");
        }

        #[test]
        fn test_dialog_blocks_hotkeys_until_dismissed() {
            let temp_dir = folder_with(&["a.png", "b.png"], Some(CATS_AND_DOGS));
            let cats = temp_dir.path().join("cats");
            fs::create_dir(&cats).unwrap();
            let current = app_current_name(&temp_dir);
            fs::write(cats.join(&current), b"occupied").unwrap();
            let mut app = open(temp_dir.path());

            press(&mut app, KeyCode::Char('c'));
            assert!(app.dialog().is_some());

            // First key only dismisses the dialog
            press(&mut app, KeyCode::Char('d'));
            assert!(app.dialog().is_none());
            assert_eq!(app.session().total_moved(), 0);

            press(&mut app, KeyCode::Char('d'));
            assert_eq!(app.session().total_moved(), 1);
        }

        /// File name of the image a freshly opened session shows first
        fn app_current_name(temp_dir: &TempDir) -> std::ffi::OsString {
            let mut session = Session::new();
            session
                .open(temp_dir.path(), DEFAULT_SIDECAR_NAME)
                .unwrap();
            session
                .current_image()
                .and_then(Path::file_name)
                .unwrap()
                .to_os_string()
        }
    }

    mod control_tests {
        use super::*;

        #[test]
        fn test_quit_keys() {
            let temp_dir = folder_with(&[], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            assert_eq!(press(&mut app, KeyCode::Esc), AppControl::Quit);
            assert_eq!(
                app.handle_event(Event::Key(KeyEvent::new(
                    KeyCode::Char('q'),
                    KeyModifiers::CONTROL
                ))),
                AppControl::Quit
            );
        }

        #[test]
        fn test_help_closes_on_any_key() {
            let temp_dir = folder_with(&["a.png"], Some(CATS_AND_DOGS));
            let mut app = open(temp_dir.path());

            press(&mut app, KeyCode::F(1));
            assert_eq!(app.view(), &ViewState::Help);

            press(&mut app, KeyCode::CapsLock);
            assert_eq!(app.view(), &ViewState::Help);

            press(&mut app, KeyCode::Char('c'));
            assert_eq!(app.view(), &ViewState::Browsing);
            assert_eq!(app.session().total_moved(), 0);
        }

        #[test]
        fn test_tick_refreshes_caps_label() {
            let start = Instant::now();
            let mut app = App::new(AppConfig::default(), true, start);
            let mut key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
            key.state = KeyEventState::CAPS_LOCK;

            app.handle_event(Event::Key(key));
            assert_eq!(app.status().caps_lock(), None);

            assert!(app.tick(start + app.config().status_interval));
            assert_eq!(app.status().caps_lock(), Some(true));
        }

        #[test]
        fn test_expand_path() {
            assert_eq!(expand_path("/tmp/x"), PathBuf::from("/tmp/x"));
            if let Some(home) = dirs::home_dir() {
                assert_eq!(expand_path("~"), home);
                assert_eq!(expand_path("~/pics"), home.join("pics"));
            }
        }
    }
}
