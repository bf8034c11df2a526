use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::persist::open_store;
use crate::io::state::{UiState, read_ui_state, write_ui_state};
use crate::io::storage::FileStorage;
use crate::model::{Config, Filter, Location, Todo};
use crate::ops::route::Router;
use crate::ops::store::{StoreError, TodoStore};

use super::input;
use super::render;
use super::text_input::TextInput;
use super::theme::Theme;

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "What needs to be done?" field
    NewTodo,
    /// The todo list (cursor row)
    List,
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub location: Location,
    pub router: Router,
    pub focus: Focus,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    pub new_todo: TextInput,
    /// Field shown in place of the title of the item being edited
    pub edit_input: TextInput,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Last error, shown in the status row until the next key
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Build the app and resolve the initial route, like a mount hook
    pub fn new(store: TodoStore, location: Location, config: &Config) -> Self {
        let mut app = App {
            store,
            location,
            router: Router::default(),
            focus: Focus::NewTodo,
            cursor: 0,
            new_todo: TextInput::default(),
            edit_input: TextInput::default(),
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            status: None,
            should_quit: false,
        };
        app.router.on_hash_change(&mut app.location);
        app.sync_route();
        app
    }

    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    pub fn filter(&self) -> Filter {
        self.router.filter()
    }

    /// Items shown under the current filter
    pub fn visible(&self) -> Vec<Todo> {
        crate::ops::todo_ops::visible(self.store.todos(), self.filter())
    }

    pub fn selected(&self) -> Option<Todo> {
        if self.focus != Focus::List {
            return None;
        }
        self.visible().into_iter().nth(self.cursor)
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.store.editing_id()
    }

    /// Keep the cursor on a visible row; drop list focus if nothing is visible
    pub fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            if self.focus == Focus::List && self.editing_id().is_none() {
                self.focus = Focus::NewTodo;
            }
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Resolve queued hash changes and keep the cursor valid
    pub fn sync_route(&mut self) {
        if self.router.sync(&mut self.location) {
            tracing::debug!(filter = self.filter().name(), "route changed");
        }
        self.clamp_cursor();
    }

    /// Select a filter by changing the location hash
    pub fn set_route(&mut self, filter: Filter) {
        self.location.set_hash(filter.hash());
    }

    /// Record a failed store sync. The in-memory change stands.
    pub fn report(&mut self, result: Result<(), StoreError>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "store update failed");
            self.status = Some(e.to_string());
        }
    }

    // -----------------------------------------------------------------------
    // Edit session
    // -----------------------------------------------------------------------

    /// Open the selected item in the inline editor
    pub fn start_edit(&mut self) {
        let Some(todo) = self.selected() else {
            return;
        };
        self.store.edit_todo(todo.id);
        self.edit_input = TextInput::with_text(&todo.title);
    }

    /// Push the edit field's text into the store (live title update)
    pub fn update_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            let result = self.store.set_title(id, self.edit_input.text());
            self.report(result);
        }
    }

    /// Commit the open edit. Safe to call when nothing is being edited.
    pub fn commit_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            let result = self.store.commit_edit(id);
            self.report(result);
            self.edit_input.clear();
            self.clamp_cursor();
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            let result = self.store.cancel_edit(id);
            self.report(result);
            self.edit_input.clear();
        }
    }
}

/// Restore the location hash saved by the previous session
pub fn restore_location(data_dir: &Path) -> Location {
    let hash = read_ui_state(data_dir).map(|s| s.hash).unwrap_or_default();
    Location::new(hash)
}

/// Save the location hash for the next session
pub fn save_ui_state(app: &App, data_dir: &Path) {
    let ui_state = UiState {
        hash: app.location.hash().to_string(),
    };
    if let Err(e) = write_ui_state(data_dir, &ui_state) {
        tracing::warn!(error = %e, "could not save ui state");
    }
}

/// Run the TUI application
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(data_dir)?;
    let store = open_store(FileStorage::open(data_dir));
    let location = restore_location(data_dir);

    let mut app = App::new(store, location, &config);
    tracing::info!(data_dir = %data_dir.display(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // An edit still open at exit is committed, as if the field lost focus
    app.commit_edit();
    save_ui_state(&app, data_dir);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            app.sync_route();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
