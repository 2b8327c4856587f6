//! Application state and message dispatch.

use std::path::PathBuf;

use iced::widget::text_editor;
use iced::{Element, Subscription, Task, Theme};

use ksc_core::settings::{FileStore, SettingsManager, SETTINGS_KEY};
use ksc_core::table::{build_table, SeasoningTable};

/// Default gross weight when none is given on the command line.
pub const DEFAULT_GROSS_WEIGHT_G: u32 = 1250;

/// Upper bound of the weight input widgets.
///
/// Only the widgets clamp; a query-supplied starting value above this is
/// kept until the user first touches the controls.
pub const WEIGHT_MAX_G: u32 = 3000;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// The slider or number input produced a new scale reading.
    WeightChanged(u32),
    /// The settings editor received an action.
    EditorAction(text_editor::Action),
    /// Commit the editor buffer as the new settings.
    SaveSettings,
    /// Insert clipboard text into the editor.
    PasteIntoEditor,
    /// Pick a JSON file to load into the editor.
    ImportSettings,
    /// Import dialog finished (None = cancelled).
    ImportLoaded(Option<Result<String, String>>),
    /// Write the stored settings to a picked path.
    ExportSettings,
    /// Export dialog finished (None = cancelled).
    ExportFinished(Option<Result<PathBuf, String>>),
    /// The window regained focus; re-read settings from the store.
    WindowFocused,
}

/// Top-level application state.
pub struct App {
    /// Settings persistence and current values.
    pub config: SettingsManager,
    /// Current gross weight (scale reading with container) in grams.
    pub gross_weight: u32,
    /// Settings editor buffer.
    pub editor: text_editor::Content,
    /// Whether the editor buffer currently fails to parse as JSON.
    pub editor_invalid: bool,
    /// One-line status shown at the bottom of the window.
    pub status: String,
}

impl App {
    /// Build the initial state: load settings and seed the editor.
    pub fn new(store_dir: PathBuf, initial_weight: u32) -> (Self, Task<Message>) {
        let mut config = SettingsManager::new(Box::new(FileStore::new(store_dir)), SETTINGS_KEY);
        config.load();

        let editor = text_editor::Content::with_text(&config.raw_json_pretty());

        (
            Self {
                config,
                gross_weight: initial_weight,
                editor,
                editor_invalid: false,
                status: String::new(),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "Kitchen Salt Calc".to_string()
    }

    /// Derive the table for the current weight and settings.
    pub fn table(&self) -> SeasoningTable {
        build_table(f64::from(self.gross_weight), self.config.settings())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WeightChanged(grams) => {
                self.handle_weight_changed(grams);
                Task::none()
            }
            Message::EditorAction(action) => {
                self.handle_editor_action(action);
                Task::none()
            }
            Message::SaveSettings => {
                self.handle_save_settings();
                Task::none()
            }
            Message::PasteIntoEditor => {
                self.handle_paste();
                Task::none()
            }
            Message::ImportSettings => self.import_settings(),
            Message::ImportLoaded(contents) => {
                self.handle_import_loaded(contents);
                Task::none()
            }
            Message::ExportSettings => self.export_settings(),
            Message::ExportFinished(result) => {
                self.handle_export_finished(result);
                Task::none()
            }
            Message::WindowFocused => {
                self.handle_window_focused();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        crate::pages::main_window::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Window(iced::window::Event::Focused) => Some(Message::WindowFocused),
            _ => None,
        })
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
