//! Settings editor handlers.

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::text_editor::{self, Action, Edit};
use iced::Task;

use crate::app::{App, Message};

impl App {
    /// Apply an editor action and re-validate the buffer as JSON.
    ///
    /// Validation runs on every edit so the invalid indicator tracks the
    /// text live, not just on Save.
    pub fn handle_editor_action(&mut self, action: Action) {
        let is_edit = action.is_edit();
        self.editor.perform(action);
        if is_edit {
            self.editor_invalid = !buffer_is_valid_json(&self.editor.text());
        }
    }

    /// Commit the editor buffer, replacing the stored settings wholesale.
    pub fn handle_save_settings(&mut self) {
        let text = self.editor.text();
        match self.config.commit_json(&text) {
            Ok(()) => {
                self.editor_invalid = false;
                self.status = "Settings saved.".to_string();
            }
            Err(e) => {
                self.editor_invalid = true;
                self.status = format!("Invalid JSON: {}", e);
                tracing::debug!("settings commit rejected: {}", e);
            }
        }
    }

    /// Insert clipboard text into the editor at the cursor.
    pub fn handle_paste(&mut self) {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
            Ok(text) => {
                self.handle_editor_action(Action::Edit(Edit::Paste(Arc::new(text))));
            }
            Err(e) => {
                self.status = format!("Clipboard unavailable: {}", e);
            }
        }
    }

    /// Pick a JSON file and load its text into the editor.
    pub fn import_settings(&self) -> Task<Message> {
        Task::perform(
            async {
                let handle = rfd::AsyncFileDialog::new()
                    .set_title("Import Settings")
                    .add_filter("JSON Files", &["json"])
                    .add_filter("All Files", &["*"])
                    .pick_file()
                    .await?;
                Some(std::fs::read_to_string(handle.path()).map_err(|e| e.to_string()))
            },
            Message::ImportLoaded,
        )
    }

    /// Put imported text into the editor; the user still commits with Save.
    pub fn handle_import_loaded(&mut self, contents: Option<Result<String, String>>) {
        match contents {
            Some(Ok(text)) => {
                self.editor_invalid = !buffer_is_valid_json(&text);
                self.editor = text_editor::Content::with_text(&text);
                self.status = "Imported into editor - press Save to apply.".to_string();
            }
            Some(Err(e)) => {
                self.status = format!("Import failed: {}", e);
            }
            None => {}
        }
    }

    /// Write the stored settings JSON to a picked path.
    pub fn export_settings(&self) -> Task<Message> {
        let json = self.config.raw_json_pretty();
        Task::perform(
            async move {
                let handle = rfd::AsyncFileDialog::new()
                    .set_title("Export Settings")
                    .set_file_name("settings.json")
                    .save_file()
                    .await?;
                let path = handle.path().to_path_buf();
                Some(
                    std::fs::write(&path, json.as_bytes())
                        .map(|_| path)
                        .map_err(|e| e.to_string()),
                )
            },
            Message::ExportFinished,
        )
    }

    pub fn handle_export_finished(&mut self, result: Option<Result<PathBuf, String>>) {
        match result {
            Some(Ok(path)) => {
                self.status = format!("Settings exported to {}", path.display());
            }
            Some(Err(e)) => {
                self.status = format!("Export failed: {}", e);
            }
            None => {}
        }
    }

    /// Re-read settings from the store, picking up another instance's
    /// writes. Last writer wins. The editor buffer is left untouched so an
    /// in-flight edit survives.
    pub fn handle_window_focused(&mut self) {
        self.config.reload();
    }
}

fn buffer_is_valid_json(text: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(text).is_ok()
}
