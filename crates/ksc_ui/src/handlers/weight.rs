//! Weight input handlers.

use crate::app::App;

impl App {
    /// Handle a new scale reading from the slider or number input.
    ///
    /// The table is derived from state at view time, so storing the value
    /// is all there is to do.
    pub fn handle_weight_changed(&mut self, grams: u32) {
        self.gross_weight = grams;
    }
}
