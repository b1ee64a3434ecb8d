/// User-visible notice shown in the status line.
///
/// Informational messages are cleared on the next edit-mode keystroke;
/// errors stick around until the next command attempt or an explicit clear,
/// so the user actually sees the failure.
#[derive(Clone, Debug, Default)]
pub struct StatusLine {
    message: String,
    is_error: bool,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.is_error = true;
    }

    pub fn clear(&mut self) {
        self.message.clear();
        self.is_error = false;
    }

    /// Drops the message only if it is not an error.
    pub fn clear_transient(&mut self) {
        if !self.is_error {
            self.message.clear();
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}
