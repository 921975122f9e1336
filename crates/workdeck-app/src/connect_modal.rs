//! Connect-to-GitHub modal state.
//!
//! Data model for the token form. The rendering widget lives in
//! workdeck-tui's `widgets/connect_modal.rs`.

/// Token form inside the connect modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectModalState {
    token: String,
    error: Option<String>,
}

impl ConnectModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_char(&mut self, c: char) {
        if !c.is_control() {
            self.token.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        self.token.pop();
    }

    /// Validate and take the token, leaving the form empty.
    ///
    /// On empty input the form keeps an error message to display.
    pub fn submit(&mut self) -> Option<String> {
        let token = self.token.trim().to_string();
        if token.is_empty() {
            self.error = Some("Enter a GitHub token".to_string());
            return None;
        }
        self.reset();
        Some(token)
    }

    pub fn reset(&mut self) {
        self.token.clear();
        self.error = None;
    }

    /// Token rendered as bullets
    pub fn masked(&self) -> String {
        "•".repeat(self.token.chars().count())
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
