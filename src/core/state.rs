//! # Application State
//!
//! Everything the form owns. Transient, in-memory, never persisted.
//!
//! ```text
//! App
//! ├── question: String   // mirrors the input field
//! ├── response: String   // answer text or the apology
//! └── phase: Phase       // Idle | Submitting
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// A request is outstanding. Input and submit are disabled.
    Submitting,
}

#[derive(Debug, Default)]
pub struct App {
    pub question: String,
    pub response: String,
    pub phase: Phase,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }
}
