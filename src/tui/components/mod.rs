//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: heading, endpoint and loading spinner
//! - `SubmitButton`: `Submit` / `Submitting...`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `QuestionInput`: single-line text field
//! - `ResponsePanel`: wrapped, scrollable answer text
//!
//! Each component file holds its state, events, rendering, event handling
//! and tests. Data from the core comes in as props (struct fields synced by
//! the event loop), never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs
//! ├── submit_button.rs
//! ├── response_panel.rs
//! └── question_input/   (text field + cursor)
//! ```

pub mod question_input;
pub mod response_panel;
pub mod submit_button;
mod title_bar;

pub use question_input::{InputEvent, QuestionInput};
pub use response_panel::ResponsePanel;
pub use submit_button::SubmitButton;
pub use title_bar::TitleBar;
