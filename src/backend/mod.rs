//! # Backend
//!
//! The question-answering service is an external collaborator reached over
//! HTTP. Everything the rest of the app knows about it goes through the
//! [`AskBackend`] trait, so the event loop and the tests never see `reqwest`.

pub mod http;
pub mod provider;

pub use http::{ASK_PATH, HttpBackend};
pub use provider::{AskBackend, AskError, settle};
