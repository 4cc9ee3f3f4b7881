//! Asker library exports for testing

pub mod backend;
pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;
