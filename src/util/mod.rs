//! Shared utilities: storage backends, dark mode, and clock helpers.

pub mod browser;
pub mod dark_mode;
pub mod storage;
pub mod time;
