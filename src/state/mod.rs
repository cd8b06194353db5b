//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `history`, `tools`, `forms`, `ui`)
//! so individual components can depend on small focused models. Everything
//! in here is plain data plus pure transitions; persistence goes through the
//! typed stores, which take a `KeyValueBackend` so the logic is testable
//! without a browser.

pub mod forms;
pub mod history;
pub mod session;
pub mod tools;
pub mod ui;
