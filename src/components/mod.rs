//! Presentational components shared across pages.

pub mod coming_soon_modal;
pub mod footer;
pub mod header;
pub mod hero;
pub mod page_wrapper;
pub mod tool_card;
pub mod tools_section;
