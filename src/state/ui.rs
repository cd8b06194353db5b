//! Chrome state for the header, menus, and shared modal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset (px) past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Delay before the ALL TOOLS dropdown closes after mouse-leave.
pub const DROPDOWN_CLOSE_DELAY_MS: u32 = 300;

/// Delay between navigating home and scrolling to a category anchor.
pub const SCROLL_AFTER_NAV_DELAY_MS: u32 = 100;

/// UI state for the header chrome and the shared coming-soon modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub dropdown_open: bool,
    pub mobile_menu_open: bool,
    pub coming_soon_open: bool,
    pub back_to_top_visible: bool,
}

impl UiState {
    /// Collapse all transient chrome (menus), e.g. after a navigation.
    pub fn close_menus(&mut self) {
        self.dropdown_open = false;
        self.mobile_menu_open = false;
    }
}
