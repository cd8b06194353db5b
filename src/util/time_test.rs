use super::*;

// =============================================================
// greeting_for_hour
// =============================================================

#[test]
fn morning_before_noon() {
    assert_eq!(greeting_for_hour(0), "Good morning");
    assert_eq!(greeting_for_hour(11), "Good morning");
}

#[test]
fn afternoon_from_noon_to_six() {
    assert_eq!(greeting_for_hour(12), "Good afternoon");
    assert_eq!(greeting_for_hour(17), "Good afternoon");
}

#[test]
fn evening_from_six() {
    assert_eq!(greeting_for_hour(18), "Good evening");
    assert_eq!(greeting_for_hour(23), "Good evening");
}

// =============================================================
// native fallbacks
// =============================================================

#[test]
fn format_timestamp_passes_through_without_a_browser() {
    assert_eq!(format_timestamp("2025-06-01T00:00:00Z"), "2025-06-01T00:00:00Z");
}

#[test]
fn current_hour_fallback_is_midday() {
    assert_eq!(current_hour(), 12);
}
