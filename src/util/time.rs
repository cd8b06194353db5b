//! Clock helpers: greeting text, ISO timestamps, and display formatting.
//!
//! Browser builds read the real clock through `js_sys::Date`; native builds
//! (tests, SSR) get fixed fallbacks so nothing here needs a runtime.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Greeting for the hero section based on the local hour (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Local hour of day, 0-23. Returns 12 (midday) outside the browser.
pub fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

/// Current instant as an ISO 8601 string, e.g. `2025-06-01T12:34:56.789Z`.
/// Empty outside the browser.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Render a stored ISO timestamp in the visitor's locale for display.
/// Falls back to the raw string when there is no browser clock.
pub fn format_timestamp(iso: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        iso.to_owned()
    }
}
