//! Date helpers for display formatting and arrival-date validation.
//!
//! TRADE-OFFS
//! ==========
//! Display formatting defers to the browser's locale via `js-sys`; SSR
//! and invalid inputs fall back to the raw date part so rendering stays
//! deterministic. Comparisons work on zero-padded ISO `YYYY-MM-DD`
//! strings, which order lexicographically.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Date part of a backend timestamp (`2025-06-14T09:30:00` → `2025-06-14`).
pub fn date_part(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .split_once(['T', ' '])
        .map_or(trimmed, |(date, _)| date)
}

/// Format an upload timestamp for display using the browser locale,
/// date component only. Falls back to the ISO date part when the value
/// does not parse or no browser is available.
pub fn display_date(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if parsed.get_time().is_nan() {
            return date_part(raw).to_owned();
        }
        String::from(parsed.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        date_part(raw).to_owned()
    }
}

/// Zero-padded ISO date from components.
pub fn format_ymd(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Today's local calendar date as ISO `YYYY-MM-DD`, when a browser
/// clock is available.
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(format_ymd(
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date(),
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether `date` falls strictly before `today`, both ISO `YYYY-MM-DD`.
/// Time-of-day never enters the comparison.
pub fn is_strictly_before(date: &str, today: &str) -> bool {
    date.trim() < today.trim()
}
