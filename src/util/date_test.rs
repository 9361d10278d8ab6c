use super::*;

#[test]
fn date_part_strips_time_components() {
    assert_eq!(date_part("2025-06-14T09:30:00"), "2025-06-14");
    assert_eq!(date_part("2025-06-14 09:30:00"), "2025-06-14");
    assert_eq!(date_part("  2025-06-14  "), "2025-06-14");
    assert_eq!(date_part("2025-06-14"), "2025-06-14");
}

#[test]
fn format_ymd_zero_pads() {
    assert_eq!(format_ymd(2025, 6, 4), "2025-06-04");
    assert_eq!(format_ymd(2025, 12, 31), "2025-12-31");
}

#[test]
fn is_strictly_before_orders_iso_dates() {
    assert!(is_strictly_before("2025-06-13", "2025-06-14"));
    assert!(is_strictly_before("2024-12-31", "2025-01-01"));
    // Equal dates are not in the past.
    assert!(!is_strictly_before("2025-06-14", "2025-06-14"));
    assert!(!is_strictly_before("2025-06-15", "2025-06-14"));
}
