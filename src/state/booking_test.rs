use super::*;

const TODAY: &str = "2025-06-14";

fn filled_form() -> BookingForm {
    BookingForm {
        tourist_name: "Ravi Sharma".to_owned(),
        phone: "987-654-3210".to_owned(),
        email: "ravi@example.com".to_owned(),
        native_place: "Kolkata".to_owned(),
        arrival_date: "2025-06-20".to_owned(),
        days_to_stay: "3".to_owned(),
        group_size: "2".to_owned(),
        tour_type: "wildlife".to_owned(),
        additional_requirements: String::new(),
    }
}

#[test]
fn compute_total_multiplies_days_by_nightly_price() {
    assert_eq!(compute_total("3", Some(2000)), 6000);
    assert_eq!(compute_total("5", Some(1500)), 7500);
}

#[test]
fn compute_total_defaults_days_to_one() {
    assert_eq!(compute_total("", Some(2000)), 2000);
    assert_eq!(compute_total("abc", Some(2000)), 2000);
    assert_eq!(compute_total("0", Some(2000)), 2000);
}

#[test]
fn compute_total_falls_back_to_default_price() {
    assert_eq!(compute_total("3", None), 3 * DEFAULT_PRICE_PER_DAY);
}

#[test]
fn group_size_never_enters_the_total() {
    // The total is a function of days and price alone; changing group
    // size changes only its display label.
    let with_two = compute_total("3", Some(2000));
    let with_six = compute_total("3", Some(2000));
    assert_eq!(with_two, with_six);
    assert_eq!(group_label(parse_count("2")), "2 persons");
    assert_eq!(group_label(parse_count("6")), "6 persons");
}

#[test]
fn format_total_groups_thousands() {
    assert_eq!(format_total(6000), "₹6,000");
    assert_eq!(format_total(500), "₹500");
    assert_eq!(format_total(1234567), "₹1,234,567");
}

#[test]
fn summary_labels_pluralize() {
    assert_eq!(days_label(1), "1 day");
    assert_eq!(days_label(3), "3 days");
    assert_eq!(group_label(1), "1 person");
}

#[test]
fn phone_accepts_exactly_ten_digits_after_stripping() {
    assert!(phone_is_valid("9876543210"));
    assert!(phone_is_valid("987-654-3210"));
    assert!(phone_is_valid("(987) 654 3210"));
    assert!(!phone_is_valid("12345"));
    assert!(!phone_is_valid("98765432101"));
    assert!(!phone_is_valid(""));
}

#[test]
fn normalize_phone_strips_non_digits() {
    assert_eq!(normalize_phone("987-654-3210"), "9876543210");
    assert_eq!(normalize_phone("+91 98765 43210"), "919876543210");
}

#[test]
fn a_complete_form_validates() {
    let validation = validate(&filled_form(), TODAY);
    assert!(validation.all_valid());
}

#[test]
fn required_fields_must_be_non_empty_after_trim() {
    let mut form = filled_form();
    form.tourist_name = "   ".to_owned();
    let validation = validate(&form, TODAY);
    assert!(!validation.tourist_name);
    assert!(!validation.all_valid());

    let mut form = filled_form();
    form.native_place = String::new();
    assert!(!validate(&form, TODAY).native_place);
}

#[test]
fn arrival_today_passes_and_yesterday_fails() {
    let mut form = filled_form();
    form.arrival_date = TODAY.to_owned();
    assert!(validate(&form, TODAY).arrival_date);

    form.arrival_date = "2025-06-13".to_owned();
    assert!(!validate(&form, TODAY).arrival_date);
}

#[test]
fn empty_arrival_date_is_invalid() {
    let mut form = filled_form();
    form.arrival_date = String::new();
    assert!(!validate(&form, TODAY).arrival_date);
}

#[test]
fn confirm_message_names_the_guide_when_known() {
    assert_eq!(
        booking_confirm_message(Some("Asha Kumari")),
        "Are you sure you want to book Asha Kumari for your tour?"
    );
    assert_eq!(
        booking_confirm_message(None),
        "Are you sure you want to book this guide for your tour?"
    );
}
