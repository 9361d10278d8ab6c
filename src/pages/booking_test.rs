use super::*;
use crate::state::booking::validate;

const TODAY: &str = "2025-06-14";

fn filled_form() -> BookingForm {
    BookingForm {
        tourist_name: "Ravi Sharma".to_owned(),
        phone: "9876543210".to_owned(),
        native_place: "Kolkata".to_owned(),
        arrival_date: "2025-06-20".to_owned(),
        days_to_stay: "3".to_owned(),
        ..BookingForm::default()
    }
}

#[test]
fn missing_required_fields_get_the_generic_message() {
    let mut form = filled_form();
    form.native_place = String::new();
    let outcome = validate(&form, TODAY);
    assert_eq!(
        validation_toast_message(&form, outcome),
        "Please fill in all required fields"
    );
}

#[test]
fn a_present_but_bad_phone_gets_the_phone_message() {
    let mut form = filled_form();
    form.phone = "12345".to_owned();
    let outcome = validate(&form, TODAY);
    assert_eq!(
        validation_toast_message(&form, outcome),
        "Please enter a valid 10-digit phone number"
    );
}

#[test]
fn a_past_arrival_date_gets_the_date_message() {
    let mut form = filled_form();
    form.arrival_date = "2025-06-01".to_owned();
    let outcome = validate(&form, TODAY);
    assert_eq!(
        validation_toast_message(&form, outcome),
        "Arrival date cannot be in the past"
    );
}
