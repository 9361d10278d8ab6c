use super::*;

#[test]
fn login_urls_map_roles_to_legacy_routes() {
    assert_eq!(login_url(UserType::Tourist), "/login/tourist");
    assert_eq!(login_url(UserType::Guide), "/login/guide");
    assert_eq!(login_url(UserType::Admin), "/login/tourist");
}

#[test]
fn status_update_url_embeds_id_and_status() {
    assert_eq!(
        update_booking_status_url(17, BookingStatus::Confirmed),
        "/update_booking_status/17/confirmed"
    );
    assert_eq!(
        update_booking_status_url(4, BookingStatus::Cancelled),
        "/update_booking_status/4/cancelled"
    );
}

#[test]
fn status_confirm_messages_are_status_specific() {
    assert_eq!(
        status_confirm_message(BookingStatus::Confirmed),
        "Are you sure you want to confirm this tour booking?"
    );
    assert_eq!(
        status_confirm_message(BookingStatus::Completed),
        "Mark this tour as completed?"
    );
    assert_eq!(
        status_confirm_message(BookingStatus::Pending),
        "Are you sure you want to mark this booking pending?"
    );
}
