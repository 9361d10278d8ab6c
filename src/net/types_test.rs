use super::*;

#[test]
fn category_deserializes_known_wire_values() {
    let cat: Category = serde_json::from_str("\"waterfall\"").unwrap();
    assert_eq!(cat, Category::Waterfall);
    let cat: Category = serde_json::from_str("\"temple\"").unwrap();
    assert_eq!(cat, Category::Temple);
}

#[test]
fn category_falls_back_to_unknown_for_unrecognized_values() {
    let cat: Category = serde_json::from_str("\"hot_spring\"").unwrap();
    assert_eq!(cat, Category::Unknown);
}

#[test]
fn category_mapping_covers_all_known_categories() {
    let expected = [
        (Category::Event, "fa-calendar-alt", "badge badge--warning", "Event"),
        (Category::Photo, "fa-camera", "badge badge--info", "Photo"),
        (Category::Location, "fa-map-marker-alt", "badge badge--success", "Location"),
        (Category::Waterfall, "fa-water", "badge badge--primary", "Waterfall"),
        (Category::Temple, "fa-gopuram", "badge badge--secondary", "Temple"),
        (Category::Wildlife, "fa-paw", "badge badge--success", "Wildlife"),
        (Category::Industrial, "fa-industry", "badge badge--dark", "Industrial"),
    ];
    for (cat, icon, badge, label) in expected {
        assert_eq!(cat.icon_class(), icon);
        assert_eq!(cat.badge_class(), badge);
        assert_eq!(cat.label(), label);
    }
}

#[test]
fn unknown_category_uses_default_mapping() {
    assert_eq!(Category::Unknown.icon_class(), "fa-image");
    assert_eq!(Category::Unknown.badge_class(), "badge badge--secondary");
    assert_eq!(Category::Unknown.label(), "Content");
}

#[test]
fn content_record_deserializes_from_backend_row() {
    let record: ContentRecord = serde_json::from_str(
        r#"{
            "id": 5,
            "upload_type": "waterfall",
            "title": "Hundru Falls",
            "description": "A 98m drop on the Subarnarekha river.",
            "location": "Ranchi",
            "image_path": "uploads/hundru.jpg",
            "upload_date": "2025-06-14T09:30:00",
            "guide_id": 12
        }"#,
    )
    .unwrap();
    assert_eq!(record.id, 5);
    assert_eq!(record.category, Category::Waterfall);
    assert_eq!(record.location.as_deref(), Some("Ranchi"));
}

#[test]
fn content_record_tolerates_null_optionals_and_missing_type() {
    let record: ContentRecord = serde_json::from_str(
        r#"{
            "id": 7,
            "title": "Village fair",
            "description": "Annual fair.",
            "location": null,
            "image_path": null,
            "upload_date": "2025-01-02T00:00:00",
            "guide_id": 3
        }"#,
    )
    .unwrap();
    assert_eq!(record.category, Category::Unknown);
    assert!(record.location.is_none());
    assert!(record.image_path.is_none());
}

#[test]
fn api_response_missing_success_flag_defaults_to_false() {
    let resp: ApiResponse<Vec<ContentRecord>> = serde_json::from_str("{}").unwrap();
    assert!(!resp.success);
    assert!(resp.message.is_none());
    assert!(resp.content.is_none());
}

#[test]
fn content_detail_carries_guide_identity() {
    let detail: ContentDetail = serde_json::from_str(
        r#"{
            "id": 9,
            "upload_type": "temple",
            "title": "Sun Temple",
            "description": "Chariot-shaped temple complex.",
            "upload_date": "2025-03-21T11:00:00",
            "guide_id": 4,
            "guide_name": "Asha Kumari",
            "guide_username": "asha_k"
        }"#,
    )
    .unwrap();
    assert_eq!(detail.guide_name, "Asha Kumari");
    assert_eq!(detail.guide_username, "asha_k");
}
