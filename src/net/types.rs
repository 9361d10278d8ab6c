//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror the legacy backend's JSON payloads
//! so serde round-trips stay lossless: the content category travels on
//! the wire as `upload_type`, and every JSON endpoint wraps its payload
//! in the `{success, message, content}` envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Content category as stored by the backend.
///
/// Unrecognized wire values deserialize to [`Category::Unknown`] so a
/// new server-side category never breaks rendering; the icon/badge
/// mapping falls back to a generic presentation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Event,
    Photo,
    Location,
    Waterfall,
    Temple,
    Wildlife,
    Industrial,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Category {
    /// The categories a guide can pick in the edit form.
    pub const SELECTABLE: [Category; 7] = [
        Category::Event,
        Category::Photo,
        Category::Location,
        Category::Waterfall,
        Category::Temple,
        Category::Wildlife,
        Category::Industrial,
    ];

    /// Wire value, also used as the edit form's select value.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Event => "event",
            Category::Photo => "photo",
            Category::Location => "location",
            Category::Waterfall => "waterfall",
            Category::Temple => "temple",
            Category::Wildlife => "wildlife",
            Category::Industrial => "industrial",
            Category::Unknown => "unknown",
        }
    }

    /// Badge label shown on content cards.
    pub fn label(self) -> &'static str {
        match self {
            Category::Event => "Event",
            Category::Photo => "Photo",
            Category::Location => "Location",
            Category::Waterfall => "Waterfall",
            Category::Temple => "Temple",
            Category::Wildlife => "Wildlife",
            Category::Industrial => "Industrial",
            Category::Unknown => "Content",
        }
    }

    /// Icon class for the image-less card placeholder.
    pub fn icon_class(self) -> &'static str {
        match self {
            Category::Event => "fa-calendar-alt",
            Category::Photo => "fa-camera",
            Category::Location => "fa-map-marker-alt",
            Category::Waterfall => "fa-water",
            Category::Temple => "fa-gopuram",
            Category::Wildlife => "fa-paw",
            Category::Industrial => "fa-industry",
            Category::Unknown => "fa-image",
        }
    }

    /// Badge color class for content cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            Category::Event => "badge badge--warning",
            Category::Photo => "badge badge--info",
            Category::Location | Category::Wildlife => "badge badge--success",
            Category::Waterfall => "badge badge--primary",
            Category::Temple | Category::Unknown => "badge badge--secondary",
            Category::Industrial => "badge badge--dark",
        }
    }
}

/// A guide-authored content row as returned by the owner endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Server-assigned identifier; immutable once created.
    pub id: i64,
    /// Content category (wire name `upload_type`).
    #[serde(rename = "upload_type", default)]
    pub category: Category,
    /// Display title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Optional human-readable location string.
    #[serde(default)]
    pub location: Option<String>,
    /// Image path relative to the static-asset prefix, if an image was uploaded.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Upload timestamp as serialized by the backend.
    pub upload_date: String,
    /// Owning guide's user id.
    pub guide_id: i64,
}

/// Public viewer projection of a content row: the detail endpoint joins
/// in the owning guide's display name and username.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDetail {
    pub id: i64,
    #[serde(rename = "upload_type", default)]
    pub category: Category,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub upload_date: String,
    pub guide_id: i64,
    /// Owning guide's display name.
    pub guide_name: String,
    /// Owning guide's username, used by the contact action.
    pub guide_username: String,
}

/// The backend's uniform JSON envelope.
///
/// A malformed body or a missing `success` flag deserializes with
/// `success: false`, which callers must treat as an application-level
/// failure (see [`crate::net::api::unwrap_envelope`]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub content: Option<T>,
}
