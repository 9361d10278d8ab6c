//! Text and asset-path helpers for content rendering.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Card descriptions are cut at this many characters.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Truncate a description for card display: the first 100 characters,
/// with an ellipsis marker appended only when something was cut. The
/// cut is on raw character count, not word boundaries.
pub fn truncate_description(description: &str) -> String {
    let mut preview: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if description.chars().count() > DESCRIPTION_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Resolve a backend-relative image path against the static-asset prefix.
pub fn static_asset_url(image_path: &str) -> String {
    format!("/static/{image_path}")
}
