//! Network layer: wire DTOs and REST helpers for the legacy backend.
//!
//! ARCHITECTURE
//! ============
//! `types` mirrors the backend's JSON envelope and row shapes; `api`
//! owns the actual HTTP calls so pages and components never touch
//! `gloo-net` directly.

pub mod api;
pub mod types;
