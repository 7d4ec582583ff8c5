//! Standard messages shared by every service built on these helpers.

/// Body of the catch-all 404 (plain text, not JSON).
pub const SITE_NOT_FOUND: &str = "Sitio no encontrado...";

/// Used when a failed validation rule carries no message of its own.
pub const VALIDATION_FAILED: &str = "Request validation failed";
