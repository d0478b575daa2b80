/// Number of random bytes in a verification token (hex-encoded to 64 chars).
/// 32 bytes = 256 bits of entropy, comfortably above the 128-bit floor.
pub const TOKEN_BYTES: usize = 32;

/// How long a verification link is advertised as valid in the email template.
pub const VERIFICATION_LINK_EXPIRY_HOURS: u32 = 24;

/// Local-storage key holding the analytics consent choice.
pub const CONSENT_STORAGE_KEY: &str = "deskpilot_analytics_consent";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a syntactically invalid email address
pub const ERR_INVALID_EMAIL: &str = "Valid email is required";

/// Error message for a missing email field
pub const ERR_MISSING_EMAIL: &str = "Email is required";

/// Error message for a missing download filename
pub const ERR_MISSING_FILENAME: &str = "Filename is required";

/// Error message for an unknown or already-redeemed verification token
pub const ERR_TOKEN_NOT_FOUND: &str = "Invalid or expired token";
