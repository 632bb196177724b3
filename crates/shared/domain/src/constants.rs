//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation Thresholds
// =============================================================================

/// Maximum length of first, second and father names
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum length of the second name
pub const MIN_SECOND_NAME_LENGTH: usize = 2;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length requirement
pub const MAX_PASSWORD_LENGTH: usize = 16;

/// Maximum address length
pub const MAX_ADDRESS_LENGTH: usize = 100;

/// Characters accepted by the special character rule
pub const PASSWORD_SPECIAL_CHARS: &[char] = &['!', '?', '*', '.'];

// =============================================================================
// Message Templates
// =============================================================================

/// Placeholder replaced by the field's display name
pub const PROPERTY_NAME_PLACEHOLDER: &str = "{PropertyName}";

/// Placeholder replaced by the lower length bound
pub const MIN_LENGTH_PLACEHOLDER: &str = "{MinLength}";

/// Placeholder replaced by the upper length bound
pub const MAX_LENGTH_PLACEHOLDER: &str = "{MaxLength}";

pub const MSG_NOT_EMPTY: &str = "{PropertyName} cannot be empty.";
pub const MSG_LETTERS_ONLY: &str = "{PropertyName} must contain only letters.";
pub const MSG_TOO_SHORT: &str = "The length of {PropertyName} must be at least {MinLength} characters.";
pub const MSG_TOO_LONG: &str = "The length of {PropertyName} must be {MaxLength} characters or fewer.";
pub const MSG_NEEDS_UPPERCASE: &str = "{PropertyName} must contain at least one uppercase letter.";
pub const MSG_NEEDS_LOWERCASE: &str = "{PropertyName} must contain at least one lowercase letter.";
pub const MSG_NEEDS_DIGIT: &str = "{PropertyName} must contain at least one number.";
pub const MSG_NEEDS_SPECIAL: &str = "{PropertyName} must contain at least one (!?*.).";
pub const MSG_EMAIL_INCORRECT: &str = "Email is incorrect.";

// =============================================================================
// Business Rule Failures
// =============================================================================

pub const USER_ALREADY_EXISTS: &str = "User with given Email already exists.";
pub const USER_DOES_NOT_EXIST: &str = "User with given Email does not exist.";
pub const OLD_PASSWORD_MISMATCH: &str = "Old password does not match";
pub const WRONG_PASSWORD: &str = "Password does not match for account with given Email.";

// =============================================================================
// Confirmations
// =============================================================================

pub const PASSWORD_CHANGED: &str = "Password changed successfully.";
pub const DETAILS_CHANGED: &str = "User details changed successfully.";

// =============================================================================
// Password Digest Format
// =============================================================================

/// Leading byte identifying the digest layout version
pub const DIGEST_FORMAT_MARKER: u8 = 0x00;

/// Salt length in bytes
pub const DIGEST_SALT_LENGTH: usize = 16;

/// Derived key length in bytes
pub const DIGEST_KEY_LENGTH: usize = 32;

/// Total decoded digest length: marker + salt + key
pub const DIGEST_LENGTH: usize = 1 + DIGEST_SALT_LENGTH + DIGEST_KEY_LENGTH;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 1000;
