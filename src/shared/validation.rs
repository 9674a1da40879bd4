use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

use crate::core::error::{AppError, Result};

lazy_static! {
    /// Regex for the canonical textual form of an identifier
    /// Five hyphen-separated groups of 8-4-4-4-12 hexadecimal digits
    /// - Valid: "67e55044-10b1-426f-9247-bb680e5fe0c8", "67E55044-10B1-426F-9247-BB680E5FE0C8"
    /// - Invalid: "67e5504410b1426f9247bb680e5fe0c8", "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
    ///   "urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8"
    pub static ref UID_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

/// Decode an externally supplied identifier.
///
/// `field` names the request field and only appears in the error message.
pub fn decode_uid(field: &str, text: &str) -> Result<Uuid> {
    if !UID_REGEX.is_match(text) {
        return Err(invalid_uid(field));
    }

    Uuid::parse_str(text).map_err(|_| invalid_uid(field))
}

fn invalid_uid(field: &str) -> AppError {
    AppError::InvalidIdentifier(format!("invalid UUID: {}", field))
}
