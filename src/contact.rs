use lazy_static::lazy_static;
use regex::Regex;

use crate::normalization::normalize;

lazy_static! {
    // Deliberately loose: one "@", at least one "." in the host part, no
    // whitespace. Deliverability is the mail server's problem.
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Brazilian phone numbers have 10 digits (landline) or 11 (mobile, with
/// the ninth digit), counting the two-digit area code.
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(normalize(phone).len(), 10 | 11)
}
