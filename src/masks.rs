use crate::document::{CNPJ_LENGTH, CPF_LENGTH};
use crate::normalization::normalize;

const PHONE_MAX_LENGTH: usize = 11;

// Separator goes in front of the digit at the given index, so it only
// appears once the user has typed past it.
const CPF_SEPARATORS: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
const CNPJ_SEPARATORS: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

fn apply_mask(digits: &str, max_len: usize, separators: &[(usize, char)]) -> String {
    let mut masked = String::new();
    for (idx, digit) in digits.chars().take(max_len).enumerate() {
        if let Some((_, separator)) = separators.iter().find(|(at, _)| *at == idx) {
            masked.push(*separator);
        }
        masked.push(digit);
    }
    masked
}

/// Progressively mask a document identifier as it is typed: the CPF mask
/// (`123.456.789-09`) up to 11 digits, the CNPJ mask (`11.222.333/0001-81`)
/// beyond, truncating at 14 digits.
pub fn apply_document_mask(raw: &str) -> String {
    let digits = normalize(raw);
    if digits.len() <= CPF_LENGTH {
        apply_mask(&digits, CPF_LENGTH, CPF_SEPARATORS)
    } else {
        apply_mask(&digits, CNPJ_LENGTH, CNPJ_SEPARATORS)
    }
}

/// Progressively mask a Brazilian phone number: `(11) 2345-6789` for up to
/// 10 digits, `(11) 98765-4321` for 11, truncating at 11 digits.
pub fn apply_phone_mask(raw: &str) -> String {
    let digits = normalize(raw);
    let digits = &digits[..digits.len().min(PHONE_MAX_LENGTH)];
    if digits.len() <= 2 {
        return digits.to_string();
    }
    let (area, rest) = digits.split_at(2);
    // Mobile numbers carry a ninth digit in front of the subscriber prefix
    let prefix_len = if digits.len() <= 10 { 4 } else { 5 };
    if rest.len() <= prefix_len {
        format!("({area}) {rest}")
    } else {
        let (prefix, line) = rest.split_at(prefix_len);
        format!("({area}) {prefix}-{line}")
    }
}
