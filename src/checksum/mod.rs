mod cnpj;
mod cpf;

pub use crate::checksum::cnpj::CnpjChecksum;
pub use crate::checksum::cpf::CpfChecksum;

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Collect exactly `expected_len` decimal digits from `input`. Returns `None`
/// if the length differs or a non-digit character sits in a digit position.
pub(crate) fn collect_digits(input: &str, expected_len: usize) -> Option<Vec<u32>> {
    if input.chars().count() != expected_len {
        return None;
    }
    input.chars().map(|c| c.to_digit(10)).collect()
}

/// Sequences like "000.000.000-00" satisfy the mod-11 arithmetic but are
/// never issued by the registry.
pub(crate) fn all_digits_identical(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// Weighted mod-11 check digit shared by both registry schemes: multiply the
/// leading `weights.len()` digits by `weights`, map the sum through `reduce`,
/// and compare against the digit just past the weighted prefix.
///
/// `digits` must hold at least `weights.len() + 1` entries.
pub(crate) fn mod11_check_digit(digits: &[u32], weights: &[u32], reduce: fn(u32) -> u32) -> bool {
    let sum: u32 = digits.iter().zip(weights).map(|(digit, weight)| digit * weight).sum();
    reduce(sum) == digits[weights.len()]
}
