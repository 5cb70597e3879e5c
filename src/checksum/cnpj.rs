use crate::checksum::{all_digits_identical, collect_digits, mod11_check_digit, Validator};

/// CNPJ (Cadastro Nacional da Pessoa Jurídica), the 14-digit organization
/// scheme.
pub struct CnpjChecksum;

const CNPJ_DIGIT_COUNT: usize = 14;

// Cyclic weights: start at 5 (6 for the extended prefix), decrement each
// step, and reset to 9 instead of dropping below 2.
const FIRST_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn reduce(sum: u32) -> u32 {
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

impl Validator for CnpjChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn is_valid(&self, input: &str) -> bool {
        let digits = match collect_digits(input, CNPJ_DIGIT_COUNT) {
            Some(digits) => digits,
            None => return false,
        };
        if all_digits_identical(&digits) {
            return false;
        }
        mod11_check_digit(&digits, FIRST_WEIGHTS, reduce)
            && mod11_check_digit(&digits, SECOND_WEIGHTS, reduce)
    }
}
