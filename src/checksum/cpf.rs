use crate::checksum::{all_digits_identical, collect_digits, mod11_check_digit, Validator};

/// CPF (Cadastro de Pessoas Físicas), the 11-digit individual-person scheme.
pub struct CpfChecksum;

const CPF_DIGIT_COUNT: usize = 11;

// Weight for the i-th of the 9 base digits is 11 - (i + 1); extending the
// prefix with the first check digit shifts every weight up by one.
const FIRST_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

// Remainders of 10 collapse to a check digit of 0.
fn reduce(sum: u32) -> u32 {
    let remainder = (sum * 10) % 11;
    if remainder >= 10 {
        0
    } else {
        remainder
    }
}

impl Validator for CpfChecksum {
    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn is_valid(&self, input: &str) -> bool {
        let digits = match collect_digits(input, CPF_DIGIT_COUNT) {
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
