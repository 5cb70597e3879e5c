/// Strip everything but ASCII decimal digits from raw form input.
///
/// Total over all strings: mask characters, whitespace and any other unicode
/// are dropped, digit order is preserved, and an empty result is allowed.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strips_document_masks() {
        assert_eq!(normalize("123.456.789-09"), "12345678909");
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
        assert_eq!(normalize("(11) 98765-4321"), "11987654321");
    }

    #[test]
    fn drops_all_non_digit_content() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("abc ñô --"), "");
        assert_eq!(normalize("a1b2c3"), "123");
        // Only ASCII digits count; other unicode digits are dropped
        assert_eq!(normalize("١٢٣456"), "456");
    }

    #[test]
    fn is_idempotent() {
        let inputs = vec!["123.456.789-09", "", "no digits", "00000000000"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }
}
