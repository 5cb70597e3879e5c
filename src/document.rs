use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checksum::{CnpjChecksum, CpfChecksum, Validator};
use crate::masks::apply_document_mask;
use crate::normalization::normalize;

pub(crate) const CPF_LENGTH: usize = 11;
pub(crate) const CNPJ_LENGTH: usize = 14;

/// The registry scheme a digit string belongs to.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    /// Classify a digit string by length. Any other length has no scheme,
    /// including the empty string.
    pub fn classify(digits: &str) -> Option<DocumentKind> {
        match digits.chars().count() {
            CPF_LENGTH => Some(DocumentKind::Cpf),
            CNPJ_LENGTH => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    fn checksum(&self) -> &'static dyn Validator {
        match self {
            DocumentKind::Cpf => &CpfChecksum,
            DocumentKind::Cnpj => &CnpjChecksum,
        }
    }
}

/// Checksum-validate an already-normalized digit string.
///
/// Callers are expected to run [`normalize`] first; input that still carries
/// mask characters is rejected rather than cleaned up here. Every malformed
/// input resolves to `false`, never a panic.
pub fn validate(digits: &str) -> bool {
    match DocumentKind::classify(digits) {
        Some(kind) => kind.checksum().is_valid(digits),
        None => false,
    }
}

/// A checksum-verified registry identifier in canonical digit form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("not a valid CPF or CNPJ")]
pub struct InvalidDocument;

impl Document {
    /// Parse raw form input: strip the mask, classify by digit count, and
    /// run the scheme checksum.
    pub fn parse(raw: &str) -> Result<Document, InvalidDocument> {
        let digits = normalize(raw);
        let kind = DocumentKind::classify(&digits).ok_or(InvalidDocument)?;
        if !kind.checksum().is_valid(&digits) {
            return Err(InvalidDocument);
        }
        Ok(Document { kind, digits })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Canonical digit string, without mask characters.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl FromStr for Document {
    type Err = InvalidDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Document::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&apply_document_mask(&self.digits))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_test::{assert_tokens, Token};

    #[test]
    fn classify_dispatches_on_length() {
        assert_eq!(DocumentKind::classify("11144477735"), Some(DocumentKind::Cpf));
        assert_eq!(DocumentKind::classify("11222333000181"), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::classify(""), None);
        assert_eq!(DocumentKind::classify("123"), None);
        assert_eq!(DocumentKind::classify("1112223334445"), None);
    }

    #[test]
    fn validate_accepts_known_identifiers() {
        assert!(validate("11144477735"));
        assert!(validate("11222333000181"));
    }

    #[test]
    fn validate_rejects_everything_else() {
        let rejected = vec![
            "",
            "1",
            "111444777",
            "111444777350",
            // repeated digits of both scheme lengths
            "11111111111",
            "00000000000000",
            // masked input is the caller's job to normalize
            "111.444.777-35",
            "11.222.333/0001-81",
            // wrong checksum
            "11144477734",
            "11222333000180",
        ];
        for input in rejected {
            assert!(!validate(input), "accepted {input:?}");
        }
    }

    #[test]
    fn parse_normalizes_then_validates() {
        let cpf = Document::parse("111.444.777-35").unwrap();
        assert_eq!(cpf.kind(), DocumentKind::Cpf);
        assert_eq!(cpf.digits(), "11144477735");
        assert_eq!(cpf.to_string(), "111.444.777-35");

        let cnpj = Document::parse("11.222.333/0001-81").unwrap();
        assert_eq!(cnpj.kind(), DocumentKind::Cnpj);
        assert_eq!(cnpj.digits(), "11222333000181");
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");

        assert_eq!(Document::parse("not a document"), Err(InvalidDocument));
        assert_eq!("111.444.777-34".parse::<Document>(), Err(InvalidDocument));
    }

    #[test]
    fn invalid_document_message() {
        assert_eq!(InvalidDocument.to_string(), "not a valid CPF or CNPJ");
    }

    #[test]
    fn kind_display_and_parse() {
        assert_eq!(DocumentKind::Cpf.to_string(), "CPF");
        assert_eq!(DocumentKind::Cnpj.to_string(), "CNPJ");
        assert_eq!("CPF".parse::<DocumentKind>(), Ok(DocumentKind::Cpf));
        assert_eq!("CNPJ".parse::<DocumentKind>(), Ok(DocumentKind::Cnpj));
        assert!("RG".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn kind_serde_tokens() {
        assert_tokens(
            &DocumentKind::Cpf,
            &[Token::UnitVariant {
                name: "DocumentKind",
                variant: "Cpf",
            }],
        );
    }

    #[test]
    fn document_serde_round_trip() {
        let document = Document::parse("11222333000181").unwrap();
        let json = serde_json::to_string(&document).unwrap();
        assert_eq!(serde_json::from_str::<Document>(&json).unwrap(), document);
    }
}
