// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod contact;
mod document;
mod masks;
mod normalization;

// This is the public API of the brdoc core library
pub use checksum::{CnpjChecksum, CpfChecksum, Validator};
pub use contact::{is_valid_email, is_valid_phone};
pub use document::{validate, Document, DocumentKind, InvalidDocument};
pub use masks::{apply_document_mask, apply_phone_mask};
pub use normalization::normalize;
