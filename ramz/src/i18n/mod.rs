//! Translations and language selection.
//!
//! The site ships in Arabic (right-to-left, the default) and English.
//! Strings are looked up by key in a [`Dictionary`]; a
//! [`LanguageContext`] holds the active language and is handed to
//! whatever needs to render text.

mod context;
mod dictionary;
mod language;

pub use context::LanguageContext;
pub use dictionary::Dictionary;
pub use language::{Language, TextDirection};
