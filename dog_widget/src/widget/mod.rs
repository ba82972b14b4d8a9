//! The two widget components and the surfaces they write to.
//!
//! Components never look anything up globally: the display area and the
//! selection control are handed to them as [`FactDisplay`] and
//! [`BreedSelect`] implementations.

pub mod breed_loader;
pub mod fact_refresher;
pub mod page;

use serde::Serialize;

/// A text area showing the current dog fact.
pub trait FactDisplay: Send + Sync {
    /// Replaces the displayed text.
    fn show_text(&self, text: &str);
}

/// A selection control that options can be appended to.
pub trait BreedSelect: Send + Sync {
    fn append_option(&self, option: BreedOption);
}

/// One entry of the breed selection control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreedOption {
    /// The raw breed key, e.g. `bulldog-english`.
    pub value: String,
    /// The key with only its first character upper-cased, e.g. `Bulldog-english`.
    pub label: String,
}

impl BreedOption {
    pub fn from_breed_key(key: impl Into<String>) -> Self {
        let value = key.into();
        let label = capitalize_first(&value);
        Self { value, label }
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
