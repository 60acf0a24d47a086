pub mod types;

pub use types::{DictionaryKey, Language, PresentationMode, UnknownLanguage};
