use lexicard_types::{DictionaryKey, Language};
use serde::{Deserialize, Serialize};

fn default_language() -> Language {
    Language::En
}

fn default_id() -> u8 {
    1
}

/// Dictionary used for lookups when the caller does not pick one
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_id")]
    pub id: u8,
}

impl DictionaryConfig {
    pub fn key(&self) -> DictionaryKey {
        DictionaryKey::new(self.language, self.id)
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            id: default_id(),
        }
    }
}
