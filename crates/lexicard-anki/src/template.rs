use serde::{Deserialize, Serialize};

use crate::CardType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardTemplate {
    pub front_template: String,
    pub back_template: String,
}

impl CardTemplate {
    /// Word and book passage on one side, dictionary definition on the other
    pub fn for_card_type(card_type: CardType) -> Self {
        let usage_side = "<b>{word}</b><br><br>{usage}".to_string();
        let definition_side = "{definition}".to_string();

        match card_type {
            CardType::A => Self::new(usage_side, definition_side),
            CardType::B => Self::new(definition_side, usage_side),
        }
    }

    pub fn new(front: String, back: String) -> Self {
        Self {
            front_template: front,
            back_template: back,
        }
    }

    /// Format the front of the card
    pub fn format_front(&self, word: &str, usage: &str, definition: &str) -> String {
        fill(&self.front_template, word, usage, definition)
    }

    /// Format the back of the card
    pub fn format_back(&self, word: &str, usage: &str, definition: &str) -> String {
        fill(&self.back_template, word, usage, definition)
    }
}

fn fill(template: &str, word: &str, usage: &str, definition: &str) -> String {
    template
        .replace("{word}", word)
        .replace("{usage}", usage)
        .replace("{definition}", definition)
}
