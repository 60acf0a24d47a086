use serde::{Deserialize, Serialize};

fn default_placeholder() -> String {
    "(...)".to_string()
}

fn default_line_break() -> String {
    "<br>".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HighlightConfig {
    /// Shown in bold where a redacted word used to be
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Substituted for newlines when text is embedded into a card
    #[serde(default = "default_line_break")]
    pub line_break: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            line_break: default_line_break(),
        }
    }
}
