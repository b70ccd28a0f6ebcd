//! Displayed text in dialogues - either a literal string or a reference
//! into the host's translation tables.
//!
//! Serializes to the host's raw-message JSON shape: literals are plain
//! strings, translations are `{"translate": ..., "with": [...]}` and
//! composites are `{"rawtext": [...]}`.

use serde::{Deserialize, Serialize};

/// A piece of text shown in a dialogue title, body, button or label.
///
/// Values are immutable and cheap to clone; a dialogue definition built
/// from them can be reused across players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptText {
    /// Plain text shown as-is.
    Literal(String),
    /// A translation key resolved by the connected client, with ordered
    /// substitution parameters (plain strings in practice).
    Translate {
        translate: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        with: Vec<ScriptText>,
    },
    /// An ordered composite of text parts, concatenated by the client.
    Sequence {
        rawtext: Vec<ScriptText>,
    },
}

impl ScriptText {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Reference a translation key with no parameters.
    pub fn translate(key: impl Into<String>) -> Self {
        Self::Translate {
            translate: key.into(),
            with: Vec::new(),
        }
    }

    /// Reference a translation key with ordered substitution parameters.
    pub fn translate_with<I, T>(key: impl Into<String>, with: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ScriptText>,
    {
        Self::Translate {
            translate: key.into(),
            with: with.into_iter().map(Into::into).collect(),
        }
    }

    /// Concatenate several text parts into one value.
    pub fn sequence<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ScriptText>,
    {
        Self::Sequence {
            rawtext: parts.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for ScriptText {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for ScriptText {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}
