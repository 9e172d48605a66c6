//! Propositions and the language tags that classify their statements.

use serde::{Deserialize, Serialize};

/// Surface language of a statement.
///
/// The arithmetic machines only interpret informal text. Deserialization
/// is total: any tag this crate does not model maps to [`Language::Other`],
/// which the machines answer with an `UNKNOWN` verdict instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    #[default]
    Informal,
    /// Any language tag outside this machine's scope (formal calculi etc.).
    #[serde(other)]
    Other,
}

/// Language the statement is *described* in, as opposed to written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetaLanguage {
    #[default]
    Informal,
    #[serde(other)]
    Other,
}

/// A single mathematical claim in the platform's resource shape.
///
/// `language` stays optional on the way in: a query that never says what
/// language its statement is written in gets an `UNKNOWN` verdict rather
/// than a guessed interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_language: Option<MetaLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    pub statement: String,
    /// Pointer valid only within the response that carries this object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_ptr: Option<String>,
}

impl Proposition {
    /// Informal-text proposition, the only kind these machines produce.
    pub fn informal(statement: impl Into<String>) -> Self {
        Self {
            meta_language: Some(MetaLanguage::Informal),
            language: Some(Language::Informal),
            statement: statement.into(),
            ephemeral_ptr: None,
        }
    }

    pub fn with_ephemeral_ptr(mut self, ptr: impl Into<String>) -> Self {
        self.ephemeral_ptr = Some(ptr.into());
        self
    }

    /// Whether the statement is declared to be informal text.
    pub fn is_informal(&self) -> bool {
        self.language == Some(Language::Informal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_wire_names() {
        assert_eq!(
            serde_json::to_string(&Language::Informal).unwrap(),
            "\"INFORMAL\""
        );
        let parsed: Language = serde_json::from_str("\"INFORMAL\"").unwrap();
        assert_eq!(parsed, Language::Informal);
    }

    #[test]
    fn test_unknown_language_tag_maps_to_other() {
        let parsed: Language = serde_json::from_str("\"METAMATH_SET_MM\"").unwrap();
        assert_eq!(parsed, Language::Other);
    }

    #[test]
    fn test_informal_constructor() {
        let prop = Proposition::informal("4 + 7 = 11");
        assert!(prop.is_informal());
        assert_eq!(prop.meta_language, Some(MetaLanguage::Informal));
        assert_eq!(prop.statement, "4 + 7 = 11");
        assert!(prop.ephemeral_ptr.is_none());
    }

    #[test]
    fn test_serialization_omits_absent_fields() {
        let prop = Proposition {
            meta_language: None,
            language: Some(Language::Informal),
            statement: "8 = 7 + 1".to_string(),
            ephemeral_ptr: None,
        };
        let json = serde_json::to_value(&prop).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"language": "INFORMAL", "statement": "8 = 7 + 1"})
        );
    }

    #[test]
    fn test_ephemeral_ptr_round_trip() {
        let prop = Proposition::informal("8 = 7 + 1").with_ephemeral_ptr("#P~defn.8");
        let json = serde_json::to_string(&prop).unwrap();
        assert!(json.contains("\"ephemeralPtr\":\"#P~defn.8\""));
        let back: Proposition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prop);
    }

    #[test]
    fn test_missing_language_is_not_informal() {
        let prop: Proposition = serde_json::from_str("{\"statement\": \"1 + 1\"}").unwrap();
        assert_eq!(prop.language, None);
        assert!(!prop.is_informal());
    }
}
