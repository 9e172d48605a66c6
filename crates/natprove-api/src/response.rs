//! Verdicts and the response envelope machines answer with.

use crate::argument::Argument;
use crate::proposition::Proposition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued verdict on a queried proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthValue {
    /// The machine cannot interpret the statement (wrong language, no
    /// grammar match, out of scope). Not a claim that the statement is
    /// undecidable.
    #[default]
    Unknown,
    True,
    False,
}

impl TruthValue {
    /// Whether the machine actually decided the statement.
    pub fn is_decided(&self) -> bool {
        matches!(self, TruthValue::True | TruthValue::False)
    }
}

impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TruthValue::Unknown => "UNKNOWN",
            TruthValue::True => "TRUE",
            TruthValue::False => "FALSE",
        };
        f.write_str(s)
    }
}

/// A machine's answer: the verdict, plus optional enrichments the
/// request asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofResponse {
    pub truth_value: TruthValue,
    /// The queried statement in canonical form, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_proposition: Option<Proposition>,
    /// Intermediate propositions of the proof, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_propositions: Option<Vec<Proposition>>,
    /// Justifying arguments of the proof, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_arguments: Option<Vec<Argument>>,
}

/// Verdict-only templates. Responses that need enrichment start from a
/// clone; the templates themselves are never mutated.
pub static UNKNOWN_RESPONSE: ProofResponse = ProofResponse::stub(TruthValue::Unknown);
pub static TRUE_RESPONSE: ProofResponse = ProofResponse::stub(TruthValue::True);
pub static FALSE_RESPONSE: ProofResponse = ProofResponse::stub(TruthValue::False);

impl ProofResponse {
    /// Bare response carrying only a verdict.
    pub const fn stub(truth_value: TruthValue) -> Self {
        Self {
            truth_value,
            resolved_proposition: None,
            proof_propositions: None,
            proof_arguments: None,
        }
    }

    /// Fresh copy of the matching verdict-only template.
    pub fn for_verdict(truth_value: TruthValue) -> Self {
        match truth_value {
            TruthValue::Unknown => UNKNOWN_RESPONSE.clone(),
            TruthValue::True => TRUE_RESPONSE.clone(),
            TruthValue::False => FALSE_RESPONSE.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truth_value_wire_names() {
        assert_eq!(
            serde_json::to_string(&TruthValue::Unknown).unwrap(),
            "\"UNKNOWN\""
        );
        assert_eq!(serde_json::to_string(&TruthValue::True).unwrap(), "\"TRUE\"");
        assert_eq!(
            serde_json::to_string(&TruthValue::False).unwrap(),
            "\"FALSE\""
        );
    }

    #[test]
    fn test_truth_value_display_matches_wire() {
        assert_eq!(TruthValue::Unknown.to_string(), "UNKNOWN");
        assert_eq!(TruthValue::True.to_string(), "TRUE");
        assert_eq!(TruthValue::False.to_string(), "FALSE");
    }

    #[test]
    fn test_is_decided() {
        assert!(!TruthValue::Unknown.is_decided());
        assert!(TruthValue::True.is_decided());
        assert!(TruthValue::False.is_decided());
    }

    #[test]
    fn test_stub_serializes_to_verdict_only() {
        let json = serde_json::to_value(&UNKNOWN_RESPONSE).unwrap();
        assert_eq!(json, serde_json::json!({"truthValue": "UNKNOWN"}));

        let json = serde_json::to_value(&TRUE_RESPONSE).unwrap();
        assert_eq!(json, serde_json::json!({"truthValue": "TRUE"}));
    }

    #[test]
    fn test_for_verdict_clones_template() {
        let mut response = ProofResponse::for_verdict(TruthValue::False);
        response.resolved_proposition = Some(Proposition::informal("9 = 2 + 3"));
        // The template is untouched by customizing the clone.
        assert!(FALSE_RESPONSE.resolved_proposition.is_none());
        assert_eq!(response.truth_value, TruthValue::False);
    }

    #[test]
    fn test_deserialize_accepts_missing_optionals() {
        let response: ProofResponse = serde_json::from_str("{\"truthValue\": \"TRUE\"}").unwrap();
        assert_eq!(response.truth_value, TruthValue::True);
        assert!(response.proof_propositions.is_none());
        assert!(response.proof_arguments.is_none());
    }
}
