//! Arguments: single justified steps of a proof.

use crate::proposition::{Language, MetaLanguage};
use serde::{Deserialize, Serialize};

/// One proof step: a conclusion justified either by premises known to
/// the platform or by deferring to an external premise machine.
///
/// `premises` distinguishes "no premises" (`Some(vec![])`, an axiom-like
/// step) from "not a premise-based step" (`None`, machine-checked).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_language: Option<MetaLanguage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Pointer to the proposition this argument establishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<String>,
    /// Pointers to the propositions this argument relies on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premises: Option<Vec<String>>,
    /// Machine trusted for the conclusion instead of a local derivation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premise_machine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument_text: Option<String>,
    /// Pointer valid only within the response that carries this object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ephemeral_ptr: Option<String>,
}

impl Argument {
    /// Step concluding `conclusion` from `premises`.
    pub fn derived(conclusion: impl Into<String>, premises: Vec<String>) -> Self {
        Self {
            meta_language: Some(MetaLanguage::Informal),
            language: Some(Language::Informal),
            conclusion: Some(conclusion.into()),
            premises: Some(premises),
            ..Self::default()
        }
    }

    /// Step whose conclusion is vouched for by `machine`.
    pub fn machine_checked(conclusion: impl Into<String>, machine: impl Into<String>) -> Self {
        Self {
            meta_language: Some(MetaLanguage::Informal),
            language: Some(Language::Informal),
            conclusion: Some(conclusion.into()),
            premise_machine: Some(machine.into()),
            ..Self::default()
        }
    }

    pub fn with_argument_text(mut self, text: impl Into<String>) -> Self {
        self.argument_text = Some(text.into());
        self
    }

    pub fn with_ephemeral_ptr(mut self, ptr: impl Into<String>) -> Self {
        self.ephemeral_ptr = Some(ptr.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_argument_shape() {
        let arg = Argument::derived(
            "#P~sum.1.5.3.2",
            vec!["#P~temp.1.4.3.1".to_string(), "#P~defn.5".to_string()],
        );
        assert_eq!(arg.conclusion.as_deref(), Some("#P~sum.1.5.3.2"));
        assert_eq!(arg.premises.as_ref().map(Vec::len), Some(2));
        assert!(arg.premise_machine.is_none());
    }

    #[test]
    fn test_machine_checked_argument_has_no_premises() {
        let arg = Argument::machine_checked("#P~defn.8", "#natprove/M_successor");
        assert!(arg.premises.is_none());
        assert_eq!(arg.premise_machine.as_deref(), Some("#natprove/M_successor"));
    }

    #[test]
    fn test_empty_premise_list_serializes_as_empty_array() {
        // An axiom-like step keeps its explicit empty premise list on the
        // wire; a machine-checked step omits the field entirely.
        let arg = Argument::derived("#P~defn.8", vec![]);
        let json = serde_json::to_value(&arg).unwrap();
        assert_eq!(json["premises"], serde_json::json!([]));

        let checked = Argument::machine_checked("#P~defn.8", "#natprove/M_successor");
        let json = serde_json::to_value(&checked).unwrap();
        assert!(json.get("premises").is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let arg = Argument::derived("#P~defn.8", vec![])
            .with_argument_text("Definition of the number 8")
            .with_ephemeral_ptr("#A~defn.8");
        assert_eq!(
            arg.argument_text.as_deref(),
            Some("Definition of the number 8")
        );
        assert_eq!(arg.ephemeral_ptr.as_deref(), Some("#A~defn.8"));
    }

    #[test]
    fn test_camel_case_wire_naming() {
        let arg = Argument::machine_checked("#P~defn.2", "#natprove/M_successor")
            .with_ephemeral_ptr("#A~PMdefn.2-natproveM_successor");
        let json = serde_json::to_string(&arg).unwrap();
        assert!(json.contains("\"premiseMachine\""));
        assert!(json.contains("\"ephemeralPtr\""));
        assert!(json.contains("\"metaLanguage\""));
    }
}
