//! Machine and axiom pointer configuration.
//!
//! Every resource the machines cite lives behind a platform pointer:
//! the two machine registrations and the five arithmetic laws the sum
//! prover leans on. Deployments override these to point at their own
//! platform's resources; nothing in the proof engine hardcodes them.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Platform pointers for the laws cited inside sum proofs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AxiomCatalog {
    /// `a + b = b + a`
    pub sum_commutativity: String,
    /// `(a + b) + c = a + (b + c)`
    pub sum_associativity: String,
    /// `a = b` implies `b = a`
    pub equality_commutativity: String,
    /// `a = b` implies `a + c = b + c`
    pub equality_addition: String,
    /// `a + 0 = a`
    pub sum_identity: String,
}

impl Default for AxiomCatalog {
    fn default() -> Self {
        Self {
            sum_commutativity: "#natprove/P_sum_commutative".to_string(),
            sum_associativity: "#natprove/P_sum_associative".to_string(),
            equality_commutativity: "#natprove/P_eq_commutative".to_string(),
            equality_addition: "#natprove/P_eq_addition".to_string(),
            sum_identity: "#natprove/P_sum_identity".to_string(),
        }
    }
}

/// Configuration for the hosted machines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MachineConfig {
    /// Pointer the successor machine registers under. Sum proofs cite
    /// it as the premise machine of their base case.
    pub successor_machine: String,
    /// Pointer the sum machine registers under.
    pub sum_machine: String,
    pub axioms: AxiomCatalog,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            successor_machine: "#natprove/M_successor".to_string(),
            sum_machine: "#natprove/M_sum".to_string(),
            axioms: AxiomCatalog::default(),
        }
    }
}

impl MachineConfig {
    /// Check every configured pointer is platform-shaped: non-empty,
    /// `#`-prefixed, and free of `-` (the argument-id separator).
    pub fn validate(&self) -> CoreResult<()> {
        for pointer in self.pointers() {
            validate_pointer(pointer)?;
        }
        Ok(())
    }

    fn pointers(&self) -> [&String; 7] {
        [
            &self.successor_machine,
            &self.sum_machine,
            &self.axioms.sum_commutativity,
            &self.axioms.sum_associativity,
            &self.axioms.equality_commutativity,
            &self.axioms.equality_addition,
            &self.axioms.sum_identity,
        ]
    }
}

fn validate_pointer(pointer: &str) -> CoreResult<()> {
    if pointer.is_empty() {
        return Err(CoreError::invalid_pointer(pointer, "empty"));
    }
    if !pointer.starts_with('#') {
        return Err(CoreError::invalid_pointer(pointer, "must start with '#'"));
    }
    if pointer.contains('-') {
        return Err(CoreError::invalid_pointer(
            pointer,
            "'-' is reserved as the argument-id separator",
        ));
    }
    Ok(())
}
