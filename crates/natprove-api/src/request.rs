//! The request envelope machines are queried with.

use crate::proposition::Proposition;
use serde::{Deserialize, Serialize};

/// A query about one proposition, addressed to one hosted machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRequest {
    /// Platform pointer of the machine that should answer.
    pub machine_pointer: String,
    /// The proposition being asked about.
    pub proposition: Proposition,
    /// Also return the statement in the machine's canonical form.
    #[serde(default)]
    pub fetch_updated_proposition: bool,
    /// Also return the full proof alongside the verdict.
    #[serde(default)]
    pub fetch_proof: bool,
    /// Accept incomplete statements and complete them (`7 + 3` becomes
    /// `7 + 3 = 10`). Older clients send this as `tryCompletingProposition`.
    #[serde(default, alias = "tryCompletingProposition")]
    pub parse_lenient: bool,
}

impl ProofRequest {
    /// Verdict-only request: both fetch flags off, strict parsing.
    pub fn new(machine_pointer: impl Into<String>, statement: impl Into<String>) -> Self {
        Self {
            machine_pointer: machine_pointer.into(),
            proposition: Proposition::informal(statement),
            fetch_updated_proposition: false,
            fetch_proof: false,
            parse_lenient: false,
        }
    }
}
