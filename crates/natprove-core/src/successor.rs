//! The successor machine: decides `n = m + 1` and certifies true
//! statements as number definitions.
//!
//! This machine is the authority the sum prover's base case defers to:
//! its one-step proofs carry no premises because a successor definition
//! has nothing beneath it.

use crate::config::MachineConfig;
use crate::ident::{ArgumentId, PropositionId};
use crate::machine::Machine;
use crate::statement::{self, SuccessorEquation};
use natprove_api::{Argument, ProofRequest, ProofResponse, TruthValue};
use num_bigint::BigUint;
use num_traits::One;
use tracing::debug;

pub struct SuccessorMachine {
    config: MachineConfig,
}

impl SuccessorMachine {
    pub fn new(config: MachineConfig) -> Self {
        Self { config }
    }

    fn verdict(equation: &SuccessorEquation) -> TruthValue {
        if equation.holds() {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }

    /// Canonical id of the asked fact: the result-first sum spelling,
    /// which collapses to the definition id exactly when true.
    fn resolved_id(equation: &SuccessorEquation) -> PropositionId {
        PropositionId::sum(
            equation.n.clone(),
            equation.m.clone(),
            BigUint::one(),
            true,
        )
    }

    fn proof_argument(
        equation: &SuccessorEquation,
        verdict: TruthValue,
        resolved: PropositionId,
    ) -> Argument {
        if verdict == TruthValue::True {
            let step = ArgumentId::Derived {
                conclusion: resolved,
                premises: Vec::new(),
            };
            step.to_argument()
                .with_argument_text(format!("Definition of the number {}", equation.n))
        } else {
            let step = ArgumentId::Derived {
                conclusion: resolved.negated(),
                premises: Vec::new(),
            };
            step.to_argument()
        }
    }
}

impl Machine for SuccessorMachine {
    fn pointer(&self) -> &str {
        &self.config.successor_machine
    }

    fn respond(&self, request: &ProofRequest) -> ProofResponse {
        if !request.proposition.is_informal() {
            return ProofResponse::for_verdict(TruthValue::Unknown);
        }
        let Some(equation) =
            statement::parse_successor(&request.proposition.statement, request.parse_lenient)
        else {
            return ProofResponse::for_verdict(TruthValue::Unknown);
        };

        let verdict = Self::verdict(&equation);
        let mut response = ProofResponse::for_verdict(verdict);
        if !request.fetch_updated_proposition && !request.fetch_proof {
            return response;
        }
        let resolved = Self::resolved_id(&equation);
        response.resolved_proposition = resolved.to_proposition();
        if !request.fetch_proof {
            return response;
        }
        // One self-contained step; this machine never lists auxiliary
        // propositions.
        let step = Self::proof_argument(&equation, verdict, resolved);
        debug!(conclusion = ?step.conclusion, "issued one-step successor proof");
        response.proof_arguments = Some(vec![step]);
        response
    }
}
