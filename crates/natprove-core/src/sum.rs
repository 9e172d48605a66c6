//! The sum machine: decides `a + b = c` and produces full proofs.

use crate::config::MachineConfig;
use crate::ident::PropositionId;
use crate::machine::Machine;
use crate::prover::SumProver;
use crate::statement::{self, SumEquation};
use natprove_api::{ProofRequest, ProofResponse, TruthValue};
use tracing::debug;

/// Decides sum statements in either orientation and, on request,
/// derives the full induction proof.
pub struct SumMachine {
    config: MachineConfig,
    prover: SumProver,
}

impl SumMachine {
    pub fn new(config: MachineConfig) -> Self {
        let prover = SumProver::new(&config);
        Self { config, prover }
    }

    fn verdict(equation: &SumEquation) -> TruthValue {
        if equation.holds() {
            TruthValue::True
        } else {
            TruthValue::False
        }
    }

    /// Canonical id of the asked fact, keeping the asked orientation.
    fn resolved_id(equation: &SumEquation) -> PropositionId {
        PropositionId::sum(
            equation.r.clone(),
            equation.o1.clone(),
            equation.o2.clone(),
            equation.result_first,
        )
    }
}

impl Machine for SumMachine {
    fn pointer(&self) -> &str {
        &self.config.sum_machine
    }

    fn respond(&self, request: &ProofRequest) -> ProofResponse {
        if !request.proposition.is_informal() {
            return ProofResponse::for_verdict(TruthValue::Unknown);
        }
        let Some(equation) =
            statement::parse_sum(&request.proposition.statement, request.parse_lenient)
        else {
            return ProofResponse::for_verdict(TruthValue::Unknown);
        };

        let mut response = ProofResponse::for_verdict(Self::verdict(&equation));
        if !request.fetch_updated_proposition && !request.fetch_proof {
            return response;
        }
        // Either fetch flag resolves the statement to its canonical form.
        response.resolved_proposition = Self::resolved_id(&equation).to_proposition();
        if !request.fetch_proof {
            return response;
        }

        let proof = self.prover.prove(&equation);
        debug!(
            conclusion = %proof.conclusion,
            propositions = proof.propositions.len(),
            arguments = proof.arguments.len(),
            "derived sum proof"
        );
        response.proof_propositions = Some(proof.proof_propositions());
        response.proof_arguments = Some(proof.proof_arguments());
        response
    }
}
