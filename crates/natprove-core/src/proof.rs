//! Proof fragments: a conclusion plus the closed set of propositions
//! and arguments that justify it.

use crate::ident::{ArgumentId, PropositionId};
use natprove_api::{Argument, Proposition};
use std::collections::BTreeSet;

/// A self-contained proof of `conclusion`.
///
/// The sets hold everything transitively required to justify the
/// conclusion. Fragments grow only by union and by appending one
/// top-level argument, so identical sub-proofs deduplicate wherever
/// they are reused. Ordered sets keep materialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub conclusion: PropositionId,
    pub propositions: BTreeSet<PropositionId>,
    pub arguments: BTreeSet<ArgumentId>,
}

impl Proof {
    /// Leaf proof whose single step is vouched for by `machine`.
    pub fn machine_checked(conclusion: PropositionId, machine: &str) -> Self {
        let argument = ArgumentId::MachineChecked {
            conclusion: conclusion.clone(),
            machine: machine.to_string(),
        };
        Proof {
            propositions: BTreeSet::from([conclusion.clone()]),
            arguments: BTreeSet::from([argument]),
            conclusion,
        }
    }

    /// Leaf proof concluding directly from a platform axiom.
    pub fn from_axiom(conclusion: PropositionId, axiom: PropositionId) -> Self {
        let mut proof = Proof {
            conclusion: conclusion.clone(),
            propositions: BTreeSet::new(),
            arguments: BTreeSet::new(),
        };
        proof.extend(conclusion, vec![axiom]);
        proof
    }

    /// Append one derived step and make it the new conclusion.
    ///
    /// The step's propositions are recorded by their resource ids: a
    /// negation record and the fact it negates are one platform
    /// resource, so only the positive spelling is listed.
    pub fn extend(&mut self, conclusion: PropositionId, premises: Vec<PropositionId>) {
        self.propositions.insert(conclusion.resource().clone());
        for premise in &premises {
            self.propositions.insert(premise.resource().clone());
        }
        self.arguments.insert(ArgumentId::Derived {
            conclusion: conclusion.clone(),
            premises,
        });
        self.conclusion = conclusion;
    }

    /// Union `fragments` into one proof concluded by a step citing
    /// `premises`.
    pub fn combine(
        fragments: Vec<Proof>,
        conclusion: PropositionId,
        premises: Vec<PropositionId>,
    ) -> Self {
        let mut propositions = BTreeSet::new();
        let mut arguments = BTreeSet::new();
        for fragment in fragments {
            propositions.extend(fragment.propositions);
            arguments.extend(fragment.arguments);
        }
        let mut proof = Proof {
            conclusion: conclusion.clone(),
            propositions,
            arguments,
        };
        proof.extend(conclusion, premises);
        proof
    }

    /// Materialize the proposition list. External resources are skipped;
    /// the platform already holds them.
    pub fn proof_propositions(&self) -> Vec<Proposition> {
        self.propositions
            .iter()
            .filter_map(PropositionId::to_proposition)
            .collect()
    }

    /// Materialize the argument list.
    pub fn proof_arguments(&self) -> Vec<Argument> {
        self.arguments.iter().map(ArgumentId::to_argument).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn defn(n: u64) -> PropositionId {
        PropositionId::Definition { n: big(n) }
    }

    fn sum_id(r: u64, o1: u64, o2: u64, result_first: bool) -> PropositionId {
        PropositionId::sum(big(r), big(o1), big(o2), result_first)
    }

    const SUCCESSOR_MACHINE: &str = "#natprove/M_successor";

    #[test]
    fn test_machine_checked_leaf() {
        let proof = Proof::machine_checked(defn(8), SUCCESSOR_MACHINE);
        assert_eq!(proof.conclusion, defn(8));
        assert_eq!(proof.propositions, BTreeSet::from([defn(8)]));
        let wires: Vec<String> = proof.arguments.iter().map(ToString::to_string).collect();
        assert_eq!(wires, vec!["PMdefn.8-#natprove/M_successor".to_string()]);
    }

    #[test]
    fn test_axiom_leaf() {
        let axiom = PropositionId::external("#natprove/P_sum_identity");
        let target = sum_id(5, 5, 0, true);
        let proof = Proof::from_axiom(target.clone(), axiom.clone());
        assert_eq!(proof.conclusion, target);
        assert_eq!(proof.propositions, BTreeSet::from([target, axiom]));
        let wires: Vec<String> = proof.arguments.iter().map(ToString::to_string).collect();
        assert_eq!(wires, vec!["sum.1.5.5.0-#natprove/P_sum_identity".to_string()]);
    }

    #[test]
    fn test_extend_appends_step_and_moves_conclusion() {
        let mut proof = Proof::machine_checked(defn(8), SUCCESSOR_MACHINE);
        let law = PropositionId::external("#natprove/P_eq_addition");
        let target = PropositionId::SuccBothSides {
            a: big(8),
            b: big(7),
            c: big(1),
        };
        proof.extend(target.clone(), vec![defn(8), law.clone()]);

        assert_eq!(proof.conclusion, target);
        assert!(proof.propositions.contains(&target));
        assert!(proof.propositions.contains(&law));
        assert_eq!(proof.arguments.len(), 2);
        assert!(proof
            .arguments
            .iter()
            .any(|arg| arg.to_string() == "temp.2.8.7.1-defn.8-#natprove/P_eq_addition"));
    }

    #[test]
    fn test_extend_with_negation_lists_positive_resource() {
        let mut proof = Proof::machine_checked(defn(2), SUCCESSOR_MACHINE);
        let asked = sum_id(9, 2, 3, true);
        proof.extend(asked.clone().negated(), vec![defn(2)]);

        // The argument keeps the negation, the proposition set does not.
        assert_eq!(proof.conclusion.to_string(), "sum.1.9.2.3:N");
        assert!(proof.propositions.contains(&asked));
        assert!(!proof
            .propositions
            .iter()
            .any(|id| id.to_string().ends_with(":N")));
        assert!(proof
            .arguments
            .iter()
            .any(|arg| arg.to_string() == "sum.1.9.2.3:N-defn.2"));
    }

    #[test]
    fn test_combine_unions_and_deduplicates() {
        let left = Proof::machine_checked(defn(5), SUCCESSOR_MACHINE);
        let right = Proof::machine_checked(defn(5), SUCCESSOR_MACHINE);
        let other = Proof::machine_checked(defn(2), SUCCESSOR_MACHINE);

        let target = sum_id(5, 3, 2, true);
        let premises = vec![defn(5), defn(2)];
        let proof = Proof::combine(vec![left, right, other], target.clone(), premises);

        assert_eq!(proof.conclusion, target);
        // Duplicated defn.5 fragments collapse into one of each id.
        assert_eq!(proof.propositions, BTreeSet::from([defn(5), defn(2), target]));
        assert_eq!(proof.arguments.len(), 3);
    }

    #[test]
    fn test_materialized_propositions_skip_externals() {
        let axiom = PropositionId::external("#natprove/P_sum_identity");
        let proof = Proof::from_axiom(sum_id(5, 5, 0, true), axiom);
        let materialized = proof.proof_propositions();

        assert_eq!(materialized.len(), 1);
        assert_eq!(materialized[0].statement, "5 = 5 + 0");
        assert_eq!(materialized[0].ephemeral_ptr.as_deref(), Some("#P~sum.1.5.5.0"));
    }

    #[test]
    fn test_materialized_arguments_cite_pointers() {
        let axiom = PropositionId::external("#natprove/P_sum_identity");
        let proof = Proof::from_axiom(sum_id(5, 5, 0, true), axiom);
        let materialized = proof.proof_arguments();

        assert_eq!(materialized.len(), 1);
        assert_eq!(
            materialized[0].conclusion.as_deref(),
            Some("#P~sum.1.5.5.0")
        );
        assert_eq!(
            materialized[0].premises.as_ref().unwrap(),
            &vec!["#natprove/P_sum_identity".to_string()]
        );
    }

    #[test]
    fn test_materialization_is_deterministic() {
        let mut proof = Proof::machine_checked(defn(8), SUCCESSOR_MACHINE);
        proof.extend(
            PropositionId::SuccBothSides {
                a: big(8),
                b: big(7),
                c: big(1),
            },
            vec![defn(8), PropositionId::external("#natprove/P_eq_addition")],
        );

        let first: Vec<String> = proof
            .proof_propositions()
            .iter()
            .map(|p| p.statement.clone())
            .collect();
        let second: Vec<String> = proof
            .proof_propositions()
            .iter()
            .map(|p| p.statement.clone())
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["8 = 7 + 1".to_string(), "(8) + 1 = (7 + 1) + 1".to_string()]);
    }
}
