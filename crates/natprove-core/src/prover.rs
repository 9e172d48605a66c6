//! The sum-proof engine.
//!
//! A true sum fact is proven by induction on the second operand. Each
//! round bridges the goal to the same fact one step down through two
//! rewrites, then closes the round with the successor definitions of
//! the result and of the operand:
//!
//! ```text
//! 11 = 7 + 4              from  10 + 1 = 7 + (3 + 1), defn.11, defn.4
//! 10 + 1 = 7 + (3 + 1)    from  (10) + 1 = (7 + 3) + 1   (sum associativity)
//! (10) + 1 = (7 + 3) + 1  from  10 = 7 + 3               (equality addition)
//! 10 = 7 + 3              from  9 + 1 = 7 + (2 + 1), defn.10, defn.3
//!   ...
//! 8 = 7 + 1               certified by the successor machine
//! ```
//!
//! Before the induction can run, the goal is normalized: a wrong result
//! reduces to proving the true fact and concluding the negation record;
//! an operands-first statement reduces to its result-first form via
//! equality commutativity; a smaller first operand is swapped via sum
//! commutativity. A zero second operand closes immediately with the
//! additive-identity axiom.
//!
//! The engine runs on an explicit goal stack. The operands come off the
//! wire unbounded, so derivation depth must not be capped by the native
//! call stack.

use crate::config::MachineConfig;
use crate::ident::PropositionId;
use crate::proof::Proof;
use crate::statement::SumEquation;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// What remains to be proven during descent.
enum Goal {
    /// `r = o1 + o2`, or the operands-first orientation of it.
    Sum {
        r: BigUint,
        o1: BigUint,
        o2: BigUint,
        result_first: bool,
    },
    /// `a + 1 = b + (c + 1)`
    SuccShifted { a: BigUint, b: BigUint, c: BigUint },
    /// `(a) + 1 = (b + c) + 1`
    SuccBothSides { a: BigUint, b: BigUint, c: BigUint },
}

/// A step recorded on the way down, applied to the sub-proof on the way
/// back up.
enum Pending {
    /// Conclude the negation record of `target` from the true fact.
    Negate { target: PropositionId },
    /// Conclude `target` from the sub-proof plus one cited law.
    Cite {
        target: PropositionId,
        law: PropositionId,
    },
    /// Conclude `target` from the sub-proof and two definition leaves.
    Induct {
        target: PropositionId,
        defn_r: Proof,
        defn_o2: Proof,
    },
}

/// Proof engine for sum facts.
pub struct SumProver {
    successor_machine: String,
    sum_commutativity: PropositionId,
    sum_associativity: PropositionId,
    equality_commutativity: PropositionId,
    equality_addition: PropositionId,
    sum_identity: PropositionId,
}

impl SumProver {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            successor_machine: config.successor_machine.clone(),
            sum_commutativity: PropositionId::external(config.axioms.sum_commutativity.clone()),
            sum_associativity: PropositionId::external(config.axioms.sum_associativity.clone()),
            equality_commutativity: PropositionId::external(
                config.axioms.equality_commutativity.clone(),
            ),
            equality_addition: PropositionId::external(config.axioms.equality_addition.clone()),
            sum_identity: PropositionId::external(config.axioms.sum_identity.clone()),
        }
    }

    /// Prove `equation`, true or not.
    ///
    /// A false statement yields a proof concluding its negation record.
    /// Terminates for every non-negative operand pair.
    pub fn prove(&self, equation: &SumEquation) -> Proof {
        self.prove_sum(
            equation.r.clone(),
            equation.o1.clone(),
            equation.o2.clone(),
            equation.result_first,
        )
    }

    fn prove_sum(&self, r: BigUint, o1: BigUint, o2: BigUint, result_first: bool) -> Proof {
        let mut pending: Vec<Pending> = Vec::new();
        let mut goal = Goal::Sum {
            r,
            o1,
            o2,
            result_first,
        };

        // Descend to a leaf. Every round either shrinks o2 or clears one
        // normalization (wrong result, orientation, operand order)
        // without reintroducing another, so the loop terminates.
        let mut proof = loop {
            goal = match goal {
                Goal::Sum {
                    r,
                    o1,
                    o2,
                    result_first,
                } => {
                    let target =
                        PropositionId::sum(r.clone(), o1.clone(), o2.clone(), result_first);
                    let true_r = &o1 + &o2;
                    if r != true_r {
                        pending.push(Pending::Negate { target });
                        Goal::Sum {
                            r: true_r,
                            o1,
                            o2,
                            result_first,
                        }
                    } else if !result_first {
                        pending.push(Pending::Cite {
                            target,
                            law: self.equality_commutativity.clone(),
                        });
                        Goal::Sum {
                            r,
                            o1,
                            o2,
                            result_first: true,
                        }
                    } else if o1 < o2 {
                        pending.push(Pending::Cite {
                            target,
                            law: self.sum_commutativity.clone(),
                        });
                        Goal::Sum {
                            r,
                            o1: o2,
                            o2: o1,
                            result_first: true,
                        }
                    } else if o2.is_zero() {
                        break Proof::from_axiom(target, self.sum_identity.clone());
                    } else if o2.is_one() {
                        // The target collapsed to the definition id.
                        break Proof::machine_checked(target, &self.successor_machine);
                    } else {
                        let defn_r = self.definition_leaf(r.clone());
                        let defn_o2 = self.definition_leaf(o2.clone());
                        pending.push(Pending::Induct {
                            target,
                            defn_r,
                            defn_o2,
                        });
                        Goal::SuccShifted {
                            a: &r - 1u32,
                            b: o1,
                            c: &o2 - 1u32,
                        }
                    }
                }
                Goal::SuccShifted { a, b, c } => {
                    let target = PropositionId::SuccShifted {
                        a: a.clone(),
                        b: b.clone(),
                        c: c.clone(),
                    };
                    pending.push(Pending::Cite {
                        target,
                        law: self.sum_associativity.clone(),
                    });
                    Goal::SuccBothSides { a, b, c }
                }
                Goal::SuccBothSides { a, b, c } => {
                    let target = PropositionId::SuccBothSides {
                        a: a.clone(),
                        b: b.clone(),
                        c: c.clone(),
                    };
                    pending.push(Pending::Cite {
                        target,
                        law: self.equality_addition.clone(),
                    });
                    Goal::Sum {
                        r: a,
                        o1: b,
                        o2: c,
                        result_first: true,
                    }
                }
            };
        };

        // Unwind, innermost step first.
        for step in pending.into_iter().rev() {
            let premise = proof.conclusion.clone();
            match step {
                Pending::Negate { target } => {
                    proof.extend(target.negated(), vec![premise]);
                }
                Pending::Cite { target, law } => {
                    proof.extend(target, vec![premise, law]);
                }
                Pending::Induct {
                    target,
                    defn_r,
                    defn_o2,
                } => {
                    let premises = vec![
                        premise,
                        defn_r.conclusion.clone(),
                        defn_o2.conclusion.clone(),
                    ];
                    proof = Proof::combine(vec![proof, defn_r, defn_o2], target, premises);
                }
            }
        }
        proof
    }

    /// Successor-definition leaf for `n` (`n >= 2` during induction),
    /// certified by the successor machine.
    fn definition_leaf(&self, n: BigUint) -> Proof {
        Proof::machine_checked(PropositionId::Definition { n }, &self.successor_machine)
    }
}
