//! Proof core for the natprove arithmetic machines.
//!
//! Two machines live here. The successor machine decides statements of
//! the form `n = m + 1` and certifies the true ones as number
//! definitions. The sum machine decides `a + b = c` in either
//! orientation and, on request, produces a full proof: an induction
//! over the second operand, expressed as a deduplicated set of
//! content-addressed propositions and arguments that the hosting
//! platform can audit step by step.
//!
//! Layering, bottom up:
//!
//! - [`statement`]: the textual grammar and parsed equation types
//! - [`ident`]: stable identifiers for every lemma a proof touches
//! - [`proof`]: proof fragments and their materialization into
//!   platform objects
//! - [`prover`]: the sum-proof engine
//! - [`successor`] / [`sum`]: the machines themselves
//! - [`machine`]: the trait and pointer-keyed dispatch registry
//! - [`config`]: machine and axiom pointers

pub mod config;
pub mod error;
pub mod ident;
pub mod machine;
pub mod proof;
pub mod prover;
pub mod statement;
pub mod successor;
pub mod sum;

pub use config::{AxiomCatalog, MachineConfig};
pub use error::{CoreError, CoreResult};
pub use ident::{ArgumentId, PropositionId};
pub use machine::{Machine, MachineRegistry};
pub use proof::Proof;
pub use prover::SumProver;
pub use statement::{SumEquation, SuccessorEquation};
pub use successor::SuccessorMachine;
pub use sum::SumMachine;
