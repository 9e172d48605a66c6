//! Data-model types shared with the proof platform.
//!
//! The platform talks to machines in terms of propositions (claims),
//! arguments (justified proof steps), and three-valued verdicts. These
//! are plain serde types with the platform's camelCase wire naming;
//! all proof-construction logic lives in `natprove-core`.

pub mod argument;
pub mod proposition;
pub mod request;
pub mod response;

pub use argument::Argument;
pub use proposition::{Language, MetaLanguage, Proposition};
pub use request::ProofRequest;
pub use response::{
    ProofResponse, TruthValue, FALSE_RESPONSE, TRUE_RESPONSE, UNKNOWN_RESPONSE,
};
