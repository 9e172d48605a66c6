//! natprove REST API server library.
//!
//! Exposes the proof machines over a small HTTP surface:
//! - `POST /proof_request` routes a proposition to the machine named by
//!   its platform pointer and answers with a verdict, optionally
//!   enriched with a machine-checkable proof;
//! - `GET /health` and `GET /version` serve operational metadata.

pub mod routes;

pub use routes::{AppState, ErrorResponse, HealthResponse, VersionResponse};
