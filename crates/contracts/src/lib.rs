//! Shared contracts for the Kajian Teknis estimator.
//!
//! Everything the frontend exchanges with the model lives here: the form
//! request and report result DTOs, the prompt and response-schema builders,
//! the `generateContent` wire types, and the consultation link. The crate is
//! WASM-free so all of it is testable natively.

pub mod estimation;
