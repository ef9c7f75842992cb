//! Estimation Contract Module
//!
//! Structure:
//! - dto.rs: EstimationRequest / EstimationResult and validation
//! - error.rs: EstimationError and its display policy
//! - prompt.rs: instruction prompt and response schema for the model
//! - gemini.rs: `generateContent` wire types and response parsing
//! - consult.rs: WhatsApp consultation link
//!
//! One submit maps to exactly one model call. There is no persistence and
//! no retry; a failed run is resolved by resubmitting the form.

mod consult;
mod dto;
mod error;
mod gemini;
mod prompt;

pub use consult::{consultation_link, consultation_message, WHATSAPP_PHONE};
pub use dto::{EstimationRequest, EstimationResult, MaterialItem};
pub use error::EstimationError;
pub use gemini::{parse_generate_content, GenerateContentRequest};
pub use prompt::{build_prompt, response_schema};
