//! Estimation UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: the Gemini call
//! - view_model.rs: EstimationVm with RwSignals
//! - view.rs: Main component EstimationPage (form + submit flow)
//! - report.rs: EstimationReport (summary, BOM table, safety notes)

mod model;
mod report;
mod view;
mod view_model;

pub use report::EstimationReport;
pub use view::EstimationPage;
pub use view_model::EstimationVm;
