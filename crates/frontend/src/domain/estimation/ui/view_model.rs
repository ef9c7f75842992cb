//! Estimation - View Model

use contracts::estimation::{EstimationRequest, EstimationResult};
use leptos::prelude::*;

/// Signal set backing the estimation page.
///
/// Submit cycle: idle, submitting, then success or failure, back to idle.
/// `generation` numbers the submits so a completion only writes state if it
/// is still the latest one.
#[derive(Clone, Copy)]
pub struct EstimationVm {
    pub name: RwSignal<String>,
    pub function: RwSignal<String>,
    pub description: RwSignal<String>,
    pub budget: RwSignal<String>,

    pub is_submitting: RwSignal<bool>,
    pub result: RwSignal<Option<EstimationResult>>,
    pub error: RwSignal<Option<String>>,
    pub generation: RwSignal<u64>,
}

impl EstimationVm {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            function: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            budget: RwSignal::new(String::new()),
            is_submitting: RwSignal::new(false),
            result: RwSignal::new(None),
            error: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    /// Snapshot of the form fields as a request DTO.
    pub fn to_request(&self) -> EstimationRequest {
        EstimationRequest {
            name: self.name.get(),
            function: self.function.get(),
            description: self.description.get(),
            budget: self.budget.get(),
        }
    }
}

impl Default for EstimationVm {
    fn default() -> Self {
        Self::new()
    }
}
