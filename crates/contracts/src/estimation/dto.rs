use serde::{Deserialize, Serialize};

use super::error::EstimationError;

/// User input for one estimation run. Lives only in UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationRequest {
    /// Machine or tool name (required)
    pub name: String,
    /// Primary function
    pub function: String,
    /// Free-form description, constraints, preferred materials (required)
    pub description: String,
    /// Budget or limits; empty means not specified
    pub budget: String,
}

impl EstimationRequest {
    /// Checks the required fields before any network work. The message is
    /// shown to the user verbatim.
    pub fn validate(&self) -> Result<(), EstimationError> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err(EstimationError::Validation(
                "Mohon isi setidaknya Nama dan Deskripsi alat.".to_string(),
            ));
        }
        Ok(())
    }
}

/// One bill-of-materials row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    pub component: String,
    /// Material grade, type or dimensions
    pub specification: String,
    pub quantity: String,
    /// Cost including the 35% markup, "Rp X.XXX.XXX"
    pub estimated_cost: String,
}

/// Structured report produced by one model call. Replaced wholesale on the
/// next submit, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    pub refined_summary: String,
    /// "Rendah", "Sedang" or "Tinggi"; rendered as received
    pub complexity_level: String,
    pub bill_of_materials: Vec<MaterialItem>,
    /// Grand total including the 35% markup, "Rp X.XXX.XXX"
    pub total_estimated_budget: String,
    pub safety_notes: Vec<String>,
}
