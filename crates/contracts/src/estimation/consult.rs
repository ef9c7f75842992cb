//! WhatsApp deep link for the follow-up consultation offer.

use super::dto::EstimationResult;

/// Consultation target in wa.me format, country code included.
pub const WHATSAPP_PHONE: &str = "6281339381191";

/// Pre-filled consultation text. `project_name` is read from the live form
/// field at click time, so it may differ from the submitted request.
pub fn consultation_message(project_name: &str, result: &EstimationResult) -> String {
    format!(
        "Halo, saya ingin konsultasi mengenai kajian teknis ini:\n\
         \n\
         *Nama Proyek:* {}\n\
         *Total Estimasi:* {}\n\
         \n\
         *Ringkasan:* {}\n\
         \n\
         Mohon informasi lebih lanjut.",
        project_name, result.total_estimated_budget, result.refined_summary
    )
}

/// wa.me link carrying the percent-encoded consultation text. Only a
/// successful report offers it.
pub fn consultation_link(project_name: &str, result: &EstimationResult) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(&consultation_message(project_name, result))
    )
}
