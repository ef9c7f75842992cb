//! Endpoint and credential wiring for the model call.

/// REST base of the Google generative language API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model every estimation call targets.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// API credential, baked in at build time: a CSR bundle has no runtime
/// environment. Empty when the build did not provide one, and the endpoint
/// rejects the call.
pub fn api_key() -> &'static str {
    option_env!("GEMINI_API_KEY").unwrap_or("")
}

/// Full `generateContent` URL for the configured model.
pub fn generate_content_url() -> String {
    format!("{}/models/{}:generateContent", GEMINI_API_BASE, GEMINI_MODEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_content_url_shape() {
        assert_eq!(
            generate_content_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }
}
