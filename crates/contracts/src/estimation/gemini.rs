//! Wire types for the Gemini `generateContent` REST endpoint, reduced to
//! the fields this app sends and reads. Unknown response fields are
//! ignored on purpose.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::dto::{EstimationRequest, EstimationResult};
use super::error::EstimationError;
use super::prompt;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

impl GenerateContentRequest {
    /// Builds the single call an estimation run makes: the whole prompt as
    /// one user part, output constrained to JSON by the response schema.
    pub fn for_estimation(request: &EstimationRequest) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt::build_prompt(request),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: prompt::response_schema(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, or None when the answer
    /// carries no text at all (blocked prompt, empty parts).
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Maps a raw `generateContent` response body to the report.
///
/// A blank body or an answer without text is `EmptyResponse`; an envelope
/// or report that fails to parse is `Parse`. No partial recovery: either
/// the full report deserializes or the run fails.
pub fn parse_generate_content(body: &str) -> Result<EstimationResult, EstimationError> {
    if body.trim().is_empty() {
        return Err(EstimationError::EmptyResponse);
    }

    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| EstimationError::Parse(e.to_string()))?;

    let text = envelope.text().ok_or(EstimationError::EmptyResponse)?;

    serde_json::from_str(&text).map_err(|e| EstimationError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "refinedSummary": "Pompa air otomatis berbasis sensor level dengan kontrol relai.",
        "complexityLevel": "Sedang",
        "billOfMaterials": [
            {
                "component": "Pompa air sentrifugal",
                "specification": "220V, 125W, head 9 m",
                "quantity": "1 unit",
                "estimatedCost": "Rp 540.000"
            },
            {
                "component": "Sensor level air",
                "specification": "Pelampung otomatis, kontak NO/NC",
                "quantity": "2 unit",
                "estimatedCost": "Rp 121.500"
            }
        ],
        "totalEstimatedBudget": "Rp 1.282.500",
        "safetyNotes": [
            "Wajib memakai APD: sarung tangan isolasi dan sepatu karet saat instalasi.",
            "Pasang MCB khusus dan grounding untuk mencegah sengatan listrik."
        ]
    }"#;

    fn envelope_with_text(text: &str) -> String {
        serde_json::json!({
            "candidates": [
                {
                    "content": { "parts": [ { "text": text } ] },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": { "totalTokenCount": 512 }
        })
        .to_string()
    }

    #[test]
    fn test_well_formed_response_parses_without_loss() {
        let result = parse_generate_content(&envelope_with_text(REPORT)).unwrap();

        assert_eq!(
            result.refined_summary,
            "Pompa air otomatis berbasis sensor level dengan kontrol relai."
        );
        assert_eq!(result.complexity_level, "Sedang");
        assert_eq!(result.bill_of_materials.len(), 2);
        assert_eq!(result.bill_of_materials[0].component, "Pompa air sentrifugal");
        assert_eq!(result.bill_of_materials[1].estimated_cost, "Rp 121.500");
        assert_eq!(result.total_estimated_budget, "Rp 1.282.500");
        assert_eq!(result.safety_notes.len(), 2);

        // Re-serializing drops or renames nothing.
        let round_trip = serde_json::to_value(&result).unwrap();
        let expected: Value = serde_json::from_str(REPORT).unwrap();
        assert_eq!(round_trip, expected);
    }

    #[test]
    fn test_blank_body_is_empty_response() {
        assert!(matches!(
            parse_generate_content(""),
            Err(EstimationError::EmptyResponse)
        ));
        assert!(matches!(
            parse_generate_content("  \n "),
            Err(EstimationError::EmptyResponse)
        ));
    }

    #[test]
    fn test_answer_without_text_is_empty_response() {
        for body in [
            r#"{}"#,
            r#"{ "candidates": [] }"#,
            r#"{ "candidates": [ { "finishReason": "SAFETY" } ] }"#,
            r#"{ "candidates": [ { "content": { "parts": [] } } ] }"#,
            r#"{ "candidates": [ { "content": { "parts": [ { "text": "" } ] } } ] }"#,
        ] {
            assert!(
                matches!(
                    parse_generate_content(body),
                    Err(EstimationError::EmptyResponse)
                ),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_malformed_envelope_is_parse_error() {
        assert!(matches!(
            parse_generate_content("{ not json"),
            Err(EstimationError::Parse(_))
        ));
    }

    #[test]
    fn test_malformed_report_is_parse_error() {
        // Model ignored the JSON mime type and answered in prose.
        let prose = envelope_with_text("Berikut estimasi biaya untuk proyek Anda...");
        assert!(matches!(
            parse_generate_content(&prose),
            Err(EstimationError::Parse(_))
        ));

        let truncated = envelope_with_text(r#"{ "refinedSummary": "Pompa"#);
        assert!(matches!(
            parse_generate_content(&truncated),
            Err(EstimationError::Parse(_))
        ));
    }

    #[test]
    fn test_request_embeds_field_values_verbatim() {
        let request = EstimationRequest {
            name: "Pompa Air".to_string(),
            function: String::new(),
            description: "Pompa otomatis".to_string(),
            budget: String::new(),
        };
        let payload = serde_json::to_string(&GenerateContentRequest::for_estimation(&request))
            .unwrap();
        assert!(payload.contains("Pompa Air"));
        assert!(payload.contains("Pompa otomatis"));
    }

    #[test]
    fn test_request_constrains_output_to_json_schema() {
        let request = EstimationRequest {
            name: "Pompa Air".to_string(),
            function: String::new(),
            description: "Pompa otomatis".to_string(),
            budget: String::new(),
        };
        let wire =
            serde_json::to_value(GenerateContentRequest::for_estimation(&request)).unwrap();

        assert_eq!(wire["contents"].as_array().unwrap().len(), 1);
        assert_eq!(wire["contents"][0]["parts"].as_array().unwrap().len(), 1);
        assert_eq!(wire["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(wire["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }
}
