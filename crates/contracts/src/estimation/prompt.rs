use serde_json::{json, Value};

use super::dto::EstimationRequest;

/// Budget line used when the user left the field empty.
const BUDGET_UNSPECIFIED: &str = "Tidak ditentukan";

/// Renders the instruction prompt for one request. Deterministic: the same
/// request always yields the same string. User values are embedded verbatim,
/// the instruction block is fixed.
pub fn build_prompt(request: &EstimationRequest) -> String {
    let budget = if request.budget.trim().is_empty() {
        BUDGET_UNSPECIFIED
    } else {
        request.budget.as_str()
    };

    format!(
        "Saya membutuhkan estimasi biaya dan material yang mendetail untuk membuat mesin atau alat kustom.\n\
         \n\
         Nama Proyek: {}\n\
         Fungsi Utama: {}\n\
         Deskripsi: {}\n\
         Anggaran/Batasan: {}\n\
         \n\
         Bertindaklah sebagai insinyur mekanik ahli dan inspektur keselamatan.\n\
         Pecah proyek ini menjadi Daftar Material (Bill of Materials/BOM).\n\
         \n\
         INSTRUKSI KRITIS:\n\
         1. Gunakan Bahasa Indonesia.\n\
         2. Estimasi biaya dalam Rupiah (IDR). Hitung harga pasar rata-rata di Indonesia, \
         lalu TAMBAHKAN MARGIN 35% pada setiap harga komponen dan total anggaran (markup) \
         untuk mengantisipasi fluktuasi harga dan biaya tak terduga.\n\
         3. JANGAN berikan rencana fabrikasi atau langkah-langkah pembuatan.\n\
         4. Berikan catatan keselamatan yang EKSTENSIF dan MENDETAIL, termasuk:\n\
         - Alat Pelindung Diri (APD) yang wajib.\n\
         - Bahaya Listrik/Mekanik spesifik.\n\
         - Peringatan operasional.\n\
         - Persyaratan perawatan kritis untuk keselamatan.",
        request.name, request.function, request.description, budget
    )
}

/// Response schema sent with every call so the model is constrained to the
/// report shape. Field descriptions steer language and price formatting and
/// are part of the contract.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "refinedSummary": {
                "type": "STRING",
                "description": "Ringkasan teknis tentang apa yang akan dibuat dalam Bahasa Indonesia."
            },
            "complexityLevel": {
                "type": "STRING",
                "description": "Rendah, Sedang, atau Tinggi"
            },
            "billOfMaterials": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "component": {
                            "type": "STRING",
                            "description": "Nama komponen dalam Bahasa Indonesia"
                        },
                        "specification": {
                            "type": "STRING",
                            "description": "Spesifikasi, jenis material, atau dimensi"
                        },
                        "quantity": {
                            "type": "STRING"
                        },
                        "estimatedCost": {
                            "type": "STRING",
                            "description": "Biaya (termasuk margin 35%) dalam format Rp X.XXX.XXX"
                        }
                    }
                }
            },
            "totalEstimatedBudget": {
                "type": "STRING",
                "description": "Total biaya (termasuk margin 35%) dalam format Rp X.XXX.XXX"
            },
            "safetyNotes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Daftar komprehensif peringatan keselamatan, bahaya, APD, dan catatan kritis dalam Bahasa Indonesia."
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> EstimationRequest {
        EstimationRequest {
            name: "Mesin Pencacah Plastik".to_string(),
            function: "Mencacah botol PET menjadi serpihan".to_string(),
            description: "Kapasitas 50 kg/jam, rangka baja siku".to_string(),
            budget: "Maksimal Rp 15.000.000".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_every_field_verbatim() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Nama Proyek: Mesin Pencacah Plastik"));
        assert!(prompt.contains("Fungsi Utama: Mencacah botol PET menjadi serpihan"));
        assert!(prompt.contains("Deskripsi: Kapasitas 50 kg/jam, rangka baja siku"));
        assert!(prompt.contains("Anggaran/Batasan: Maksimal Rp 15.000.000"));
    }

    #[test]
    fn test_prompt_defaults_blank_budget() {
        let mut req = request();
        req.budget = "  ".to_string();
        let prompt = build_prompt(&req);
        assert!(prompt.contains("Anggaran/Batasan: Tidak ditentukan"));
    }

    #[test]
    fn test_prompt_carries_fixed_instructions() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Gunakan Bahasa Indonesia."));
        assert!(prompt.contains("TAMBAHKAN MARGIN 35%"));
        assert!(prompt.contains("JANGAN berikan rencana fabrikasi"));
        assert!(prompt.contains("Alat Pelindung Diri (APD) yang wajib."));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(&request()), build_prompt(&request()));
    }

    #[test]
    fn test_schema_declares_every_report_field() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in [
            "refinedSummary",
            "complexityLevel",
            "billOfMaterials",
            "totalEstimatedBudget",
            "safetyNotes",
        ] {
            assert!(properties.contains_key(field), "missing {field}");
        }

        let item_properties = schema["properties"]["billOfMaterials"]["items"]["properties"]
            .as_object()
            .unwrap();
        for field in ["component", "specification", "quantity", "estimatedCost"] {
            assert!(item_properties.contains_key(field), "missing {field}");
        }
        assert_eq!(schema["properties"]["safetyNotes"]["items"]["type"], "STRING");
    }
}
