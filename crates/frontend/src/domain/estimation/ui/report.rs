//! Estimation - Report (summary, BOM table, safety notes, consultation)

use super::view_model::EstimationVm;
use contracts::estimation::{consultation_link, EstimationResult};
use leptos::prelude::*;

const WHATSAPP_ICON: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413z";

/// Rendered report for one successful estimation. Recreated wholesale
/// whenever the result signal changes.
#[component]
pub fn EstimationReport(vm: EstimationVm, result: EstimationResult) -> impl IntoView {
    let consult_hover = RwSignal::new(false);

    let open_consultation = {
        let result = result.clone();
        // The project name is read from the live form field at click time.
        move |_| {
            let link = consultation_link(&vm.name.get(), &result);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.open_with_url_and_target(&link, "_blank") {
                    log::warn!("failed to open consultation window: {e:?}");
                }
            }
        }
    };

    let bom_rows = result
        .bill_of_materials
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row_background = if index % 2 == 0 { "#1e293b" } else { "#172033" };
            view! {
                <tr style=format!("background-color: {row_background};")>
                    <td style="padding: 12px; border: 1px solid #334155; color: #f8fafc;">
                        {item.component.clone()}
                    </td>
                    <td style="padding: 12px; border: 1px solid #334155; color: #e2e8f0;">
                        {item.specification.clone()}
                    </td>
                </tr>
            }
        })
        .collect_view();

    let safety_notes = result
        .safety_notes
        .iter()
        .map(|note| {
            view! {
                <li style="margin-bottom: 0.8rem;">{note.clone()}</li>
            }
        })
        .collect_view();

    let consult_style = move || {
        let background = if consult_hover.get() { "#22c55e" } else { "#25D366" };
        format!(
            "background-color: {background}; color: #0f172a; border: none; \
             border-radius: 4px; padding: 16px 32px; font-size: 1.1rem; font-weight: bold; \
             cursor: pointer; display: inline-flex; align-items: center; gap: 0.8rem; \
             font-family: 'Fira Code', monospace; text-transform: uppercase; \
             box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.3); transition: background-color 0.2s;"
        )
    };

    view! {
        <div style="margin-top: 3rem; animation: fadeIn 0.5s ease-out;">
            <div style="display: flex; justify-content: space-between; align-items: center; \
                        margin-bottom: 1rem; border-left: 4px solid #38bdf8; padding-left: 1rem;">
                <div>
                    <h2 style="margin: 0; color: #f8fafc;">"Laporan Estimasi"</h2>
                    <span style="color: #94a3b8; font-size: 0.9rem;">
                        "Kompleksitas: "
                        <strong style="color: #38bdf8;">{result.complexity_level.clone()}</strong>
                    </span>
                </div>
                <div style="text-align: right;">
                    <div style="font-size: 0.9rem; color: #94a3b8;">"Total Est."</div>
                    <div style="font-size: 2rem; color: #38bdf8; font-weight: bold; \
                                font-family: 'Fira Code', monospace;">
                        {result.total_estimated_budget.clone()}
                    </div>
                </div>
            </div>

            <p style="color: #cbd5e1; line-height: 1.6; margin-bottom: 2rem; \
                      background-color: #1e293b; padding: 1.5rem; border-radius: 4px;">
                {result.refined_summary.clone()}
            </p>

            <h3 style="border-bottom: 1px solid #334155; padding-bottom: 0.5rem; \
                       margin-bottom: 1rem; color: #94a3b8; font-family: 'Fira Code', monospace;">
                "DAFTAR MATERIAL (BOM)"
            </h3>
            <div style="overflow-x: auto; margin-bottom: 2rem;">
                <table style="width: 100%; border-collapse: collapse; font-size: 0.95rem;">
                    <thead>
                        <tr style="background-color: #0f172a; text-align: left;">
                            <th style="padding: 12px; border: 1px solid #334155; color: #38bdf8;">
                                "Komponen"
                            </th>
                            <th style="padding: 12px; border: 1px solid #334155; color: #38bdf8;">
                                "Spesifikasi"
                            </th>
                        </tr>
                    </thead>
                    <tbody>{bom_rows}</tbody>
                </table>
            </div>

            <div style="margin-top: 2rem; background-color: #1e293b; padding: 1.5rem; \
                        border-radius: 4px; border: 1px solid rgba(252, 165, 165, 0.2);">
                <h3 style="border-bottom: 1px solid rgba(252, 165, 165, 0.3); \
                           padding-bottom: 0.5rem; margin-bottom: 1rem; color: #fca5a5; \
                           font-family: 'Fira Code', monospace; display: flex; \
                           align-items: center; gap: 0.5rem;">
                    <span>"⚠️"</span>
                    "PROTOKOL KESELAMATAN, BAHAYA & CATATAN KRITIS"
                </h3>
                <ul style="padding-left: 1.5rem; color: #fca5a5; line-height: 1.7; \
                           font-size: 1rem; margin: 0;">
                    {safety_notes}
                </ul>
            </div>

            <div style="margin-top: 3rem; text-align: center;">
                <button
                    style=consult_style
                    on:click=open_consultation
                    on:mouseover=move |_| consult_hover.set(true)
                    on:mouseout=move |_| consult_hover.set(false)
                >
                    <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                        <path d=WHATSAPP_ICON />
                    </svg>
                    "Konsultasi Sekarang"
                </button>
            </div>
        </div>
    }
}
