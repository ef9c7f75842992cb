//! Estimation - View (form and submit flow)

use super::model;
use super::report::EstimationReport;
use super::view_model::EstimationVm;
use crate::shared::components::ui::{Input, Textarea};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn EstimationPage() -> impl IntoView {
    let vm = EstimationVm::new();

    let handle_submit = move |_| {
        let request = vm.to_request();

        // A validation failure keeps whatever report is already on screen.
        if let Err(e) = request.validate() {
            vm.error.set(Some(e.user_message()));
            return;
        }

        vm.is_submitting.set(true);
        vm.error.set(None);
        vm.result.set(None);
        let generation = vm.generation.get() + 1;
        vm.generation.set(generation);

        spawn_local(async move {
            let outcome = model::submit(&request).await;

            // Only the latest submit may write state.
            if vm.generation.get_untracked() != generation {
                return;
            }

            match outcome {
                Ok(result) => vm.result.set(Some(result)),
                Err(e) => {
                    log::error!("estimation failed: {e}");
                    vm.error.set(Some(e.user_message()));
                }
            }
            vm.is_submitting.set(false);
        });
    };

    let button_style = move || {
        let (background, color, cursor) = if vm.is_submitting.get() {
            ("#334155", "#94a3b8", "not-allowed")
        } else {
            ("#38bdf8", "#0f172a", "pointer")
        };
        format!(
            "width: 100%; padding: 16px; background-color: {background}; color: {color}; \
             border: none; border-radius: 4px; font-size: 1.1rem; font-weight: bold; \
             cursor: {cursor}; transition: all 0.2s; font-family: 'Fira Code', monospace; \
             text-transform: uppercase;"
        )
    };

    view! {
        <div style="font-family: 'Inter', sans-serif; color: #e2e8f0; min-height: 100vh; \
                    padding: 2rem; position: relative; box-sizing: border-box;">
            <div style="max-width: 800px; margin: 0 auto; position: relative; z-index: 1;">
                <header style="margin-bottom: 3rem; text-align: center; \
                               border-bottom: 1px solid #334155; padding-bottom: 2rem;">
                    <h1 style="font-size: 2.5rem; margin: 0 0 0.5rem 0; color: #38bdf8; \
                               font-family: 'Fira Code', monospace; text-transform: uppercase;">
                        "Kajian Teknis"
                    </h1>
                    <p style="color: #94a3b8;">
                        "Masukkan ide Anda. Dapatkan rencana material dan estimasi biaya mendetail."
                    </p>
                </header>

                <div style="background-color: #1e293b; padding: 2rem; border-radius: 8px; \
                            border: 1px solid #334155; box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.5);">
                    <Input
                        label="Nama Mesin / Alat"
                        value=vm.name
                        placeholder="Contoh: Sistem Hidroponik Otomatis"
                    />

                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 1rem;">
                        <Input
                            label="Fungsi Utama"
                            value=vm.function
                            placeholder="Contoh: Monitor pH dan pompa nutrisi"
                        />
                        <Input
                            label="Anggaran / Batasan (Opsional)"
                            value=vm.budget
                            placeholder="Contoh: Di bawah Rp 2.000.000"
                        />
                    </div>

                    <Textarea
                        label="Deskripsi & Spesifikasi"
                        value=vm.description
                        placeholder="Jelaskan cara kerjanya, batasan ukuran, material yang disukai, dll."
                    />

                    {move || vm.error.get().map(|message| view! {
                        <div style="padding: 1rem; background-color: rgba(239, 68, 68, 0.2); \
                                    color: #fca5a5; border-radius: 4px; margin-bottom: 1.5rem; \
                                    border: 1px solid #ef4444;">
                            {message}
                        </div>
                    })}

                    <button
                        style=button_style
                        prop:disabled=move || vm.is_submitting.get()
                        on:click=handle_submit
                    >
                        {move || if vm.is_submitting.get() {
                            "Menganalisis Bahaya & Material..."
                        } else {
                            "Hitung Estimasi"
                        }}
                    </button>
                </div>

                {move || vm.result.get().map(|result| view! {
                    <EstimationReport vm=vm result=result />
                })}
            </div>
        </div>
    }
}
