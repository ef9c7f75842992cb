use leptos::prelude::*;

const LABEL_STYLE: &str = "display: block; color: #94a3b8; margin-bottom: 0.5rem; \
     font-size: 0.9rem; font-family: 'Fira Code', monospace; \
     text-transform: uppercase; letter-spacing: 1px;";

const TEXTAREA_STYLE: &str = "width: 100%; padding: 12px; background-color: #1e293b; \
     border: 1px solid #334155; border-radius: 4px; color: #e2e8f0; \
     font-family: inherit; font-size: 1rem; outline: none; box-sizing: border-box; \
     min-height: 100px; resize: vertical;";

/// Labeled multi-line text field in the blueprint theme
#[component]
pub fn Textarea(
    /// Label text above the field
    #[prop(into)]
    label: String,
    /// Two-way bound value
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();

    view! {
        <div style="margin-bottom: 1.5rem;">
            <label style=LABEL_STYLE>{label}</label>
            <textarea
                style=TEXTAREA_STYLE
                prop:value=move || value.get()
                placeholder=textarea_placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
