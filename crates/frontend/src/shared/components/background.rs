use leptos::prelude::*;

/// Fixed full-viewport blueprint grid behind the page content.
#[component]
pub fn BlueprintBackground() -> impl IntoView {
    view! {
        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; \
                    background-color: #0f172a; \
                    background-image: linear-gradient(rgba(56, 189, 248, 0.05) 1px, transparent 1px), \
                    linear-gradient(90deg, rgba(56, 189, 248, 0.05) 1px, transparent 1px); \
                    background-size: 40px 40px;"></div>
    }
}
