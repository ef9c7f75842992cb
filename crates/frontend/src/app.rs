use crate::domain::estimation::ui::EstimationPage;
use crate::shared::components::BlueprintBackground;
use leptos::prelude::*;

/// Root component. One page, no routing: the estimation form is the app.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <BlueprintBackground />
        <EstimationPage />
    }
}
