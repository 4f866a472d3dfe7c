//! Loading / Error / NoResults 表示

use leptos::prelude::*;
use admission_calc_common::{Region, UiState};

#[component]
pub fn StatusPanels(ui_state: ReadSignal<UiState>) -> impl IntoView {
    let hidden = move |region: Region| ui_state.with(|s| s.is_hidden(region));

    view! {
        <div
            id=Region::LoadingIndicator.element_id()
            class="loading-indicator"
            class:d-none=move || hidden(Region::LoadingIndicator)
        >
            <div class="spinner" />
            <p>"Calculating..."</p>
        </div>

        <div
            id=Region::ErrorContainer.element_id()
            class="alert alert-danger"
            class:d-none=move || hidden(Region::ErrorContainer)
        >
            <p id="errorMessage">
                {move || ui_state.with(|s| s.error_message().unwrap_or_default().to_string())}
            </p>
        </div>

        <div
            id=Region::NoResultsContainer.element_id()
            class="alert alert-info"
            class:d-none=move || hidden(Region::NoResultsContainer)
        >
            <p>"No specialties found for the selected score, group and sector."</p>
        </div>
    }
}
