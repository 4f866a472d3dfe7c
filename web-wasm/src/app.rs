//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::calculate::FetchClient;
use crate::components::{
    header::Header,
    calculator_form::CalculatorForm,
    status_panels::StatusPanels,
    results_table::ResultsTable,
};
use crate::page_options::load_form_options;
use admission_calc_common::{submit, FormInput, UiState};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let options = load_form_options();

    // 画面状態はこの1つだけ
    let (ui_state, set_ui_state) = signal(UiState::Idle);

    // 送信ハンドラ
    //
    // 送信ごとに独立したタスクになり、後に完了した方が状態を上書きする
    let on_submit = move |input: FormInput| {
        gloo::console::log!(format!(
            "submit: score={:?} group={:?} sector={:?} topN={:?}",
            input.score, input.group, input.sector, input.top_n
        ));

        spawn_local(async move {
            let client = FetchClient::new();
            let state = submit(&client, &input, || set_ui_state.set(UiState::Loading)).await;

            if let Some(message) = state.error_message() {
                gloo::console::error!(format!("calculation failed: {}", message));
            }
            set_ui_state.set(state);
        });
    };

    view! {
        <div class="container">
            <Header />

            <CalculatorForm options=options on_submit=on_submit />

            <StatusPanels ui_state=ui_state />

            <ResultsTable ui_state=ui_state />
        </div>
    }
}
