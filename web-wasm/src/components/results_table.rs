//! 結果テーブルコンポーネント

use leptos::prelude::*;
use admission_calc_common::{Region, RowView, UiState};

/// テーブル見出し
const COLUMNS: [&str; 6] = ["Specialty", "Probability", "Status", "Mean", "Std Dev", "Data Points"];

#[component]
pub fn ResultsTable(ui_state: ReadSignal<UiState>) -> impl IntoView {
    // 状態が変わるたびに行を作り直す（前回の行は残らない）
    let results = Memo::new(move |_| ui_state.with(|s| s.results_view()));

    view! {
        <div
            id=Region::ResultsContainer.element_id()
            class="results-container"
            class:d-none=move || ui_state.with(|s| s.is_hidden(Region::ResultsContainer))
        >
            <p id="resultsSummary" class="results-summary">
                {move || results.with(|r| r.as_ref().map(|r| r.summary.clone()).unwrap_or_default())}
            </p>
            <table class="table results-table">
                <thead>
                    <tr>
                        {COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody id="resultsTableBody">
                    {move || {
                        results
                            .get()
                            .map(|r| r.rows)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|row| view! { <ResultRowView row=row /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ResultRowView(row: RowView) -> impl IntoView {
    view! {
        <tr>
            <td>{row.specialty}</td>
            <td class=row.probability_class.css_class()>{row.probability}</td>
            <td>{row.status}</td>
            <td>{row.mean}</td>
            <td>{row.std_dev}</td>
            <td>{row.data_points}</td>
        </tr>
    }
}
