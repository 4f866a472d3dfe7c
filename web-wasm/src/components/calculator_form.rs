//! 入力フォームコンポーネント
//!
//! 入力値は未加工の文字列のまま `FormInput` にして親へ渡す（検証は common 側）。

use leptos::prelude::*;
use admission_calc_common::{FormInput, FormOptions, ALL_SECTORS, DEFAULT_TOP_N};

#[component]
pub fn CalculatorForm<F>(
    options: FormOptions,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(FormInput) + 'static + Clone,
{
    let (score, set_score) = signal(String::new());
    let (group, set_group) = signal(String::new());
    let (sector, set_sector) = signal(ALL_SECTORS.to_string());
    let (top_n, set_top_n) = signal(DEFAULT_TOP_N.to_string());

    let sector_choices = options.sector_choices();
    let groups = options.groups;

    view! {
        <form
            id="calculatorForm"
            class="calculator-form"
            on:submit={
                let on_submit = on_submit.clone();
                move |ev| {
                    ev.prevent_default();
                    on_submit(FormInput::new(
                        score.get(),
                        group.get(),
                        sector.get(),
                        top_n.get(),
                    ));
                }
            }
        >
            <div class="form-group">
                <label for="score">"Score (0-700)"</label>
                <input
                    type="text"
                    id="score"
                    inputmode="decimal"
                    placeholder="e.g. 650"
                    prop:value=move || score.get()
                    on:input=move |ev| {
                        set_score.set(event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="group">"Group"</label>
                <select
                    id="group"
                    prop:value=move || group.get()
                    on:change=move |ev| {
                        set_group.set(event_target_value(&ev));
                    }
                >
                    <option value="">"-- Select group --"</option>
                    {groups
                        .into_iter()
                        .map(|g| view! { <option value=g.clone()>{g.clone()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="sector">"Sector"</label>
                <select
                    id="sector"
                    prop:value=move || sector.get()
                    on:change=move |ev| {
                        set_sector.set(event_target_value(&ev));
                    }
                >
                    {sector_choices
                        .into_iter()
                        .map(|s| view! { <option value=s.clone()>{s.clone()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="topN">"Top N"</label>
                <input
                    type="number"
                    id="topN"
                    min="3"
                    max="20"
                    prop:value=move || top_n.get()
                    on:input=move |ev| {
                        set_top_n.set(event_target_value(&ev));
                    }
                />
            </div>

            <button type="submit" class="btn btn-primary">"Calculate"</button>
        </form>
    }
}
