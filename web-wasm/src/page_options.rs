//! ホストページが埋め込むフォーム選択肢の読み込み
//!
//! `<script id="calculator-options" type="application/json">` の中身:
//! `{"groups": [...], "sectors": [...]}`

use admission_calc_common::FormOptions;

pub const OPTIONS_ELEMENT_ID: &str = "calculator-options";

/// ページから選択肢を読む（無い・壊れている場合は空）
pub fn load_form_options() -> FormOptions {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(OPTIONS_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(text) = text else {
        gloo::console::warn!(format!("#{} not found; group list is empty", OPTIONS_ELEMENT_ID));
        return FormOptions::default();
    };

    match parse_form_options(&text) {
        Ok(options) => options,
        Err(e) => {
            gloo::console::error!(format!("failed to parse #{}: {}", OPTIONS_ELEMENT_ID, e));
            FormOptions::default()
        }
    }
}

pub fn parse_form_options(text: &str) -> Result<FormOptions, serde_json::Error> {
    serde_json::from_str(text.trim())
}
