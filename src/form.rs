//! 対話式フォーム入力
//!
//! 入力値は検証せずに FormInput にする（検証は submit 側で行う）。

use crate::config::Config;
use crate::error::{AdmissionCalcError, Result};
use admission_calc_common::FormInput;
use dialoguer::Input;

/// 4項目を順に尋ねる
pub fn prompt_form(config: &Config) -> Result<FormInput> {
    let score = ask("Score (0-700)", None)?;
    let group = ask("Group", None)?;
    let sector = ask("Sector", Some(config.default_sector.clone()))?;
    let top_n = ask("Top N", Some(config.default_top_n.to_string()))?;

    Ok(FormInput::new(score.trim(), group.trim(), sector.trim(), top_n.trim()))
}

fn ask(prompt: &str, default: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
    if let Some(default) = default {
        input = input.default(default);
    }
    input
        .interact_text()
        .map_err(|e| AdmissionCalcError::Prompt(e.to_string()))
}

/// 引数で省略された項目を設定値で補う
pub fn form_from_args(
    config: &Config,
    score: String,
    group: Option<String>,
    sector: Option<String>,
    top_n: Option<String>,
) -> FormInput {
    FormInput::new(
        score,
        group.unwrap_or_default(),
        sector.unwrap_or_else(|| config.default_sector.clone()),
        top_n.unwrap_or_else(|| config.default_top_n.to_string()),
    )
}
