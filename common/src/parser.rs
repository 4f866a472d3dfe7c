//! APIレスポンスパーサー
//!
//! HTTPステータスとボディ文字列から CalculationResponse を取り出す。
//! 2xx以外は `error` フィールドを、読めなければ汎用メッセージを使う。

use crate::error::{Error, Result, FALLBACK_REQUEST_MESSAGE};
use crate::types::{CalculationResponse, ErrorBody};

/// 2xx判定
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// レスポンスを解釈
///
/// # Arguments
/// * `status` - HTTPステータス
/// * `body` - レスポンスボディ
///
/// # Returns
/// * `Ok(CalculationResponse)` - 2xxかつJSONとして読めた
/// * `Err(Error::Request)` - 2xx以外
/// * `Err(Error::Transport)` - 2xxだがJSONが不正
pub fn parse_calculation_response(status: u16, body: &str) -> Result<CalculationResponse> {
    if !is_success(status) {
        return Err(Error::Request(parse_error_message(body)));
    }

    let response: CalculationResponse = serde_json::from_str(body)?;
    Ok(response)
}

/// エラーボディからメッセージを取り出す
pub fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_REQUEST_MESSAGE.to_string())
}
