//! フォーム送信の制御（CLI/WASM共通）
//!
//! 検証 -> Loading -> POST -> 解釈 の1サイクルを `submit` にまとめ、
//! 結果を新しい UiState として返す。通信部分は `CalculationClient` で差し替える。
//!
//! 送信ごとに独立して走り、後から完了したものが画面を上書きする。
//! 取り消しや順序トークンは持たない。

use crate::error::{Error, Result};
use crate::parser::parse_calculation_response;
use crate::state::UiState;
use crate::types::{CalculationRequest, CalculationResponse};
use crate::validation::FormInput;

/// HTTPレスポンス（ステータスとボディのみ）
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// `/api/calculate` への送信手段
///
/// 実装は `Content-Type: application/json` でPOSTし、ステータスとボディを返す。
/// 到達不能などの失敗は `Error::Transport` にする。
#[allow(async_fn_in_trait)]
pub trait CalculationClient {
    async fn post_calculation(&self, body: &str) -> Result<HttpReply>;
}

/// リクエストボディ（JSON）
pub fn request_body(request: &CalculationRequest) -> Result<String> {
    Ok(serde_json::to_string(request)?)
}

/// 1回分のPOSTとレスポンス解釈
pub async fn calculate<C: CalculationClient>(
    client: &C,
    request: &CalculationRequest,
) -> Result<CalculationResponse> {
    let body = request_body(request)?;
    let reply = client.post_calculation(&body).await?;
    parse_calculation_response(reply.status, &reply.body)
}

/// フォーム送信
///
/// # Arguments
/// * `client` - 送信手段
/// * `input` - フォームの生入力
/// * `on_loading` - 検証通過後、送信直前に1度だけ呼ばれる（Loading表示用）
///
/// # Returns
/// 送信後に表示すべき UiState（Results / NoResults / Error）
pub async fn submit<C, F>(client: &C, input: &FormInput, on_loading: F) -> UiState
where
    C: CalculationClient,
    F: FnOnce(),
{
    let request = match input.validate() {
        Ok(request) => request,
        Err(e) => return UiState::Error(e.to_string()),
    };

    on_loading();

    resolve(calculate(client, &request).await)
}

/// 計算結果を画面状態へ
pub fn resolve(result: Result<CalculationResponse>) -> UiState {
    match result {
        Ok(response) => UiState::from_response(response),
        Err(e) => UiState::Error(e.to_string()),
    }
}

/// 例外的な失敗を Transport として包む
pub fn transport_error(message: impl std::fmt::Display) -> Error {
    Error::Transport(message.to_string())
}
