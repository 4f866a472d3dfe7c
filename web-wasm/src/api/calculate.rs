//! 計算API連携（fetch）
//!
//! `/api/calculate` へJSONをPOSTし、ステータスとボディをそのまま返す。
//! 解釈（エラーメッセージ抽出・空結果判定）は common 側で行う。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use admission_calc_common::{
    CalculationClient, HttpReply, Result, CALCULATE_PATH, transport_error,
};

/// fetch APIを使うクライアント
#[derive(Debug, Clone)]
pub struct FetchClient {
    url: String,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// 同一オリジンの `/api/calculate` を使う
    pub fn new() -> Self {
        Self::with_base_url("")
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            url: format!("{}{}", base_url.trim_end_matches('/'), CALCULATE_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CalculationClient for FetchClient {
    async fn post_calculation(&self, body: &str) -> Result<HttpReply> {
        post_json(&self.url, body)
            .await
            .map_err(|e| transport_error(js_error_message(&e)))
    }
}

/// JSON POST（共通処理）
async fn post_json(url: &str, body: &str) -> std::result::Result<HttpReply, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;

    Ok(HttpReply::new(resp.status(), text.as_string().unwrap_or_default()))
}

/// JS側の例外からメッセージを取り出す
///
/// `TypeError: Failed to fetch` などは message 部分だけを使う
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
