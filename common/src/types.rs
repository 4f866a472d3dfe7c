//! リクエスト/レスポンスの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CalculationRequest: `/api/calculate` へ送るボディ
//! - CalculationResponse: 成功時のボディ（results + metadata）
//! - ErrorBody: 2xx以外のときのボディ
//! - FormOptions: ホストページが埋め込むグループ/セクター一覧

use serde::{Deserialize, Deserializer, Serialize};

/// 計算APIのパス
pub const CALCULATE_PATH: &str = "/api/calculate";

/// topN のデフォルト（サーバー側の既定値と同じ）
pub const DEFAULT_TOP_N: i64 = 10;

/// 全セクター指定
pub const ALL_SECTORS: &str = "All";

/// 計算リクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub score: f64,
    pub group: String,
    pub sector: String,
    pub top_n: i64,
}

/// 計算結果の1行
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub specialty: String,

    /// 合格確率（0〜100）。履歴データ不足ならnull
    #[serde(default)]
    pub probability: Option<f64>,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub mean: Option<f64>,

    #[serde(default)]
    pub std_dev: Option<f64>,

    /// 件数。小数や負数が来てもそのまま表示する
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_points: f64,
}

/// レスポンスのメタデータ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub score: f64,
    pub group: String,
    pub sector: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_specialties: Option<u32>,
}

/// 計算レスポンス（成功時）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub results: Vec<ResultRow>,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

/// `null` を欠損と同じく既定値として読む
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// エラーレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
}

/// フォームの選択肢（ホストページから受け取る）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    pub groups: Vec<String>,
    pub sectors: Vec<String>,
}

impl FormOptions {
    /// セクター一覧（先頭に "All" を補う）
    pub fn sector_choices(&self) -> Vec<String> {
        let mut choices = vec![ALL_SECTORS.to_string()];
        choices.extend(
            self.sectors
                .iter()
                .filter(|s| s.as_str() != ALL_SECTORS)
                .cloned(),
        );
        choices
    }
}
