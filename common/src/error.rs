//! エラー型定義
//!
//! どの種類のエラーも最終的に `UiState::Error` の文言になるため、
//! Display はユーザー向けメッセージそのものを返す。

use thiserror::Error;

/// 入力値不正（スコア）
pub const INVALID_SCORE_MESSAGE: &str = "Please enter a valid score between 0 and 700.";

/// 入力値不正（グループ未選択）
pub const MISSING_GROUP_MESSAGE: &str = "Please select a group.";

/// サーバーが `error` を返さなかった場合の汎用メッセージ
pub const FALLBACK_REQUEST_MESSAGE: &str = "An error occurred during calculation.";

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// クライアント側バリデーション失敗（通信は発生しない）
    #[error("{0}")]
    InvalidInput(String),

    /// サーバーが2xx以外を返した
    #[error("{0}")]
    Request(String),

    /// 通信失敗・JSON不正など
    #[error("{0}")]
    Transport(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Transport(e.to_string())
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
