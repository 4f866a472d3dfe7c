use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdmissionCalcError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("引数が不正: {0}")]
    InvalidArgument(String),

    /// 計算APIの失敗（メッセージはそのまま表示）
    #[error(transparent)]
    Calculation(#[from] admission_calc_common::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AdmissionCalcError>;
