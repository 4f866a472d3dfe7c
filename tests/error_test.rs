//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use admission_calc::config::{validate_base_url, Config};
use admission_calc::error::AdmissionCalcError;
use tempfile::tempdir;

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, AdmissionCalcError::JsonParse(_)));
}

/// 不正なURL
#[test]
fn test_invalid_base_url() {
    let err = validate_base_url("ftp://example.com").unwrap_err();
    assert!(matches!(err, AdmissionCalcError::Config(_)));
    assert!(err.to_string().contains("ftp://example.com"));
}

/// AdmissionCalcErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AdmissionCalcError::Config("テスト設定エラー".to_string()),
        AdmissionCalcError::InvalidArgument("topN".to_string()),
        AdmissionCalcError::Prompt("入力中断".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AdmissionCalcError = io_err.into();

    assert!(matches!(err, AdmissionCalcError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AdmissionCalcError = json_err.into();

    assert!(matches!(err, AdmissionCalcError::JsonParse(_)));
}

/// common::Errorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = admission_calc_common::Error::Request("server overloaded".to_string());
    let err: AdmissionCalcError = common_err.into();

    assert!(matches!(err, AdmissionCalcError::Calculation(_)));
    assert_eq!(format!("{}", err), "server overloaded");
}
