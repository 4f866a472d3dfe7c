//! フォーム入力のバリデーション
//!
//! 入力欄の生文字列から CalculationRequest を組み立てる。
//! 判定順序はスコア → グループで、最初の失敗で打ち切る。

use crate::error::{Error, Result, INVALID_SCORE_MESSAGE, MISSING_GROUP_MESSAGE};
use crate::types::{CalculationRequest, DEFAULT_TOP_N};

/// スコアの下限
pub const MIN_SCORE: f64 = 0.0;

/// スコアの上限
pub const MAX_SCORE: f64 = 700.0;

/// フォームの入力値（未加工）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub score: String,
    pub group: String,
    pub sector: String,
    pub top_n: String,
}

impl FormInput {
    pub fn new(
        score: impl Into<String>,
        group: impl Into<String>,
        sector: impl Into<String>,
        top_n: impl Into<String>,
    ) -> Self {
        Self {
            score: score.into(),
            group: group.into(),
            sector: sector.into(),
            top_n: top_n.into(),
        }
    }

    /// 入力を検証してリクエストを作る
    ///
    /// topN が数値として読めない場合は `DEFAULT_TOP_N` を使う
    pub fn validate(&self) -> Result<CalculationRequest> {
        self.validate_with_default_top_n(DEFAULT_TOP_N)
    }

    pub fn validate_with_default_top_n(&self, default_top_n: i64) -> Result<CalculationRequest> {
        let score = parse_score(&self.score)?;

        if self.group.is_empty() {
            return Err(Error::InvalidInput(MISSING_GROUP_MESSAGE.to_string()));
        }

        Ok(CalculationRequest {
            score,
            group: self.group.clone(),
            sector: self.sector.clone(),
            top_n: parse_top_n(&self.top_n).unwrap_or(default_top_n),
        })
    }
}

/// スコアを数値化して範囲チェック
///
/// 先頭の数値部分だけを読む（"650 points" は 650）。
/// 数値が無い入力と範囲外（0〜700の外）は同じメッセージで弾く
pub fn parse_score(raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidInput(INVALID_SCORE_MESSAGE.to_string());

    let score = leading_float(raw).ok_or_else(invalid)?;
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(invalid());
    }
    Ok(score)
}

/// topN を整数化
///
/// 先頭の整数部分だけを読む（"5.7" は 5、"5abc" は 5、"0x10" は 16）
pub fn parse_top_n(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let len = rest.chars().take_while(|c| c.is_digit(radix)).count();
    let n = i64::from_str_radix(&rest[..len], radix).ok()?;
    Some(if negative { -n } else { n })
}

/// 先頭から小数として読める最長部分を数値化
///
/// 符号、整数部、小数部、指数部の順に読み、続きの文字は無視する。
/// "Infinity" は無限大として読む（範囲チェックで弾かれる）
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        let sign = if s.starts_with('-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_len = digits(end);
    end += int_len;

    let mut frac_len = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_len = digits(end + 1);
        if int_len > 0 || frac_len > 0 {
            end += 1 + frac_len;
        }
    }
    if int_len == 0 && frac_len == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_len = digits(exp);
        if exp_len > 0 {
            end = exp + exp_len;
        }
    }

    s[..end].parse().ok()
}
