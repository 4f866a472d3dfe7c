//! 結果行の表示ルール
//!
//! 確率は小数2桁の百分率、しきい値で色分けクラスを決める。
//! 平均・標準偏差は小数2桁、nullは "N/A"。

use crate::types::ResultRow;

/// 値が無いときの表示
pub const NOT_AVAILABLE: &str = "N/A";

/// 「高」判定の下限（以上）
pub const HIGH_THRESHOLD: f64 = 75.0;

/// 「中」判定の下限（以上）
pub const MEDIUM_THRESHOLD: f64 = 40.0;

/// 確率の色分けクラス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityClass {
    High,
    Medium,
    Low,
    InsufficientData,
}

impl ProbabilityClass {
    pub fn classify(probability: Option<f64>) -> Self {
        match probability {
            None => ProbabilityClass::InsufficientData,
            Some(p) if p >= HIGH_THRESHOLD => ProbabilityClass::High,
            Some(p) if p >= MEDIUM_THRESHOLD => ProbabilityClass::Medium,
            Some(_) => ProbabilityClass::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProbabilityClass::High => "high",
            ProbabilityClass::Medium => "medium",
            ProbabilityClass::Low => "low",
            ProbabilityClass::InsufficientData => "insufficient-data",
        }
    }

    /// スタイルシート上のクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            ProbabilityClass::High => "probability-high",
            ProbabilityClass::Medium => "probability-medium",
            ProbabilityClass::Low => "probability-low",
            ProbabilityClass::InsufficientData => "insufficient-data",
        }
    }
}

/// 表示用に整形済みの1行
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub specialty: String,
    pub probability: String,
    pub probability_class: ProbabilityClass,
    pub status: String,
    pub mean: String,
    pub std_dev: String,
    pub data_points: String,
}

impl From<&ResultRow> for RowView {
    fn from(row: &ResultRow) -> Self {
        Self {
            specialty: row.specialty.clone(),
            probability: format_probability(row.probability),
            probability_class: ProbabilityClass::classify(row.probability),
            status: row.status.clone(),
            mean: format_decimal(row.mean),
            std_dev: format_decimal(row.std_dev),
            data_points: row.data_points.to_string(),
        }
    }
}

/// 確率を "87.50%" 形式に
pub fn format_probability(probability: Option<f64>) -> String {
    match probability {
        Some(p) => format!("{:.2}%", p),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// 小数2桁、nullは "N/A"
pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(ProbabilityClass::classify(Some(75.0)), ProbabilityClass::High);
        assert_eq!(ProbabilityClass::classify(Some(99.99)), ProbabilityClass::High);
        assert_eq!(ProbabilityClass::classify(Some(74.999)), ProbabilityClass::Medium);
        assert_eq!(ProbabilityClass::classify(Some(40.0)), ProbabilityClass::Medium);
        assert_eq!(ProbabilityClass::classify(Some(39.999)), ProbabilityClass::Low);
        assert_eq!(ProbabilityClass::classify(Some(0.01)), ProbabilityClass::Low);
        assert_eq!(ProbabilityClass::classify(None), ProbabilityClass::InsufficientData);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ProbabilityClass::High.as_str(), "high");
        assert_eq!(ProbabilityClass::Medium.as_str(), "medium");
        assert_eq!(ProbabilityClass::Low.as_str(), "low");
        assert_eq!(ProbabilityClass::InsufficientData.as_str(), "insufficient-data");
        assert_eq!(ProbabilityClass::High.css_class(), "probability-high");
        assert_eq!(ProbabilityClass::InsufficientData.css_class(), "insufficient-data");
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(Some(87.5)), "87.50%");
        assert_eq!(format_probability(Some(0.01)), "0.01%");
        assert_eq!(format_probability(Some(100.0)), "100.00%");
        assert_eq!(format_probability(None), "N/A");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(Some(610.256)), "610.26");
        assert_eq!(format_decimal(Some(20.0)), "20.00");
        assert_eq!(format_decimal(None), "N/A");
    }

    #[test]
    fn test_row_view_from_result_row() {
        let row = ResultRow {
            specialty: "Cardiology".to_string(),
            probability: Some(42.0),
            status: "OK".to_string(),
            mean: Some(640.0),
            std_dev: Some(12.346),
            data_points: 8.0,
        };
        let view = RowView::from(&row);
        assert_eq!(view.specialty, "Cardiology");
        assert_eq!(view.probability, "42.00%");
        assert_eq!(view.probability_class, ProbabilityClass::Medium);
        assert_eq!(view.status, "OK");
        assert_eq!(view.mean, "640.00");
        assert_eq!(view.std_dev, "12.35");
        assert_eq!(view.data_points, "8");
    }

    #[test]
    fn test_row_view_insufficient_data() {
        let row = ResultRow {
            specialty: "Surgery".to_string(),
            status: "Insufficient Data".to_string(),
            data_points: 1.0,
            ..Default::default()
        };
        let view = RowView::from(&row);
        assert_eq!(view.probability, "N/A");
        assert_eq!(view.probability_class, ProbabilityClass::InsufficientData);
        assert_eq!(view.mean, "N/A");
        assert_eq!(view.std_dev, "N/A");
        assert_eq!(view.data_points, "1");
    }
}
