//! 画面状態のターミナル出力
//!
//! UiState -> 文字列 の1関数で、表示内容はすべて状態から導出する。

use admission_calc_common::{CalculationResponse, ResultsView, RowView, UiState};
use serde_json::json;

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json", s)),
        }
    }
}

pub const LOADING_TEXT: &str = "Calculating...";
pub const NO_RESULTS_TEXT: &str = "No specialties found for the selected score, group and sector.";

const HEADERS: [&str; 7] = ["Specialty", "Probability", "Class", "Status", "Mean", "Std Dev", "Data Points"];

pub fn render(state: &UiState, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => render_text(state),
        OutputFormat::Json => render_json(state),
    }
}

/// 表形式
pub fn render_text(state: &UiState) -> String {
    match state {
        UiState::Idle => String::new(),
        UiState::Loading => LOADING_TEXT.to_string(),
        UiState::NoResults(_) => NO_RESULTS_TEXT.to_string(),
        UiState::Error(message) => format!("Error: {}", message),
        UiState::Results(response) => {
            let view = ResultsView::from(response);
            let mut out = String::new();
            out.push_str(&view.summary);
            out.push_str("\n\n");
            out.push_str(&render_table(&view.rows));
            if let Some(footer) = metadata_footer(response) {
                out.push('\n');
                out.push_str(&footer);
            }
            out
        }
    }
}

/// JSON形式
pub fn render_json(state: &UiState) -> String {
    let value = match state {
        UiState::Results(response) => json!(response),
        UiState::NoResults(metadata) => json!({ "results": [], "metadata": metadata }),
        UiState::Error(message) => json!({ "error": message }),
        UiState::Idle | UiState::Loading => json!({ "state": state.as_str() }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}

fn cells(row: &RowView) -> [String; 7] {
    [
        row.specialty.clone(),
        row.probability.clone(),
        row.probability_class.as_str().to_string(),
        row.status.clone(),
        row.mean.clone(),
        row.std_dev.clone(),
        row.data_points.clone(),
    ]
}

/// 罫線なしの桁揃えテーブル（行順はレスポンスのまま）
pub fn render_table(rows: &[RowView]) -> String {
    let body: Vec<[String; 7]> = rows.iter().map(cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &body {
        for (w, cell) in widths.iter_mut().zip(cells.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = vec![format_line(&header[..]), format_line(&separator[..])];
    lines.extend(body.iter().map(|cells| format_line(&cells[..])));
    lines.join("\n")
}

/// topN / totalSpecialties があれば補足行
fn metadata_footer(response: &CalculationResponse) -> Option<String> {
    let metadata = &response.metadata;
    match (metadata.top_n, metadata.total_specialties) {
        (None, None) => None,
        (top_n, total) => {
            let mut parts = Vec::new();
            if let Some(n) = top_n {
                parts.push(format!("topN={}", n));
            }
            if let Some(t) = total {
                parts.push(format!("totalSpecialties={}", t));
            }
            Some(format!("({})", parts.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admission_calc_common::{Metadata, ResultRow};

    fn response() -> CalculationResponse {
        CalculationResponse {
            results: vec![
                ResultRow {
                    specialty: "Cardiology".into(),
                    probability: Some(87.5),
                    status: "OK".into(),
                    mean: Some(610.0),
                    std_dev: Some(20.0),
                    data_points: 12.0,
                },
                ResultRow {
                    specialty: "Surgery".into(),
                    probability: None,
                    status: "Insufficient Data".into(),
                    mean: None,
                    std_dev: None,
                    data_points: 1.0,
                },
            ],
            metadata: Metadata {
                score: 650.0,
                group: "G1".into(),
                sector: "All".into(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_results_text() {
        let text = render_text(&UiState::Results(response()));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Showing 2 results for score 650, group G1, sector All.");
        assert!(lines[2].starts_with("Specialty"));
        assert!(lines[3].starts_with("---"));
        assert!(lines[4].starts_with("Cardiology"));
        assert!(lines[4].contains("87.50%"));
        assert!(lines[4].contains("high"));
        assert!(lines[5].starts_with("Surgery"));
        assert!(lines[5].contains("N/A"));
        assert!(lines[5].contains("insufficient-data"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_render_table_columns_aligned() {
        let view = ResultsView::from(&response());
        let table = render_table(&view.rows);
        let lines: Vec<&str> = table.lines().collect();
        let col = lines[0].find("Probability").unwrap();
        assert_eq!(&lines[2][col..col + 6], "87.50%");
        assert_eq!(&lines[3][col..col + 3], "N/A");
    }

    #[test]
    fn test_render_footer() {
        let mut r = response();
        r.metadata.top_n = Some(5);
        r.metadata.total_specialties = Some(2);
        let text = render_text(&UiState::Results(r));
        assert!(text.ends_with("(topN=5, totalSpecialties=2)"));
    }

    #[test]
    fn test_render_other_states() {
        assert_eq!(render_text(&UiState::Idle), "");
        assert_eq!(render_text(&UiState::Loading), LOADING_TEXT);
        assert_eq!(render_text(&UiState::NoResults(Metadata::default())), NO_RESULTS_TEXT);
        assert_eq!(
            render_text(&UiState::Error("server overloaded".into())),
            "Error: server overloaded"
        );
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&UiState::Error("boom".into()))).unwrap();
        assert_eq!(json["error"], "boom");

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&UiState::Results(response()))).unwrap();
        assert_eq!(json["results"][0]["specialty"], "Cardiology");
        assert_eq!(json["results"][1]["stdDev"], serde_json::Value::Null);
        assert_eq!(json["metadata"]["group"], "G1");

        let metadata = Metadata {
            score: 650.0,
            group: "G1".into(),
            sector: "All".into(),
            top_n: Some(5),
            total_specialties: Some(0),
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&UiState::NoResults(metadata))).unwrap();
        assert_eq!(json["results"].as_array().map(|a| a.len()), Some(0));
        assert_eq!(json["metadata"]["group"], "G1");
        assert_eq!(json["metadata"]["score"], 650.0);
        assert_eq!(json["metadata"]["totalSpecialties"], 0);
    }
}
