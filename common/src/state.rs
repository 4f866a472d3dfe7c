//! 画面状態
//!
//! 表示領域ごとの表示/非表示フラグを個別に持たず、`UiState` ひとつから
//! 各領域の表示可否と結果テーブルの中身を導出する。

use crate::format::RowView;
use crate::types::{CalculationResponse, Metadata};

/// 表示領域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    LoadingIndicator,
    ResultsContainer,
    ErrorContainer,
    NoResultsContainer,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::LoadingIndicator,
        Region::ResultsContainer,
        Region::ErrorContainer,
        Region::NoResultsContainer,
    ];

    /// ホストページ上の要素ID
    pub fn element_id(&self) -> &'static str {
        match self {
            Region::LoadingIndicator => "loadingIndicator",
            Region::ResultsContainer => "resultsContainer",
            Region::ErrorContainer => "errorContainer",
            Region::NoResultsContainer => "noResultsContainer",
        }
    }
}

/// 画面状態（常にどれか1つ）
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Results(CalculationResponse),
    /// 結果0件（サーバーが返したメタデータは保持する）
    NoResults(Metadata),
    Error(String),
}

impl UiState {
    /// 成功レスポンスから状態を決める（空ならNoResults）
    pub fn from_response(response: CalculationResponse) -> Self {
        if response.results.is_empty() {
            UiState::NoResults(response.metadata)
        } else {
            UiState::Results(response)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UiState::Idle => "idle",
            UiState::Loading => "loading",
            UiState::Results(_) => "results",
            UiState::NoResults(_) => "no-results",
            UiState::Error(_) => "error",
        }
    }

    /// 表示中の領域（Idleなら無し）
    pub fn visible_region(&self) -> Option<Region> {
        match self {
            UiState::Idle => None,
            UiState::Loading => Some(Region::LoadingIndicator),
            UiState::Results(_) => Some(Region::ResultsContainer),
            UiState::NoResults(_) => Some(Region::NoResultsContainer),
            UiState::Error(_) => Some(Region::ErrorContainer),
        }
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible_region() == Some(region)
    }

    /// "hidden" フラグ（d-noneクラス）が立つか
    pub fn is_hidden(&self, region: Region) -> bool {
        !self.is_visible(region)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            UiState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// 結果テーブルの描画内容（Results以外はNone）
    pub fn results_view(&self) -> Option<ResultsView> {
        match self {
            UiState::Results(response) => Some(ResultsView::from(response)),
            _ => None,
        }
    }
}

/// 結果テーブル（サマリー + 行）
///
/// 毎回レスポンスから作り直すので、同じレスポンスを2回描画しても行は増えない
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub summary: String,
    pub rows: Vec<RowView>,
}

impl From<&CalculationResponse> for ResultsView {
    fn from(response: &CalculationResponse) -> Self {
        Self {
            summary: summary_line(response),
            rows: response.results.iter().map(RowView::from).collect(),
        }
    }
}

/// "Showing N results for score S, group G, sector X."
pub fn summary_line(response: &CalculationResponse) -> String {
    let metadata = &response.metadata;
    format!(
        "Showing {} results for score {}, group {}, sector {}.",
        response.results.len(),
        metadata.score,
        metadata.group,
        metadata.sector
    )
}
