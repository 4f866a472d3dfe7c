//! Admission Calculator Common Library
//!
//! CLIとWeb(WASM)で共有される型・バリデーション・表示ルール・送信制御

pub mod types;
pub mod error;
pub mod validation;
pub mod format;
pub mod state;
pub mod parser;
pub mod controller;

pub use types::{
    CalculationRequest, CalculationResponse, ErrorBody, FormOptions, Metadata, ResultRow,
    ALL_SECTORS, CALCULATE_PATH, DEFAULT_TOP_N,
};
pub use error::{Error, Result};
pub use validation::{FormInput, parse_score, parse_top_n};
pub use format::{ProbabilityClass, RowView, format_decimal, format_probability};
pub use state::{Region, ResultsView, UiState, summary_line};
pub use parser::{parse_calculation_response, parse_error_message};
pub use controller::{CalculationClient, HttpReply, calculate, request_body, resolve, submit, transport_error};
