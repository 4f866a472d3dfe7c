//! reqwest による計算APIクライアント

use crate::error::{AdmissionCalcError, Result};
use admission_calc_common::{CalculationClient, HttpReply, CALCULATE_PATH, transport_error};
use reqwest::header::CONTENT_TYPE;
use std::time::{Duration, Instant};

pub struct HttpClient {
    client: reqwest::Client,
    url: String,
    verbose: bool,
}

impl HttpClient {
    pub fn new(base_url: &str, timeout: Option<Duration>, verbose: bool) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AdmissionCalcError::Config(format!("HTTPクライアント初期化失敗: {}", e)))?;

        Ok(Self {
            client,
            url: calculate_url(base_url),
            verbose,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CalculationClient for HttpClient {
    async fn post_calculation(&self, body: &str) -> admission_calc_common::Result<HttpReply> {
        if self.verbose {
            eprintln!("  POST {} {}", self.url, body);
        }
        let started = Instant::now();

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;

        if self.verbose {
            eprintln!("  HTTP {} ({}ms)", status, started.elapsed().as_millis());
        }

        Ok(HttpReply::new(status, text))
    }
}

/// ベースURL + /api/calculate
pub fn calculate_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), CALCULATE_PATH)
}
