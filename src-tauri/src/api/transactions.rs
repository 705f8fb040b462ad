//! Transaction & balance endpoints

use reqwest::Method;
use serde::Deserialize;

use super::ApiClient;
use crate::domain::csv_import::ValidatedCsv;
use crate::domain::{Transaction, TransactionDraft};
use crate::error::{AppError, Result};

#[derive(Debug, Deserialize)]
struct BalanceResponse {
    #[serde(default)]
    balance: f64,
}

impl ApiClient {
    pub async fn balance(&self, token: &str) -> Result<f64> {
        let resp: BalanceResponse = self
            .send_json(self.request(Method::GET, "/balances/user", Some(token)))
            .await?;
        Ok(resp.balance)
    }

    pub async fn transactions(
        &self,
        token: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<Transaction>> {
        let mut req = self.request(Method::GET, "/transactions/user", Some(token));
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date {
            query.push(("start_date", start));
        }
        if let Some(end) = end_date {
            query.push(("end_date", end));
        }
        if !query.is_empty() {
            req = req.query(&query);
        }
        self.send_json(req).await
    }

    pub async fn create_transaction(&self, token: &str, draft: &TransactionDraft) -> Result<Transaction> {
        self.send_json(self.request(Method::POST, "/transactions", Some(token)).json(draft))
            .await
    }

    pub async fn update_transaction(
        &self,
        token: &str,
        id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction> {
        self.send_json(
            self.request(Method::PUT, &format!("/transactions/{}", id), Some(token))
                .json(draft),
        )
        .await
    }

    pub async fn delete_transaction(&self, token: &str, id: &str) -> Result<()> {
        self.send_unit(self.request(Method::DELETE, &format!("/transactions/{}", id), Some(token)))
            .await
    }

    /// Upload a validated import file as multipart form data.
    pub async fn upload_csv(&self, token: &str, csv: &ValidatedCsv) -> Result<()> {
        let part = reqwest::multipart::Part::bytes(csv.bytes.clone())
            .file_name(csv.file_name.clone())
            .mime_str("text/csv")
            .map_err(|e| AppError::Validation(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.send_unit(
            self.request(Method::POST, "/transactions/uploadCSV", Some(token))
                .multipart(form),
        )
        .await
    }

    /// Fetch the PDF report for a date range.
    pub async fn report_pdf(&self, token: &str, start_date: &str, end_date: &str) -> Result<Vec<u8>> {
        self.send_bytes(
            self.request(Method::GET, "/transactions/report", Some(token))
                .query(&[("startDate", start_date), ("endDate", end_date)]),
        )
        .await
    }
}
