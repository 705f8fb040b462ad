//! Aggregate View Commands
//!
//! Frontend bindings for the spending summary, overview, calendar, and
//! currency rates.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{invoke_command, to_args};
use crate::models::{CalendarView, ExpenseSummaryView, OverviewView, Rates};

#[derive(Serialize)]
struct ExpenseSummaryArgs<'a> {
    #[serde(rename = "creditFilter")]
    credit_filter: Option<&'a str>,
    #[serde(rename = "debitFilter")]
    debit_filter: Option<&'a str>,
}

pub async fn expense_summary(
    credit_filter: Option<&str>,
    debit_filter: Option<&str>,
) -> Result<ExpenseSummaryView, String> {
    let args = to_args(&ExpenseSummaryArgs { credit_filter, debit_filter })?;
    invoke_command("expense_summary", args).await
}

pub async fn load_overview() -> Result<OverviewView, String> {
    invoke_command("load_overview", JsValue::NULL).await
}

pub async fn calendar_index() -> Result<CalendarView, String> {
    invoke_command("calendar_index", JsValue::NULL).await
}

pub async fn fetch_rates() -> Result<Rates, String> {
    invoke_command("fetch_rates", JsValue::NULL).await
}
