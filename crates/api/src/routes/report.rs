//! Weekly report endpoints
//!
//! `report_page` serves the HTML shell with the initial data baked in;
//! `report_data` serves the same shape as JSON for the page's periodic
//! refresh. Both views are computed from a fresh event snapshot on every
//! request.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use chrono::Local;
use serde::Serialize;
use tabtally_domain::constants::DAY_LABEL_FORMAT;
use tabtally_domain::{round_minutes, TabTallyError, WeeklyReport};
use tracing::error;

use crate::context::AppContext;

const REPORT_TEMPLATE: &str = include_str!("../assets/report.html");
const INITIAL_DATA_PLACEHOLDER: &str = "__INITIAL_DATA__";

/// Wire shape shared by the page render and the refresh endpoint.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    /// Day labels in chronological order, e.g. "Mon 03 Jun".
    chart_labels: Vec<String>,
    /// Minutes per day, parallel to `chart_labels`.
    chart_data: Vec<f64>,
    /// Domains descending by total minutes; rank implied by position.
    top_sites: Vec<SiteEntry>,
}

#[derive(Debug, Serialize)]
struct SiteEntry {
    domain: String,
    total_minutes: f64,
}

impl From<WeeklyReport> for ReportResponse {
    fn from(report: WeeklyReport) -> Self {
        Self {
            chart_labels: report
                .daily
                .iter()
                .map(|d| d.day.format(DAY_LABEL_FORMAT).to_string())
                .collect(),
            chart_data: report.daily.iter().map(|d| d.total_minutes).collect(),
            top_sites: report
                .domains
                .into_iter()
                // Domain totals are carried unrounded until this point.
                .map(|d| SiteEntry {
                    domain: d.domain,
                    total_minutes: round_minutes(d.total_minutes),
                })
                .collect(),
        }
    }
}

/// JSON refresh endpoint polled by the report page.
pub async fn report_data(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<ReportResponse>, (StatusCode, String)> {
    let report = ctx.reports.weekly_report(Local::now()).await.map_err(internal_error)?;
    Ok(Json(ReportResponse::from(report)))
}

/// HTML report page with the initial dataset baked in.
pub async fn report_page(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let report = ctx.reports.weekly_report(Local::now()).await.map_err(internal_error)?;
    let initial = serde_json::to_string(&ReportResponse::from(report))
        .map_err(|err| internal_error(TabTallyError::Internal(err.to_string())))?;

    Ok(Html(REPORT_TEMPLATE.replace(INITIAL_DATA_PLACEHOLDER, &initial)))
}

fn internal_error(err: TabTallyError) -> (StatusCode, String) {
    error!(error = %err, "report request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_string())
}
