use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::entry::ScheduleEntry;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request could not complete: {0}")]
    Network(String),
    #[error("server error{}: {message}", status_suffix(.status))]
    Server {
        status: Option<u16>,
        message: String,
    },
    #[error("no schedule endpoint configured")]
    Unconfigured,
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" {}", code)).unwrap_or_default()
}

/// Anything that can hand back the raw entries of one sheet.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    async fn fetch(&self, sheet: &str) -> Result<Vec<ScheduleEntry>, LoadError>;
}

pub struct HttpScheduleSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpScheduleSource {
    pub fn new(endpoint: String, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LoadError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    async fn fetch(&self, sheet: &str) -> Result<Vec<ScheduleEntry>, LoadError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("sheet", sheet)])
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        interpret_response(status, &text)
    }
}

/// Stands in when no endpoint is known; every fetch fails so the loader degrades.
pub struct UnconfiguredSource;

#[async_trait]
impl ScheduleSource for UnconfiguredSource {
    async fn fetch(&self, _sheet: &str) -> Result<Vec<ScheduleEntry>, LoadError> {
        Err(LoadError::Unconfigured)
    }
}

#[derive(Debug, Deserialize)]
struct SchedulePayload {
    schedule: Option<Vec<ScheduleEntry>>,
    error: Option<String>,
    details: Option<String>,
}

pub fn interpret_response(status: StatusCode, body: &str) -> Result<Vec<ScheduleEntry>, LoadError> {
    let parsed: Result<SchedulePayload, _> = serde_json::from_str(body);

    if !status.is_success() {
        let message = match parsed {
            Ok(SchedulePayload { error: Some(error), details, .. }) => with_details(error, details),
            _ => format!("Request failed with status {}", status),
        };
        return Err(LoadError::Server {
            status: Some(status.as_u16()),
            message,
        });
    }

    let payload = parsed.map_err(|e| LoadError::Server {
        status: Some(status.as_u16()),
        message: format!("Failed to parse JSON: {}", e),
    })?;

    if let Some(error) = payload.error {
        return Err(LoadError::Server {
            status: Some(status.as_u16()),
            message: with_details(error, payload.details),
        });
    }

    payload.schedule.ok_or_else(|| LoadError::Server {
        status: Some(status.as_u16()),
        message: "Response has neither schedule nor error".to_string(),
    })
}

fn with_details(error: String, details: Option<String>) -> String {
    match details {
        Some(details) if !details.trim().is_empty() => format!("{} ({})", error, details.trim()),
        _ => error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_schedule_body() {
        let body = r#"{"schedule":[{"date":"2026-01-13","time_start":"09:00","time_end":"10:30",
            "subject":"Физика","teacher":"","room":"","group":"ИТ-102","type":"Лекция"}]}"#;
        let entries = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject, "Физика");
    }

    #[test]
    fn empty_schedule_is_not_an_error() {
        let entries = interpret_response(StatusCode::OK, r#"{"schedule":[]}"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn error_field_is_server_error_even_with_ok_status() {
        let err = interpret_response(
            StatusCode::OK,
            r#"{"error":"Google Sheets API key not configured"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            LoadError::Server {
                status: Some(200),
                message: "Google Sheets API key not configured".to_string(),
            }
        );
    }

    #[test]
    fn non_success_status_keeps_error_details() {
        let err = interpret_response(
            StatusCode::BAD_GATEWAY,
            r#"{"error":"Failed to fetch Google Sheets data","details":"quota"}"#,
        )
        .unwrap_err();
        match err {
            LoadError::Server { status, message } => {
                assert_eq!(status, Some(502));
                assert_eq!(message, "Failed to fetch Google Sheets data (quota)");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_success_status_without_json() {
        let err = interpret_response(StatusCode::INTERNAL_SERVER_ERROR, "oops").unwrap_err();
        assert!(matches!(err, LoadError::Server { status: Some(500), .. }));
    }

    #[test]
    fn malformed_json_is_server_error() {
        let err = interpret_response(StatusCode::OK, "<html>").unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }

    #[test]
    fn body_without_known_fields_is_server_error() {
        let err = interpret_response(StatusCode::OK, r#"{"rows":[]}"#).unwrap_err();
        assert!(err.to_string().contains("neither schedule nor error"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_failure() {
        let source = HttpScheduleSource::new(
            "http://127.0.0.1:9/schedule".to_string(),
            Some(Duration::from_secs(2)),
        )
        .unwrap();
        let err = source.fetch("any").await.unwrap_err();
        assert!(matches!(err, LoadError::Network(_)));
    }
}
