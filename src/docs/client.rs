//! Blocking HTTP client for the documentation API.
//!
//! One GET per operation, bounded by the configured timeout. No retries,
//! no caching.

use std::time::Duration;

use serde_json::Value;

use crate::config::ApiConfig;
use crate::docs::domain::DocDomain;
use crate::docs::model::{
    HandbookDoc, HandbookPayload, ReferenceDoc, ReferencePayload, SearchHit,
};
use crate::error::{Result, WpDocsError};
use crate::html;

const USER_AGENT: &str = "wpdocs-cli";

/// Clamp a requested result count to the API's accepted range.
#[must_use]
pub fn effective_per_page(requested: u32) -> u32 {
    requested.clamp(1, 100)
}

pub struct DocsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl DocsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| WpDocsError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search one documentation domain.
    ///
    /// Results come back in server order; an empty list is a normal
    /// outcome. With no filters, all of the domain's subtypes are
    /// requested.
    pub fn search(
        &self,
        domain: DocDomain,
        query: &str,
        subtypes: &[String],
        per_page: u32,
    ) -> Result<Vec<SearchHit>> {
        domain.validate_subtypes(subtypes)?;

        let subtype_param = if subtypes.is_empty() {
            domain.subtypes().join(",")
        } else {
            subtypes.join(",")
        };
        let url = format!(
            "{}/search?search={}&per_page={}&_fields=id,title,url,subtype&subtype={}",
            self.base_url,
            urlencoding::encode(query),
            effective_per_page(per_page),
            subtype_param
        );
        tracing::debug!(%domain, %url, "search request");

        let response = self.http.get(&url).send().map_err(map_transport)?;
        let status = response.status();
        let text = response.text().map_err(map_transport)?;

        if !status.is_success() {
            return Err(error_from_response(&text, status.as_u16()));
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|_| WpDocsError::Api("Unexpected API response".to_string()))?;
        if !body.is_array() {
            return Err(WpDocsError::Api(
                message_from(&body).unwrap_or_else(|| "Unexpected API response".to_string()),
            ));
        }

        Ok(serde_json::from_value(body)?)
    }

    /// Fetch a handbook page and convert its body to Markdown.
    pub fn handbook_content(&self, subtype: &str, id: u64) -> Result<HandbookDoc> {
        DocDomain::Handbook.validate_subtype(subtype)?;
        ensure_positive(id)?;

        let body = self.fetch_document(subtype, id, "id,title,content,link")?;
        let payload: HandbookPayload = serde_json::from_value(body)?;

        Ok(HandbookDoc {
            id: payload.id,
            title: payload.title.rendered,
            url: payload.link,
            content: html::html_to_markdown(&payload.content.rendered),
        })
    }

    /// Fetch a code reference entry and convert its excerpt to plain text.
    pub fn reference_content(&self, subtype: &str, id: u64) -> Result<ReferenceDoc> {
        DocDomain::CodeReference.validate_subtype(subtype)?;
        ensure_positive(id)?;

        let body = self.fetch_document(
            subtype,
            id,
            "id,title,excerpt,link,wp-parser-since,wp-parser-source-file",
        )?;
        let payload: ReferencePayload = serde_json::from_value(body)?;

        Ok(ReferenceDoc {
            id: payload.id,
            title: payload.title.rendered,
            url: payload.link,
            excerpt: html::html_to_text(&payload.excerpt.rendered),
            since: payload.since.into_iter().next(),
            source_file: payload.source_file.into_iter().next(),
        })
    }

    fn fetch_document(&self, subtype: &str, id: u64, fields: &str) -> Result<Value> {
        let url = format!("{}/{subtype}/{id}?_fields={fields}", self.base_url);
        tracing::debug!(%url, "content request");

        let response = self.http.get(&url).send().map_err(map_transport)?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WpDocsError::DocumentNotFound);
        }

        let text = response.text().map_err(map_transport)?;
        if !status.is_success() {
            return Err(error_from_response(&text, status.as_u16()));
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|_| WpDocsError::Api("Unexpected API response".to_string()))?;
        // A 2xx payload can still encode an error object
        if body.get("code").is_some() {
            return Err(WpDocsError::Api(
                message_from(&body).unwrap_or_else(|| "API error".to_string()),
            ));
        }

        Ok(body)
    }
}

fn ensure_positive(id: u64) -> Result<()> {
    if id == 0 {
        return Err(WpDocsError::InvalidInput(
            "id must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

fn map_transport(err: reqwest::Error) -> WpDocsError {
    if err.is_timeout() {
        WpDocsError::Network("request timed out".to_string())
    } else {
        WpDocsError::Network(err.to_string())
    }
}

/// Prefer the server-supplied message for a failed response, falling back
/// to the bare status code.
fn error_from_response(body: &str, status: u16) -> WpDocsError {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(message_from)
        .map_or(WpDocsError::Http(status), WpDocsError::Api)
}

fn message_from(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_page_clamps_to_inclusive_range() {
        assert_eq!(effective_per_page(0), 1);
        assert_eq!(effective_per_page(1), 1);
        assert_eq!(effective_per_page(5), 5);
        assert_eq!(effective_per_page(100), 100);
        assert_eq!(effective_per_page(101), 100);
        assert_eq!(effective_per_page(u32::MAX), 100);
    }

    #[test]
    fn failed_response_prefers_server_message() {
        let err = error_from_response(r#"{"code":"rest_invalid","message":"Bad request."}"#, 400);
        assert_eq!(err.to_string(), "Bad request.");
    }

    #[test]
    fn failed_response_without_message_reports_status() {
        let err = error_from_response("<html>gateway</html>", 502);
        assert_eq!(err.to_string(), "HTTP error 502");
    }

    #[test]
    fn zero_id_is_rejected_before_any_request() {
        let client = DocsClient::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout_secs: 1,
        })
        .unwrap();
        let err = client.reference_content("wp-parser-function", 0).unwrap_err();
        assert!(matches!(err, WpDocsError::InvalidInput(_)));
    }
}
