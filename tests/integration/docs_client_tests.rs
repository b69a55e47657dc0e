//! DocsClient against a mock HTTP server.

use httpmock::prelude::*;
use serde_json::json;

use wpdocs::WpDocsError;
use wpdocs::config::ApiConfig;
use wpdocs::docs::{DocDomain, DocsClient};

fn client_for(server: &MockServer) -> DocsClient {
    DocsClient::new(&ApiConfig {
        base_url: server.base_url(),
        timeout_secs: 5,
    })
    .unwrap()
}

#[test]
fn search_preserves_server_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("search", "register_post_type")
            .query_param("_fields", "id,title,url,subtype");
        then.status(200).json_body(json!([
            {"id": 2, "title": "B", "url": "https://example.test/b", "subtype": "wp-parser-function"},
            {"id": 1, "title": "A", "url": "https://example.test/a", "subtype": "wp-parser-hook"},
        ]));
    });

    let client = client_for(&server);
    let results = client
        .search(DocDomain::CodeReference, "register_post_type", &[], 5)
        .unwrap();

    mock.assert();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, 2);
    assert_eq!(results[1].id, 1);
}

#[test]
fn search_defaults_to_all_domain_subtypes() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search").query_param(
            "subtype",
            "plugin-handbook,theme-handbook,blocks-handbook,rest-api-handbook,apis-handbook,wpcs-handbook,adv-admin-handbook",
        );
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    client
        .search(DocDomain::Handbook, "blocks", &[], 5)
        .unwrap();
    mock.assert();
}

#[test]
fn search_sends_requested_filters_only() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search")
            .query_param("subtype", "plugin-handbook,theme-handbook");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    client
        .search(
            DocDomain::Handbook,
            "hooks",
            &["plugin-handbook".to_string(), "theme-handbook".to_string()],
            5,
        )
        .unwrap();
    mock.assert();
}

#[test]
fn search_clamps_per_page_on_the_wire() {
    let server = MockServer::start();
    let over = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("per_page", "100");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    client
        .search(DocDomain::Handbook, "widgets", &[], 250)
        .unwrap();
    over.assert();

    let under = server.mock(|when, then| {
        when.method(GET).path("/search").query_param("per_page", "1");
        then.status(200).json_body(json!([]));
    });
    client
        .search(DocDomain::Handbook, "widgets", &[], 0)
        .unwrap();
    under.assert();
}

#[test]
fn search_invalid_filter_never_reaches_the_network() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    let err = client
        .search(DocDomain::Handbook, "x", &["nope".to_string()], 5)
        .unwrap_err();

    assert!(matches!(err, WpDocsError::InvalidInput(_)));
    mock.assert_hits(0);
}

#[test]
fn search_object_body_surfaces_server_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(200)
            .json_body(json!({"code": "rest_forbidden", "message": "Sorry, you are not allowed to do that."}));
    });

    let client = client_for(&server);
    let err = client.search(DocDomain::Handbook, "x", &[], 5).unwrap_err();
    assert_eq!(err.to_string(), "Sorry, you are not allowed to do that.");
}

#[test]
fn search_http_failure_without_message_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search");
        then.status(502).body("<html>bad gateway</html>");
    });

    let client = client_for(&server);
    let err = client.search(DocDomain::Handbook, "x", &[], 5).unwrap_err();
    assert_eq!(err.to_string(), "HTTP error 502");
}

#[test]
fn handbook_content_is_converted_to_markdown() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/plugin-handbook/123")
            .query_param("_fields", "id,title,content,link");
        then.status(200).json_body(json!({
            "id": 123,
            "title": {"rendered": "Plugin Basics"},
            "content": {"rendered": "<h2>Title</h2><p>Body <strong>bold</strong></p>"},
            "link": "https://example.test/plugins/plugin-basics/",
        }));
    });

    let client = client_for(&server);
    let doc = client.handbook_content("plugin-handbook", 123).unwrap();

    mock.assert();
    assert_eq!(doc.id, 123);
    assert_eq!(doc.title, "Plugin Basics");
    assert_eq!(doc.content, "## Title\n\nBody **bold**");
}

#[test]
fn reference_content_extracts_optional_metadata() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/wp-parser-function/42");
        then.status(200).json_body(json!({
            "id": 42,
            "title": {"rendered": "add_action"},
            "excerpt": {"rendered": "<p>Hooks a function onto an action.</p>"},
            "link": "https://example.test/reference/functions/add_action/",
            "wp-parser-since": ["1.2.0", "2.0.0"],
            "wp-parser-source-file": ["wp-includes/plugin.php"],
        }));
    });

    let client = client_for(&server);
    let doc = client.reference_content("wp-parser-function", 42).unwrap();

    assert_eq!(doc.excerpt, "Hooks a function onto an action.");
    assert_eq!(doc.since.as_deref(), Some("1.2.0"));
    assert_eq!(doc.source_file.as_deref(), Some("wp-includes/plugin.php"));
}

#[test]
fn reference_content_defaults_missing_metadata_to_none() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/wp-parser-hook/7");
        then.status(200).json_body(json!({
            "id": 7,
            "title": {"rendered": "init"},
            "excerpt": {"rendered": "<p>Fires after WordPress has finished loading.</p>"},
            "link": "https://example.test/reference/hooks/init/",
        }));
    });

    let client = client_for(&server);
    let doc = client.reference_content("wp-parser-hook", 7).unwrap();

    assert_eq!(doc.since, None);
    assert_eq!(doc.source_file, None);
}

#[test]
fn content_404_maps_to_document_not_found() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/wp-parser-function/99999");
        then.status(404)
            .json_body(json!({"code": "rest_post_invalid_id", "message": "Invalid post ID."}));
    });

    let client = client_for(&server);
    let err = client
        .reference_content("wp-parser-function", 99999)
        .unwrap_err();

    assert!(matches!(err, WpDocsError::DocumentNotFound));
    assert_eq!(err.to_string(), "Document not found");
}

#[test]
fn content_error_payload_with_success_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/plugin-handbook/5");
        then.status(200)
            .json_body(json!({"code": "rest_forbidden", "message": "Restricted."}));
    });

    let client = client_for(&server);
    let err = client.handbook_content("plugin-handbook", 5).unwrap_err();
    assert_eq!(err.to_string(), "Restricted.");
}

#[test]
fn content_http_failure_reports_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/plugin-handbook/5");
        then.status(500).body("oops");
    });

    let client = client_for(&server);
    let err = client.handbook_content("plugin-handbook", 5).unwrap_err();
    assert_eq!(err.to_string(), "HTTP error 500");
}

#[test]
fn unreachable_host_is_a_network_error() {
    let client = DocsClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
    .unwrap();

    let err = client.search(DocDomain::Handbook, "x", &[], 5).unwrap_err();
    assert!(matches!(err, WpDocsError::Network(_)));
}
