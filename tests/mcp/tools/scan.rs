use glean::mcp::{
    GleanMcpServer,
    types::{ScanIssuesParams, ScanStringsParams},
};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json};

fn strings_params(fixture: &McpTestFixture, limit: Option<u32>, offset: Option<u32>) -> Parameters<ScanStringsParams> {
    Parameters(ScanStringsParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

// ============================================================================
// scan_strings tests
// ============================================================================

#[tokio::test]
async fn test_scan_strings_lists_records() {
    let fixture = McpTestFixture::with_sources(&[
        ("src/main.c", "int main(void) {\n    puts(_(\"Hello\"));\n}\n"),
        ("src/ui.c", "_(\"Hello\"); _(\"Quit\");\n"),
    ])
    .unwrap();
    let server = GleanMcpServer::new();

    let result = server
        .scan_strings(strings_params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    assert_eq!(json_result["uniqueCount"], 2);
    assert_eq!(json_result["totalFileCount"], 2);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["filePath"], "src/main.c");
    assert_eq!(items[0]["line"], 2);
    assert_eq!(items[0]["col"], 10);
    assert_eq!(items[0]["literal"], "Hello");
    assert_eq!(items[2]["literal"], "Quit");
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_scan_strings_pagination() {
    let source: String = (0..5).map(|i| format!("_(\"s{}\");\n", i)).collect();
    let fixture = McpTestFixture::with_sources(&[("a.c", source.as_str())]).unwrap();
    let server = GleanMcpServer::new();

    let result = server
        .scan_strings(strings_params(&fixture, Some(2), Some(2)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["literal"], "s2");
    assert_eq!(items[1]["literal"], "s3");
    assert_pagination(&json_result, 2, 2, true);
}

#[tokio::test]
async fn test_scan_strings_limit_is_capped() {
    let fixture = McpTestFixture::with_sources(&[("a.c", "_(\"x\");\n")]).unwrap();
    let server = GleanMcpServer::new();

    let result = server
        .scan_strings(strings_params(&fixture, Some(1000), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 200, false);
}

#[tokio::test]
async fn test_scan_strings_missing_root_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    let server = GleanMcpServer::new();

    let params = Parameters(ScanStringsParams {
        project_root_path: fixture.root_path().join("missing").to_string_lossy().to_string(),
        limit: None,
        offset: None,
    });

    assert!(server.scan_strings(params).await.is_err());
}

// ============================================================================
// scan_issues tests
// ============================================================================

#[tokio::test]
async fn test_scan_issues_reports_malformed_literal() {
    let fixture = McpTestFixture::with_sources(&[(
        "broken.c",
        "_(\"ok\");\n  _(\"oops);\n_(\"\");\n",
    )])
    .unwrap();
    let server = GleanMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["errorCount"], 1);
    assert_eq!(json_result["warningCount"], 1);
    assert_eq!(json_result["filesScanned"], 1);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["rule"], "malformed-literal");
    assert_eq!(items[0]["severity"], "error");
    assert_eq!(items[0]["filePath"], "broken.c");
    assert_eq!(items[0]["line"], 2);
    assert_eq!(items[0]["col"], 3);
    assert_eq!(items[1]["rule"], "empty-msgid");
}

#[tokio::test]
async fn test_scan_issues_clean_project() {
    let fixture = McpTestFixture::with_sources(&[("a.c", "_(\"fine\");\n")]).unwrap();
    let server = GleanMcpServer::new();

    let params = Parameters(ScanIssuesParams {
        project_root_path: fixture.root(),
    });
    let result = server.scan_issues(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["errorCount"], 0);
    assert!(json_result["items"].as_array().unwrap().is_empty());
}
