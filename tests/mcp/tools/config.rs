use glean::mcp::{GleanMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = GleanMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["keywords"], json!(["_"]));
    assert_eq!(json_result["config"]["domain"], "messages");
    assert_eq!(json_result["config"]["outputDir"], "locales");
    assert!(json_result["config"]["extensions"].is_array());
}

#[tokio::test]
async fn test_get_config_from_gleanrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "keywords": ["_", "N_"],
            "languages": ["de", "ja"],
            "commentTag": "TRANSLATORS:"
        }))
        .unwrap();

    let server = GleanMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["keywords"], json!(["_", "N_"]));
    assert_eq!(json_result["config"]["languages"], json!(["de", "ja"]));
    assert_eq!(json_result["config"]["commentTag"], "TRANSLATORS:");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "keywords": [] })).unwrap();

    let server = GleanMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
