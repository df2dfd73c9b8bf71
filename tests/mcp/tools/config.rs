use msgkey::mcp::{MsgkeyMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceRoot"], "./");
    assert_eq!(
        json_result["config"]["propertyFileGlobs"],
        json!(["**/src/main/resources/**/*.properties"])
    );
    assert_eq!(json_result["config"]["messageKeyExtractionPatterns"], json!([]));
    assert_eq!(json_result["config"]["ignoreBuildDirs"], true);
}

#[tokio::test]
async fn test_get_config_from_msgkeyrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messageKeyExtractionPatterns": ["infoMessage", "errorMessage"],
            "propertyFileGlobs": ["conf/*.properties"]
        }))
        .unwrap();

    let server = MsgkeyMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(
        json_result["config"]["messageKeyExtractionPatterns"],
        json!(["infoMessage", "errorMessage"])
    );
    assert_eq!(
        json_result["config"]["propertyFileGlobs"],
        json!(["conf/*.properties"])
    );
}

#[tokio::test]
async fn test_get_config_invalid_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({ "ignores": ["[invalid"] }))
        .unwrap();

    let server = MsgkeyMcpServer::new();
    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err());
}
