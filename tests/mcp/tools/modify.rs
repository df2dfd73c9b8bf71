use msgkey::mcp::{MsgkeyMcpServer, types::AddMessageKeyParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{MESSAGES_PATH, McpTestFixture, extract_tool_result_json};

// ============================================================================
// add_message_key tests
// ============================================================================

#[tokio::test]
async fn test_add_message_key_default_file() {
    let fixture = McpTestFixture::with_messages("alpha=A\ngamma=G\n", &[]).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(AddMessageKeyParams {
        project_root_path: fixture.root(),
        key: "beta".to_string(),
        value: "B {0}".to_string(),
        file_path: None,
    });
    let result = server.add_message_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert_eq!(json_result["key"], "beta");
    assert!(
        json_result["filePath"]
            .as_str()
            .unwrap()
            .ends_with("messages.properties")
    );
    assert_eq!(
        fixture.read_file(MESSAGES_PATH).unwrap(),
        "alpha=A\nbeta=B {0}\ngamma=G\n"
    );
}

#[tokio::test]
async fn test_add_message_key_relative_file() {
    let fixture = McpTestFixture::with_messages("alpha=A\n", &[]).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(AddMessageKeyParams {
        project_root_path: fixture.root(),
        key: "beta".to_string(),
        value: "B".to_string(),
        file_path: Some("conf/extra.properties".to_string()),
    });
    let result = server.add_message_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], true);
    assert!(fixture.root_path().join("conf/extra.properties").exists());
    assert_eq!(
        fixture.read_file("conf/extra.properties").unwrap(),
        "beta=B\n"
    );
}

#[tokio::test]
async fn test_add_message_key_already_defined() {
    let fixture = McpTestFixture::with_messages("alpha=A\n", &[]).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(AddMessageKeyParams {
        project_root_path: fixture.root(),
        key: "alpha".to_string(),
        value: "other".to_string(),
        file_path: None,
    });
    let result = server.add_message_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(json_result["filePath"].is_null());
    assert!(
        json_result["message"]
            .as_str()
            .unwrap()
            .contains("already defined")
    );
    assert_eq!(fixture.read_file(MESSAGES_PATH).unwrap(), "alpha=A\n");
}

#[tokio::test]
async fn test_add_message_key_empty_key() {
    let fixture = McpTestFixture::with_messages("alpha=A\n", &[]).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(AddMessageKeyParams {
        project_root_path: fixture.root(),
        key: "   ".to_string(),
        value: String::new(),
        file_path: None,
    });
    let result = server.add_message_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
}

#[tokio::test]
async fn test_add_message_key_without_properties_file() {
    let fixture = McpTestFixture::new().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(AddMessageKeyParams {
        project_root_path: fixture.root(),
        key: "beta".to_string(),
        value: String::new(),
        file_path: None,
    });
    let result = server.add_message_key(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["success"], false);
    assert!(
        json_result["message"]
            .as_str()
            .unwrap()
            .contains("No properties file found")
    );
}
