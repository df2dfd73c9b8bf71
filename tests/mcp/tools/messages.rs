use msgkey::mcp::{
    MsgkeyMcpServer,
    types::{GetMessageParams, SearchKeysParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{assert_pagination, extract_tool_result_json, fixture_with_keys};

// ============================================================================
// get_message tests
// ============================================================================

#[tokio::test]
async fn test_get_message_found() {
    let fixture = fixture_with_keys().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(GetMessageParams {
        project_root_path: fixture.root(),
        key: "order.placed".to_string(),
    });
    let result = server.get_message(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    let message = &json_result["message"];
    assert_eq!(message["value"], "Order {0} placed for {1}");
    assert_eq!(message["line"], 2);
    assert_eq!(message["placeholders"], json!([0, 1]));
    assert_eq!(message["expectedArgumentCount"], 2);
    assert!(
        message["filePath"]
            .as_str()
            .unwrap()
            .ends_with("messages.properties")
    );
}

#[tokio::test]
async fn test_get_message_trims_key() {
    let fixture = fixture_with_keys().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(GetMessageParams {
        project_root_path: fixture.root(),
        key: "  user.created ".to_string(),
    });
    let result = server.get_message(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], true);
    assert_eq!(json_result["key"], "user.created");
    assert_eq!(json_result["message"]["expectedArgumentCount"], 0);
}

#[tokio::test]
async fn test_get_message_missing() {
    let fixture = fixture_with_keys().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(GetMessageParams {
        project_root_path: fixture.root(),
        key: "order.shipped".to_string(),
    });
    let result = server.get_message(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["found"], false);
    assert!(json_result["message"].is_null());
}

// ============================================================================
// search_keys tests
// ============================================================================

#[tokio::test]
async fn test_search_keys_all() {
    let fixture = fixture_with_keys().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(SearchKeysParams {
        project_root_path: fixture.root(),
        filter: None,
        limit: None,
        offset: None,
    });
    let result = server.search_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 4);
    let keys: Vec<&str> = json_result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["order.cancelled", "order.placed", "user.created", "user.deleted"]
    );
    assert_pagination(&json_result, 0, 50, false);
}

#[tokio::test]
async fn test_search_keys_filter() {
    let fixture = fixture_with_keys().unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(SearchKeysParams {
        project_root_path: fixture.root(),
        filter: Some("ORDER".to_string()),
        limit: Some(1),
        offset: None,
    });
    let result = server.search_keys(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["items"][0]["key"], "order.cancelled");
    assert_pagination(&json_result, 0, 1, true);
}
