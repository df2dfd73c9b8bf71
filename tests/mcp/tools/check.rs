use msgkey::mcp::{MsgkeyMcpServer, types::CheckPlaceholdersParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{
    McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_count_mismatches,
};

// ============================================================================
// check_placeholders tests
// ============================================================================

#[tokio::test]
async fn test_check_placeholders_clean() {
    let fixture =
        McpTestFixture::with_messages("greeting=Hello {0}\n", &["infoMessage"]).unwrap();
    fixture
        .write_file(
            "src/main/java/App.java",
            "class App { void run() { msg.infoMessage(\"greeting\", \"bob\"); } }\n",
        )
        .unwrap();

    let server = MsgkeyMcpServer::new();
    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
    assert_eq!(json_result["totalFileCount"], 0);
    assert!(json_result["items"].as_array().unwrap().is_empty());
    assert_pagination(&json_result, 0, 20, false);
}

#[tokio::test]
async fn test_check_placeholders_reports_mismatch() {
    let fixture = fixture_with_count_mismatches(1).unwrap();

    let server = MsgkeyMcpServer::new();
    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });

    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["totalFileCount"], 1);

    let item = &json_result["items"][0];
    assert_eq!(item["key"], "user.moved");
    assert_eq!(item["template"], "Moved {0} to {1}");
    assert_eq!(item["rule"], "placeholder-count");
    assert_eq!(item["line"], 3);
    assert!(item["filePath"].as_str().unwrap().ends_with("App.java"));
    assert!(
        item["message"]
            .as_str()
            .unwrap()
            .contains("provided argument count (1)")
    );
    assert!(
        item["sourceLine"]
            .as_str()
            .unwrap()
            .contains("msg.infoMessage")
    );
}

#[tokio::test]
async fn test_check_placeholders_pagination() {
    let fixture = fixture_with_count_mismatches(5).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: Some(2),
        offset: Some(0),
    });
    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_eq!(json_result["items"][0]["line"], 3);
    assert_pagination(&json_result, 0, 2, true);

    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: Some(2),
        offset: Some(4),
    });
    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["items"][0]["line"], 7);
    assert_pagination(&json_result, 4, 2, false);
}

#[tokio::test]
async fn test_check_placeholders_limit_is_capped() {
    let fixture = fixture_with_count_mismatches(1).unwrap();
    let server = MsgkeyMcpServer::new();

    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: Some(1000),
        offset: None,
    });
    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_check_placeholders_without_patterns() {
    let fixture = McpTestFixture::with_messages("user.moved=Moved {0} to {1}\n", &[]).unwrap();
    fixture
        .write_file(
            "src/main/java/App.java",
            "class App { void run() { msg.infoMessage(\"user.moved\"); } }\n",
        )
        .unwrap();

    let server = MsgkeyMcpServer::new();
    let params = Parameters(CheckPlaceholdersParams {
        project_root_path: fixture.root(),
        limit: None,
        offset: None,
    });
    let result = server.check_placeholders(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 0);
}
