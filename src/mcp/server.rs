use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::{
        actions::{Action, InsertMessageKey, PendingKey},
        args::CommonArgs,
    },
    config::load_config,
    core::{CheckContext, MessageEntry, PlaceholderSet},
    issues::PlaceholderIssue,
    rules::check_placeholder_issues,
};

use super::types::{
    AddMessageKeyParams, AddMessageKeyResult, CheckPlaceholdersParams, ConfigDto, ConfigValues,
    GetConfigParams, GetMessageParams, MessageItem, MessageResult, Pagination,
    PlaceholderCheckResult, PlaceholderItem, SearchKeysParams, SearchKeysResult,
};

#[derive(Clone)]
pub struct MsgkeyMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for MsgkeyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl MsgkeyMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current msgkey configuration
    #[tool(description = "Get the current msgkey configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// Check placeholder numbering and argument counts
    #[tool(
        description = "Check calls of the configured message methods: placeholder numbering in templates and argument counts at call sites. Returns paginated list of issues."
    )]
    pub async fn check_placeholders(
        &self,
        params: Parameters<CheckPlaceholdersParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(20).min(100);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = open_context(&params.project_root_path)?;
        let issues = check_placeholder_issues(&ctx);

        let total_file_count = issues
            .iter()
            .map(|issue| issue.context.file_path())
            .collect::<HashSet<_>>()
            .len();
        let all_items: Vec<PlaceholderItem> = issues.iter().map(placeholder_item).collect();
        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, offset, limit);

        json_result(&PlaceholderCheckResult {
            total_count,
            total_file_count,
            items,
            pagination,
        })
    }

    /// Look up one message key
    #[tool(
        description = "Get the value, definition location and placeholders of a message key."
    )]
    pub async fn get_message(
        &self,
        params: Parameters<GetMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = open_context(&params.project_root_path)?;
        let key = params.key.trim().to_string();
        let message = ctx.catalog.get(&key).map(message_item);

        json_result(&MessageResult {
            found: message.is_some(),
            key,
            message,
        })
    }

    /// Search defined message keys
    #[tool(
        description = "Search defined message keys by case-insensitive substring. Returns paginated list sorted by key."
    )]
    pub async fn search_keys(
        &self,
        params: Parameters<SearchKeysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let limit = params.limit.map(|v| v as usize).unwrap_or(50).min(200);
        let offset = params.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = open_context(&params.project_root_path)?;
        let all_items: Vec<MessageItem> = ctx
            .catalog
            .search(params.filter.as_deref().unwrap_or(""))
            .into_iter()
            .map(message_item)
            .collect();
        let total_count = all_items.len();
        let (items, pagination) = paginate(all_items, offset, limit);

        json_result(&SearchKeysResult {
            total_count,
            items,
            pagination,
        })
    }

    /// Add a message key to a properties file
    #[tool(
        description = "Add a message key to a properties file at its sorted position. Fails if the key is already defined."
    )]
    pub async fn add_message_key(
        &self,
        params: Parameters<AddMessageKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = open_context(&params.project_root_path)?;
        let key = params.key.trim().to_string();

        let failure = |message: String| AddMessageKeyResult {
            success: false,
            key: key.clone(),
            file_path: None,
            message,
        };

        if key.is_empty() {
            return json_result(&failure("Message key must not be empty".to_string()));
        }
        if let Some(existing) = ctx.catalog.get(&key) {
            return json_result(&failure(format!(
                "Key is already defined at {}:{}",
                existing.location.file_path, existing.location.line
            )));
        }

        let file_path = match params.file_path {
            Some(path) => resolve_path(&ctx.root_dir, &path),
            None => match ctx.default_properties_file() {
                Some(path) => path.to_string(),
                None => {
                    return json_result(&failure(
                        "No properties file found; pass filePath".to_string(),
                    ));
                }
            },
        };

        let stats = InsertMessageKey::run(&[PendingKey::new(&key, &params.value, &file_path)])
            .map_err(|e| McpError::internal_error(format!("Failed to add key: {}", e), None))?;

        if stats.changes_applied == 0 {
            return json_result(&failure(format!("Key is already defined in {}", file_path)));
        }

        json_result(&AddMessageKeyResult {
            success: true,
            key: key.clone(),
            file_path: Some(file_path),
            message: "Key added".to_string(),
        })
    }
}

#[tool_handler]
impl ServerHandler for MsgkeyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "msgkey MCP helps AI agents keep Java message keys and their call sites consistent.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. check_placeholders - Placeholder numbering and argument-count issues (paginated)\n\
                 3. get_message - Value, location and placeholders of one key\n\
                 4. search_keys - Find defined keys by substring (paginated)\n\
                 5. add_message_key - Add a key to a properties file\n\n\
                 Recommended Workflow:\n\
                 1. Use check_placeholders to list problems\n\
                 2. Use get_message to read the template behind each issue\n\
                 3. Fix the call site arguments or the template numbering"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

fn open_context(project_root_path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        source_root: Some(PathBuf::from(project_root_path)),
        ..Default::default()
    };
    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> (Vec<T>, Pagination) {
    let total = items.len();
    let page: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
    let has_more = offset + page.len() < total;
    (
        page,
        Pagination {
            offset,
            limit,
            has_more,
        },
    )
}

/// Relative paths are taken from the project root.
fn resolve_path(root: &Path, path: &str) -> String {
    let p = Path::new(path);
    if p.is_absolute() {
        path.to_string()
    } else {
        root.join(p).to_string_lossy().to_string()
    }
}

fn placeholder_item(issue: &PlaceholderIssue) -> PlaceholderItem {
    PlaceholderItem {
        file_path: issue.context.file_path().to_string(),
        line: issue.context.line(),
        col: issue.context.col(),
        key: issue.key.clone(),
        template: issue.template.clone(),
        rule: issue.rule().to_string(),
        message: issue.message.clone(),
        source_line: issue.context.source_line.clone(),
    }
}

fn message_item(entry: &MessageEntry) -> MessageItem {
    let placeholders = PlaceholderSet::parse(&entry.value);
    MessageItem {
        key: entry.key.clone(),
        value: entry.value.clone(),
        file_path: entry.location.file_path.clone(),
        line: entry.location.line,
        placeholders: placeholders.indices().collect(),
        expected_argument_count: placeholders.expected_arg_count(),
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = MsgkeyMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
