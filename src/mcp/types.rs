use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckPlaceholdersParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Maximum number of items to return (default 20, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetMessageParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Message key to look up
    pub key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchKeysParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Case-insensitive substring of the key (empty matches all)
    pub filter: Option<String>,
    /// Maximum number of items to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageKeyParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    pub key: String,
    #[serde(default)]
    pub value: String,
    /// Properties file to write; defaults to the first loaded properties file
    pub file_path: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub message_key_extraction_patterns: Vec<String>,
    pub annotation_key_extraction_patterns: Vec<String>,
    pub property_file_globs: Vec<String>,
    pub source_root: String,
    pub includes: Vec<String>,
    pub ignores: Vec<String>,
    pub ignore_build_dirs: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            message_key_extraction_patterns: c.message_key_extraction_patterns,
            annotation_key_extraction_patterns: c.annotation_key_extraction_patterns,
            property_file_globs: c.property_file_globs,
            source_root: c.source_root,
            includes: c.includes,
            ignores: c.ignores,
            ignore_build_dirs: c.ignore_build_dirs,
        }
    }
}

// ============================================================
// Placeholder Check Types (check_placeholders)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderCheckResult {
    pub total_count: usize,
    pub total_file_count: usize,
    pub items: Vec<PlaceholderItem>,
    pub pagination: Pagination,
}

/// A single placeholder issue
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderItem {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub key: String,
    pub template: String,
    /// `placeholder-count` or `placeholder-numbering`
    pub rule: String,
    pub message: String,
    pub source_line: String,
}

// ============================================================
// Message Types (get_message, search_keys)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResult {
    pub found: bool,
    pub key: String,
    pub message: Option<MessageItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageItem {
    pub key: String,
    pub value: String,
    pub file_path: String,
    pub line: usize,
    /// Distinct placeholder indices in ascending order
    pub placeholders: Vec<usize>,
    /// Arguments a call must supply (highest index + 1)
    pub expected_argument_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchKeysResult {
    pub total_count: usize,
    pub items: Vec<MessageItem>,
    pub pagination: Pagination,
}

// ============================================================
// AddMessageKey Types (add_message_key)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMessageKeyResult {
    pub success: bool,
    pub key: String,
    pub file_path: Option<String>,
    pub message: String,
}

// ============================================================
// Shared
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
