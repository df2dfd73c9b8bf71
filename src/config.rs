use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".msgkeyrc.json";

/// Build output, VCS metadata and test/generated sources.
pub const BUILD_DIR_PATTERNS: &[&str] = &[
    "**/.git/**",
    "**/node_modules/**",
    "**/target/**",
    "**/build/**",
    "**/out/**",
    "**/dist/**",
    "**/tmp/**",
    "**/temp/**",
    "**/src/test/**",
    "**/src/generated/**",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub message_key_extraction_patterns: Vec<String>,
    #[serde(default)]
    pub annotation_key_extraction_patterns: Vec<String>,
    #[serde(default = "default_property_file_globs")]
    pub property_file_globs: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_ignore_build_dirs")]
    pub ignore_build_dirs: bool,
}

fn default_property_file_globs() -> Vec<String> {
    vec!["**/src/main/resources/**/*.properties".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_build_dirs() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_key_extraction_patterns: Vec::new(),
            annotation_key_extraction_patterns: Vec::new(),
            property_file_globs: default_property_file_globs(),
            source_root: default_source_root(),
            includes: Vec::new(),
            ignores: Vec::new(),
            ignore_build_dirs: default_ignore_build_dirs(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns and annotation regexes.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Includes without wildcards are literal directories.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.property_file_globs {
            Pattern::new(pattern).with_context(|| {
                format!(
                    "Invalid glob pattern in 'propertyFileGlobs': \"{}\"",
                    pattern
                )
            })?;
        }

        for pattern in &self.annotation_key_extraction_patterns {
            Regex::new(pattern).with_context(|| {
                format!(
                    "Invalid regex in 'annotationKeyExtractionPatterns': \"{}\"",
                    pattern
                )
            })?;
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
