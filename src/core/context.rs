use std::{
    cell::OnceCell,
    collections::{HashMap, HashSet},
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        KeyReferenceMatcher, MessageCatalog, PlaceholderValidator, file_scanner::scan_files,
        parsers::properties::scan_properties_files,
    },
    issues::ParseErrorIssue,
};

/// Source text of every scanned Java file, keyed by path.
pub type AllSources = HashMap<String, String>;

/// Shared state for one analysis run.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--pattern getMessage`)
/// 2. `.msgkeyrc.json` config file
/// 3. Built-in defaults
///
/// The message catalog is loaded eagerly so configuration and glob errors
/// surface before any rule runs. Source files are read on first access.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// All Java source files to analyze.
    pub files: HashSet<String>,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,

    /// Every `.properties` definition matched by `propertyFileGlobs`.
    pub catalog: MessageCatalog,

    /// Placeholder validator compiled from `messageKeyExtractionPatterns`.
    pub validator: PlaceholderValidator,

    /// Key reference matcher for undefined-key detection.
    pub key_matcher: KeyReferenceMatcher,

    sources: OnceCell<AllSources>,
    source_errors: OnceCell<Vec<ParseErrorIssue>>,
    properties_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is invalid, a CLI override is not a
    /// valid pattern, or a properties glob cannot be compiled.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root_str = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(root_str))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;

        if !common_args.patterns.is_empty() {
            config.message_key_extraction_patterns = common_args.patterns.clone();
        }
        if !common_args.properties.is_empty() {
            config.property_file_globs = common_args.properties.clone();
        }
        config.validate()?;

        if verbose && config.message_key_extraction_patterns.is_empty() {
            eprintln!("Note: No messageKeyExtractionPatterns configured, placeholder checks are disabled");
        }

        let scan_dir = resolve_under_root(&root_dir, &config.source_root);
        let scan_dir_str = scan_dir.to_string_lossy().to_string();

        let (scan_result, properties_result) = rayon::join(
            || {
                scan_files(
                    &scan_dir_str,
                    &config.includes,
                    &config.ignores,
                    config.ignore_build_dirs,
                    verbose,
                )
            },
            || scan_properties_files(&root_dir, &config.property_file_globs),
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let properties_result = properties_result?;
        let properties_errors: Vec<ParseErrorIssue> = properties_result
            .warnings
            .into_iter()
            .map(|warning| {
                if verbose {
                    eprintln!("Warning: {} - {}", warning.file_path, warning.error);
                }
                ParseErrorIssue {
                    file_path: warning.file_path,
                    error: warning.error,
                }
            })
            .collect();

        let validator = PlaceholderValidator::new(&config.message_key_extraction_patterns);
        let key_matcher = KeyReferenceMatcher::new(
            &config.message_key_extraction_patterns,
            &config.annotation_key_extraction_patterns,
        )?;

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            catalog: properties_result.catalog,
            validator,
            key_matcher,
            sources: OnceCell::new(),
            source_errors: OnceCell::new(),
            properties_errors,
        })
    }

    /// Source text of every scanned file (lazy initialization).
    ///
    /// Files are read in parallel. Unreadable files are collected into
    /// `source_errors()` instead.
    pub fn sources(&self) -> &AllSources {
        self.sources.get_or_init(|| {
            let read_results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path.clone(), fs::read_to_string(file_path)))
                .collect();

            let mut sources = HashMap::new();
            let mut errors = Vec::new();

            for (file_path, result) in read_results {
                match result {
                    Ok(text) => {
                        sources.insert(file_path, text);
                    }
                    Err(e) => {
                        if self.verbose {
                            eprintln!("Warning: {} - {}", file_path, e);
                        }
                        errors.push(ParseErrorIssue {
                            file_path,
                            error: format!("Failed to read file: {}", e),
                        });
                    }
                }
            }

            let _ = self.source_errors.set(errors);
            sources
        })
    }

    /// Source files that could not be read. Populated by `sources()`.
    pub fn source_errors(&self) -> &Vec<ParseErrorIssue> {
        self.sources();
        self.source_errors.get_or_init(Vec::new)
    }

    /// Properties files that matched a glob but could not be loaded.
    pub fn properties_errors(&self) -> &Vec<ParseErrorIssue> {
        &self.properties_errors
    }

    /// Every read or parse failure collected so far, sources first.
    pub fn parse_errors(&self) -> Vec<ParseErrorIssue> {
        self.source_errors()
            .iter()
            .chain(self.properties_errors.iter())
            .cloned()
            .collect()
    }

    /// Properties file new keys go to when no target is given.
    pub fn default_properties_file(&self) -> Option<&str> {
        self.catalog.files().first().map(String::as_str)
    }
}

/// Join a config-relative path onto the project root.
///
/// Absolute paths are kept. A root of `.` is not prefixed so reported paths
/// stay short.
fn resolve_under_root(root_dir: &Path, relative: &str) -> PathBuf {
    let p = Path::new(relative);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let rel: PathBuf = p
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if rel.as_os_str().is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(rel)
    }
}
