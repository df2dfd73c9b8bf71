use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "messageKeyExtractionPatterns",
        "annotationKeyExtractionPatterns",
        "propertyFileGlobs",
        "sourceRoot",
        "includes",
        "ignores",
        "ignoreBuildDirs",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["ignoreBuildDirs"], Value::Bool(true));

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with('\n'), "Config should end with a newline");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Created .msgkeyrc.json"), "stdout: {}", stdout);
    assert!(test.root().join(".msgkeyrc.json").exists());

    let content = test.read_file(".msgkeyrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".msgkeyrc.json", "{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains("already exists"), "stderr: {}", stderr);
    assert_eq!(test.read_file(".msgkeyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;

    let mut init = test.command();
    init.arg("init");
    run(init)?;

    let (code, stdout, _) = run(test.check_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"), "stdout: {}", stdout);

    Ok(())
}
