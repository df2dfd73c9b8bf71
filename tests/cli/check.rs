use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const PROPERTIES: &str = "\
user.created=User {0} created
user.moved=Moved {0} to {1}
broken.numbering=Hello {1}
";

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        r#"class App {
    void run() {
        msg.infoMessage("user.created", "bob");
        msg.infoMessage("user.moved", "a", "b");
    }
}
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"), "stdout: {}", stdout);
    assert!(stdout.contains("Checked 1 source file,"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_argument_count_mismatch() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        r#"class App {
    void run() {
        msg.infoMessage("user.moved", "a");
    }
}
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-count"), "stdout: {}", stdout);
    assert!(
        stdout.contains("Placeholder count (2) doesn't match provided argument count (1)."),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("App.java:3:"), "stdout: {}", stdout);
    assert!(stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_join_arguments_collapse_to_template() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        r#"class App {
    void run() {
        msg.infoMessage("user.moved", String.join(",", user.getNames()));
        msg.infoMessage("user.moved", new Object[] { task.join(",") });
        msg.infoMessage("user.moved", new Object[] { task.join(",") }, e);
    }
}
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("App.java:5:"), "stdout: {}", stdout);
    assert!(!stdout.contains("App.java:3:"), "stdout: {}", stdout);
    assert!(!stdout.contains("App.java:4:"), "stdout: {}", stdout);
    assert!(stdout.contains("1 problems (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_numbering_issue() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App { void run() { msg.infoMessage(\"broken.numbering\", \"x\", \"y\"); } }\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-numbering"), "stdout: {}", stdout);
    assert!(
        stdout.contains("broken.numbering = Hello {1}"),
        "stdout: {}",
        stdout
    );

    Ok(())
}

#[test]
fn test_undefined_key_is_warning() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App { void run() { msg.infoMessage(\"no.such.key\"); } }\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("undefined-key"), "stdout: {}", stdout);
    assert!(
        stdout.contains("msgkey add-key no.such.key"),
        "stdout: {}",
        stdout
    );
    assert!(stdout.contains("(0 errors, 1 warning)"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_only_selected_check_runs() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App { void run() { msg.infoMessage(\"no.such.key\"); } }\n",
    )?;

    let mut cmd = test.check_command();
    cmd.arg("placeholder");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(!stdout.contains("undefined-key"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_pattern_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App { void run() { log.warnMessage(\"user.created\"); } }\n",
    )?;

    let (code, _, _) = run(test.check_command())?;
    assert_eq!(code, 0);

    let mut cmd = test.check_command();
    cmd.args(["--pattern", "warnMessage"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-count"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".msgkeyrc.json",
        r#"{
         "messageKeyExtractionPatterns": ["infoMessage"],
         "ignores": ["**/legacy/**"]
     }"#,
    )?;
    test.write_file(crate::MESSAGES_PATH, PROPERTIES)?;
    test.write_file(
        "src/main/java/legacy/Old.java",
        "class Old { void run() { msg.infoMessage(\"user.moved\"); } }\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("no issues found"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::with_file(".msgkeyrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("ignores"), "stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_source_root_flag() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App { void run() { msg.infoMessage(\"user.moved\"); } }\n",
    )?;

    let mut cmd = test.command();
    cmd.current_dir(std::env::temp_dir());
    cmd.arg("check").arg("--source-root").arg(test.root());
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stdout.contains("placeholder-count"), "stdout: {}", stdout);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    for command in ["check", "show", "keys", "add-key", "fix", "init", "serve"] {
        assert!(stdout.contains(command), "missing {}: {}", command, stdout);
    }

    Ok(())
}
