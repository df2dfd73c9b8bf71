use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const PROPERTIES: &str = "\
app.title=My App
user.moved=Moved {0} to {1}
broken=Hello {1}
";

#[test]
fn test_show_key() -> Result<()> {
    let test = CliTest::with_project(&[], PROPERTIES)?;

    let mut cmd = test.show_command();
    cmd.arg("user.moved");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("user.moved = Moved {0} to {1}"), "{}", stdout);
    assert!(stdout.contains("messages.properties:2"), "{}", stdout);
    assert!(stdout.contains("placeholders: {0}, {1}"), "{}", stdout);

    Ok(())
}

#[test]
fn test_show_warns_on_bad_numbering() -> Result<()> {
    let test = CliTest::with_project(&[], PROPERTIES)?;

    let mut cmd = test.show_command();
    cmd.arg("broken");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(
        stdout.contains("numbering must start at {0} and be contiguous"),
        "{}",
        stdout
    );

    Ok(())
}

#[test]
fn test_show_missing_key() -> Result<()> {
    let test = CliTest::with_project(&[], PROPERTIES)?;

    let mut cmd = test.show_command();
    cmd.arg("nope");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains("Message key not found: nope"), "{}", stderr);

    Ok(())
}

#[test]
fn test_show_at_position() -> Result<()> {
    let test = CliTest::with_project(&[], PROPERTIES)?;
    test.write_file(
        "src/main/java/App.java",
        "class App {\n  String t = messageSource.getMessage(\"app.title\", null, l);\n}\n",
    )?;

    let mut cmd = test.show_command();
    cmd.args(["--at", "src/main/java/App.java:2:42"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("app.title = My App"), "{}", stdout);

    Ok(())
}

#[test]
fn test_show_at_position_without_key() -> Result<()> {
    let test = CliTest::with_project(&[], PROPERTIES)?;
    test.write_file("src/main/java/App.java", "class App {}\n")?;

    let mut cmd = test.show_command();
    cmd.args(["--at", "src/main/java/App.java:1:3"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains("No message key at"), "{}", stderr);

    Ok(())
}
