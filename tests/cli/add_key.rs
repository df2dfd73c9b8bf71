use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MESSAGES_PATH, run};

#[test]
fn test_add_key_sorted() -> Result<()> {
    let test = CliTest::with_project(&[], "alpha=A\ngamma=G\n")?;

    let mut cmd = test.add_key_command();
    cmd.args(["beta", "--value", "B {0}"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Added beta to"), "{}", stdout);
    assert_eq!(test.read_file(MESSAGES_PATH)?, "alpha=A\nbeta=B {0}\ngamma=G\n");

    Ok(())
}

#[test]
fn test_add_existing_key_fails() -> Result<()> {
    let test = CliTest::with_project(&[], "alpha=A\n")?;

    let mut cmd = test.add_key_command();
    cmd.arg("alpha");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 1);
    assert!(stderr.contains("alpha is already defined"), "{}", stderr);
    assert_eq!(test.read_file(MESSAGES_PATH)?, "alpha=A\n");

    Ok(())
}

#[test]
fn test_add_key_to_explicit_file() -> Result<()> {
    let test = CliTest::with_project(&[], "alpha=A\n")?;

    let mut cmd = test.add_key_command();
    cmd.args(["beta", "--value", "B", "--file", "conf/extra.properties"]);
    let (code, _, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("conf/extra.properties")?, "beta=B\n");
    assert_eq!(test.read_file(MESSAGES_PATH)?, "alpha=A\n");

    Ok(())
}

#[test]
fn test_add_key_without_properties_file() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.add_key_command();
    cmd.arg("beta");
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, 2);
    assert!(stderr.contains("No properties file found"), "{}", stderr);

    Ok(())
}
