use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, MESSAGES_PATH, run};

const SOURCE: &str = r#"class App {
    void run() {
        msg.infoMessage("user.created", "bob");
        msg.infoMessage("order.placed");
        msg.infoMessage("audit.done");
        msg.infoMessage("order.placed");
    }
}
"#;

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], "user.created=User {0} created\n")?;
    test.write_file("src/main/java/App.java", SOURCE)?;

    let (code, stdout, _) = run(test.fix_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("+ order.placed="), "{}", stdout);
    assert!(stdout.contains("+ audit.done="), "{}", stdout);
    assert!(stdout.contains("Would insert 2 key(s)"), "{}", stdout);
    assert_eq!(
        test.read_file(MESSAGES_PATH)?,
        "user.created=User {0} created\n"
    );

    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = CliTest::with_project(&["infoMessage"], "user.created=User {0} created\n")?;
    test.write_file("src/main/java/App.java", SOURCE)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Inserted 2 key(s)"), "{}", stdout);
    assert_eq!(
        test.read_file(MESSAGES_PATH)?,
        "audit.done=\norder.placed=\nuser.created=User {0} created\n"
    );

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("No undefined message keys"), "{}", stdout);

    Ok(())
}
