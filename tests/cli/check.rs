use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_check_clean_project() -> Result<()> {
    let test = CliTest::with_file("main.c", "puts(_(\"ok\"));\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Checked 1 source file - no issues found\n"
    );
    assert!(!test.root().join("locales").exists());
    Ok(())
}

#[test]
fn test_check_reports_malformed_literal() -> Result<()> {
    let test = CliTest::with_file("src/main.c", "int x;\n  puts(_(\"oops);\nputs(_(\"ok\"));\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let expected = "\
error: unterminated string literal  malformed-literal
  --> src/main.c:2:8
  |
2 |   puts(_(\"oops);
  |        ^
  = note: in call to `_(...)`
  = hint: close the quote before the end of the line

✘ 1 problem (1 error, 0 warnings)
";
    assert_eq!(stdout(&output), expected);
    Ok(())
}

#[test]
fn test_check_empty_msgid_is_warning() -> Result<()> {
    let test = CliTest::with_file("a.c", "_(\"\");\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("warning: empty msgid  empty-msgid"));
    Ok(())
}

#[test]
fn test_check_ignores_markers_in_comments_and_strings() -> Result<()> {
    let test = CliTest::with_file(
        "a.c",
        "// _(\"comment\n/* _(\"block */\nputs(\"_(\\\"str\");\n",
    )?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_check_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".gleanrc.json", r#"{ "keywords": ["not valid"] }"#)?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error: "));
    Ok(())
}

#[test]
fn test_check_missing_source_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["check", "--source-root", "missing"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("not a directory"));
    Ok(())
}
