use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const EXAMPLE_C: &str = r#"#include <libintl.h>
#include <locale.h>
#include <stdio.h>

#define _(STRING) gettext(STRING)

int main(void) {
    printf("%s\n", _("Hello World!"));
    printf("%s\n", _("Goodbye"));
    return 0;
}
"#;

#[test]
fn test_extract_writes_template() -> Result<()> {
    let test = CliTest::with_file("src/example.c", EXAMPLE_C)?;

    let output = test.run(&["extract"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "✓ Wrote 2 messages (2 occurrences) to locales/messages.pot\n"
    );

    let pot = test.read_file("locales/messages.pot")?;
    assert!(pot.contains("#: src/example.c:8\nmsgid \"Hello World!\"\nmsgstr \"\"\n"));
    assert!(pot.contains("#: src/example.c:9\nmsgid \"Goodbye\"\nmsgstr \"\"\n"));
    assert!(pot.contains("\"Project-Id-Version: PACKAGE 0.0.0\\n\""));
    Ok(())
}

#[test]
fn test_extract_is_deterministic() -> Result<()> {
    let test = CliTest::with_file("main.c", EXAMPLE_C)?;

    test.run(&["extract"])?;
    let first = test.read_file("locales/messages.pot")?;
    test.run(&["extract"])?;
    let second = test.read_file("locales/messages.pot")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_extract_merges_duplicates_across_files() -> Result<()> {
    let test = CliTest::with_file("a.c", "puts(_(\"Quit\"));\n")?;
    test.write_file("b.c", "\n\nputs(_(\"Quit\"));\n")?;

    test.run(&["extract"])?;

    let pot = test.read_file("locales/messages.pot")?;
    assert!(pot.contains("#: a.c:1 b.c:3\nmsgid \"Quit\"\n"), "{}", pot);
    Ok(())
}

#[test]
fn test_extract_with_config_and_output() -> Result<()> {
    let test = CliTest::with_file(
        ".gleanrc.json",
        r#"{
  "keywords": ["N_"],
  "domain": "app",
  "packageName": "Demo",
  "packageVersion": "2.1",
  "commentTag": "TRANSLATORS:"
}"#,
    )?;
    test.write_file(
        "ui.c",
        "/* TRANSLATORS: window title */\nN_(\"Main\");\n_(\"skipped\");\n",
    )?;

    let output = test.run(&["extract", "--output", "out/custom.pot"])?;

    assert_eq!(output.status.code(), Some(0));
    let pot = test.read_file("out/custom.pot")?;
    assert!(pot.contains("Project-Id-Version: Demo 2.1"));
    assert!(pot.contains("#. TRANSLATORS: window title\n#: ui.c:2\nmsgid \"Main\"\n"));
    assert!(!pot.contains("skipped"));
    assert!(!test.root().join("locales/app.pot").exists());
    Ok(())
}

#[test]
fn test_extract_keyword_flag_overrides_config() -> Result<()> {
    let test = CliTest::with_file("a.c", "tr(\"one\"); _(\"two\");\n")?;

    test.run(&["extract", "-k", "tr"])?;

    let pot = test.read_file("locales/messages.pot")?;
    assert!(pot.contains("msgid \"one\""));
    assert!(!pot.contains("msgid \"two\""));
    Ok(())
}

#[test]
fn test_extract_still_writes_with_malformed_literal() -> Result<()> {
    let test = CliTest::with_file("a.c", "_(\"broken);\n_(\"fine\");\n")?;

    let output = test.run(&["extract"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("error: unterminated string literal  malformed-literal"));
    assert!(out.contains("  --> a.c:1:1"));
    let pot = test.read_file("locales/messages.pot")?;
    assert!(pot.contains("msgid \"fine\""));
    Ok(())
}

#[test]
fn test_extract_source_root_flag() -> Result<()> {
    let test = CliTest::with_file("project/src/a.c", "_(\"nested\");\n")?;

    let output = test.run(&["extract", "--source-root", "project"])?;

    assert_eq!(output.status.code(), Some(0));
    let pot = test.read_file("project/locales/messages.pot")?;
    assert!(pot.contains("#: src/a.c:1\n"));
    Ok(())
}
