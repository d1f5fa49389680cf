use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

const CONFIG: &str = r#"{ "languages": ["de", "fr"], "packageName": "Demo" }"#;

fn project() -> Result<CliTest> {
    let test = CliTest::with_file(".gleanrc.json", CONFIG)?;
    test.write_file("main.c", "puts(_(\"Hello\"));\nputs(_(\"Bye\"));\n")?;
    Ok(test)
}

#[test]
fn test_update_dry_run_writes_nothing() -> Result<()> {
    let test = project()?;

    let output = test.run(&["update"])?;

    assert_eq!(output.status.code(), Some(0));
    let expected = "\
Would create locales/po/de/messages.po [de] (2 messages, 0 translated, 2 new, 0 obsolete)
Would create locales/po/fr/messages.po [fr] (2 messages, 0 translated, 2 new, 0 obsolete)

Run with --apply to write 2 files.
";
    assert_eq!(stdout(&output), expected);
    assert!(!test.root().join("locales").exists());
    Ok(())
}

#[test]
fn test_update_apply_creates_po_files() -> Result<()> {
    let test = project()?;

    let output = test.run(&["update", "--apply"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created locales/po/de/messages.po [de]"));

    let po = test.read_file("locales/po/de/messages.po")?;
    assert!(po.starts_with("# de translations for Demo.\n"));
    assert!(po.contains("\"Language: de\\n\"\n"));
    assert!(po.contains("#: main.c:1\nmsgid \"Hello\"\nmsgstr \"\"\n"));
    assert!(!po.contains("#, fuzzy"));
    assert!(test.root().join("locales/po/fr/messages.po").exists());
    Ok(())
}

#[test]
fn test_update_keeps_translations_and_obsolete_entries() -> Result<()> {
    let test = project()?;
    test.write_file(
        "locales/po/de/messages.po",
        r#"# German translations for Demo.
msgid ""
msgstr ""
"Project-Id-Version: Demo 0.9\n"
"Language: de\n"

# reviewed
#: main.c:7
msgid "Hello"
msgstr "Hallo"

msgid "Removed"
msgstr "Entfernt"
"#,
    )?;

    let output = test.run(&["update", "--apply"])?;

    assert!(
        stdout(&output)
            .contains("Updated locales/po/de/messages.po [de] (2 messages, 1 translated, 1 new, 1 obsolete)")
    );

    let po = test.read_file("locales/po/de/messages.po")?;
    assert!(po.starts_with("# German translations for Demo.\n"));
    assert!(po.contains("Project-Id-Version: Demo 0.9"));
    assert!(po.contains("# reviewed\n#: main.c:1\nmsgid \"Hello\"\nmsgstr \"Hallo\"\n"));
    assert!(po.contains("msgid \"Bye\"\nmsgstr \"\"\n"));
    assert!(po.ends_with("\n#~ msgid \"Removed\"\n#~ msgstr \"Entfernt\"\n"), "{}", po);
    Ok(())
}

const TRANSLATED: &str = r#"msgid ""
msgstr ""
"Language: de\n"

#: main.c:1
msgid "Hello"
msgstr "Hallo"
"#;

#[test]
fn test_update_apply_skips_writing_after_malformed_literal() -> Result<()> {
    let test = CliTest::with_file(".gleanrc.json", r#"{ "languages": ["de"] }"#)?;
    test.write_file("locales/po/de/messages.po", TRANSLATED)?;
    test.write_file("main.c", "puts(_(\"Hello));\n")?;

    let output = test.run(&["update", "--apply"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("malformed-literal"), "{}", out);
    assert!(out.contains("Would update locales/po/de/messages.po [de]"), "{}", out);
    assert!(out.contains("✘ Not writing 1 file: fix the errors above first"), "{}", out);
    assert_eq!(test.read_file("locales/po/de/messages.po")?, TRANSLATED);
    Ok(())
}

#[test]
fn test_update_apply_skips_writing_after_unreadable_source() -> Result<()> {
    let test = CliTest::with_file(".gleanrc.json", r#"{ "languages": ["de", "fr"] }"#)?;
    test.write_file("locales/po/de/messages.po", TRANSLATED)?;
    fs::write(
        test.root().join("main.c"),
        b"/* caf\xe9 */\nputs(_(\"Hello\"));\n",
    )?;

    let output = test.run(&["update", "--apply"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("unreadable-source"), "{}", out);
    assert!(out.contains("Not writing 2 files"), "{}", out);
    assert_eq!(test.read_file("locales/po/de/messages.po")?, TRANSLATED);
    assert!(!test.root().join("locales/po/fr").exists());
    Ok(())
}

#[test]
fn test_update_twice_is_up_to_date() -> Result<()> {
    let test = project()?;
    test.run(&["update", "--apply"])?;

    let output = test.run(&["update"])?;

    let out = stdout(&output);
    assert!(out.contains("✓ locales/po/de/messages.po [de] up to date"), "{}", out);
    assert!(!out.contains("--apply"));
    Ok(())
}

#[test]
fn test_update_rejects_broken_po() -> Result<()> {
    let test = project()?;
    test.write_file("locales/po/de/messages.po", "msgid \"a\"\nnonsense\n")?;

    let output = test.run(&["update"])?;

    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
