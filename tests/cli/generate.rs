use std::fs;

use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, GREETINGS, stderr, stdout};

#[test]
fn test_generates_resource_per_language() -> Result<()> {
    let test = CliTest::with_file("conf/messages.origin", GREETINGS)?;

    let output = test.command().arg("conf/messages.origin").output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        test.read_file("conf/messages")?,
        "greeting.bye=Bye\ngreeting.hello=Hello\n"
    );
    assert_eq!(test.read_file("conf/messages.ja")?, "greeting.hello=こんにちは\n");
    assert!(stdout(&output).contains("Generated 2 resource files"));
    assert_eq!(stderr(&output), "");

    Ok(())
}

#[test]
fn test_output_dir_and_file() -> Result<()> {
    let test = CliTest::with_file("origin", GREETINGS)?;

    let output = test
        .command()
        .args(["-outputDir", "out", "-outputFile", "strings", "origin"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("out/strings"));
    assert!(test.exists("out/strings.ja"));
    assert_eq!(test.read_file("origin")?, GREETINGS);

    Ok(())
}

#[test]
fn test_input_without_dot_uses_whole_name_with_output_dir() -> Result<()> {
    let test = CliTest::with_file("origin", GREETINGS)?;

    let output = test.command().args(["-outputDir", "out", "origin"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(test.exists("out/origin"));
    assert!(test.exists("out/origin.ja"));

    Ok(())
}

#[test]
fn test_orphan_key_warning() -> Result<()> {
    let test = CliTest::with_file(
        "messages.origin",
        "greeting.hello=Hello\nfoo.bar[ja]=X\n",
    )?;

    let output = test.command().arg("messages.origin").output()?;

    assert!(output.status.success(), "warnings must not fail the run");
    assert!(stderr(&output).contains(
        "warning: default resource not defined: lang=ja, key=foo.bar [orphan-key]"
    ));
    assert_eq!(test.read_file("messages.ja")?, "foo.bar=X\n");

    Ok(())
}

#[test]
fn test_missing_default_warning() -> Result<()> {
    let test = CliTest::with_file("messages.origin", "greeting.hello[ja]=こんにちは\n")?;

    let output = test.command().arg("messages.origin").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("default resource not found"));
    assert!(test.exists("messages.ja"));
    assert!(!test.exists("messages"));

    Ok(())
}

#[test]
fn test_missing_input_file_fails() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("absent.origin").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to open origin file"));

    Ok(())
}

#[test]
fn test_rerun_is_idempotent() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;
    let args = [
        "-javaFile",
        "gen/Messages.java",
        "-javaPackage",
        "gen",
        "messages.origin",
    ];

    test.command().args(args).output()?;
    let first = (
        test.read_file("messages")?,
        test.read_file("messages.ja")?,
        test.read_file("gen/Messages.java")?,
    );

    test.command().args(args).output()?;
    let second = (
        test.read_file("messages")?,
        test.read_file("messages.ja")?,
        test.read_file("gen/Messages.java")?,
    );

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_if_stale_skips_fresh_outputs() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;
    test.write_file("messages", "untouched\n")?;

    let origin = fs::File::options()
        .write(true)
        .open(test.root().join("messages.origin"))?;
    origin.set_modified(std::time::SystemTime::UNIX_EPOCH)?;

    let output = test
        .command()
        .args(["--if-stale", "messages.origin"])
        .output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("is up to date"));
    assert_eq!(test.read_file("messages")?, "untouched\n");
    assert!(!test.exists("messages.ja"));

    Ok(())
}

#[test]
fn test_if_stale_regenerates_missing_outputs() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;

    let output = test
        .command()
        .args(["--if-stale", "messages.origin"])
        .output()?;

    assert!(output.status.success());
    assert!(test.exists("messages"));
    assert!(test.exists("messages.ja"));

    Ok(())
}
