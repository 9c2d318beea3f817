use anyhow::Result;

use crate::{CliTest, GREETINGS, stderr};

/// Run with `args` and expect a usage error before any generation.
fn assert_usage_error(test: &CliTest, args: &[&str]) -> Result<String> {
    let output = test.command().args(args).output()?;
    assert_eq!(output.status.code(), Some(2), "args: {:?}", args);
    let err = stderr(&output);
    assert!(err.contains("error:"), "expected an error message, got: {}", err);
    Ok(err)
}

#[test]
fn test_missing_input_argument() -> Result<()> {
    let test = CliTest::new()?;
    let err = assert_usage_error(&test, &["-comment", "ja"])?;
    assert!(err.contains("Usage:"));
    assert!(err.contains("<INPUT>"));
    Ok(())
}

#[test]
fn test_java_file_without_package() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;

    let err = assert_usage_error(&test, &["-javaFile", "Messages.java", "messages.origin"])?;

    assert!(err.contains("--javaPackage"));
    assert!(!test.exists("messages"), "no file may be written");

    Ok(())
}

#[test]
fn test_unknown_flag() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;
    assert_usage_error(&test, &["-verbose-mode", "messages.origin"])?;
    assert!(!test.exists("messages"));
    Ok(())
}

#[test]
fn test_missing_flag_value() -> Result<()> {
    let test = CliTest::with_file("messages.origin", GREETINGS)?;
    let err = assert_usage_error(&test, &["messages.origin", "-outputDir"])?;
    assert!(err.contains("--outputDir"));
    Ok(())
}

#[test]
fn test_input_without_dot_needs_output_dir() -> Result<()> {
    let test = CliTest::with_file("origin", GREETINGS)?;

    let err = assert_usage_error(&test, &["origin"])?;

    assert!(err.contains("set --outputDir or --outputFile"));
    assert_eq!(test.read_file("origin")?, GREETINGS);

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert!(output.status.success());
    let help = String::from_utf8_lossy(&output.stdout);
    for flag in ["--outputDir", "--outputFile", "--javaFile", "--javaPackage", "--comment"] {
        assert!(help.contains(flag), "help should mention {}", flag);
    }

    Ok(())
}
