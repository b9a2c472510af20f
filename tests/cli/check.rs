use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_check_clean_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "ratio": "16:9", "resolutions": [
                { "resolution": "1280x720", "description": "HD" },
                { "resolution": "1920x1080", "description": "Full HD" }
            ] },
            { "ratio": "4:3", "resolutions": [ { "resolution": "640x480" } ] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 2 ratio groups - no issues found"));
    Ok(())
}

#[test]
fn test_check_duplicate_ratio() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "ratio": "16:9", "resolutions": [ { "resolution": "1920x1080" } ] },
            { "ratio": "16:9", "resolutions": [ { "resolution": "1280x720" } ] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("error: \"16:9\"  duplicate-ratio"));
    assert!(out.stdout.contains("--> catalog.json (group 1)"));
    assert!(out.stdout.contains("1 problems (1 error, 0 warnings)"));
    Ok(())
}

#[test]
fn test_check_duplicate_resolution() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "ratio": "1:1", "resolutions": [
                { "resolution": "64x64" },
                { "resolution": "64x64" }
            ] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("duplicate-resolution"));
    assert!(out.stdout.contains("appears twice under \"1:1\""));
    Ok(())
}

#[test]
fn test_check_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "ratio": "cinematic", "resolutions": [ { "resolution": "1920x1080" } ] },
            { "ratio": "16:9", "resolutions": [] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("bad-ratio-token"));
    assert!(out.stdout.contains("empty-group"));
    assert!(out.stdout.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_check_malformed_json_is_a_hard_error() -> Result<()> {
    let test = CliTest::with_file("catalog.json", "{ not json ]")?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Error:"));
    assert!(out.stderr.contains("failed to parse catalog file"));
    Ok(())
}

#[test]
fn test_check_missing_file_is_a_hard_error() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["check", "missing.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("failed to read catalog file"));
    Ok(())
}

#[test]
fn test_check_accepts_original_field_labels() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "比例": "9:16", "分辨率": [
                { "resolution": "720x1280", "说明": "竖版高清视频" }
            ] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["check", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no issues found"));
    Ok(())
}
