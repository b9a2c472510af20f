use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_list_built_in_table() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("list");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("16:9"));
    assert!(out.stdout.contains("9:21"));
    assert!(out.stdout.contains("10 ratio classes"));
    Ok(())
}

#[test]
fn test_list_falls_back_when_catalog_is_missing() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["list", "--catalog", "nope.json"]);
    let out = run(cmd)?;

    // The built-in table still answers; the rejection is only a warning.
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("10 ratio classes"));
    assert!(out.stderr.contains("using the built-in table"));
    assert!(out.stderr.contains("-v"));
    Ok(())
}

#[test]
fn test_list_verbose_fallback_shows_reason() -> Result<()> {
    let test = CliTest::with_file("broken.json", "{ not json ]")?;

    let mut cmd = test.command();
    cmd.args(["list", "--catalog", "broken.json", "--verbose"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stderr.contains("reason:"));
    assert!(out.stderr.contains("failed to parse catalog JSON"));
    Ok(())
}

#[test]
fn test_list_custom_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "catalog.json",
        r#"[
            { "ratio": "16:9", "resolutions": [ { "resolution": "1920x1080" } ] },
            { "ratio": "1:1", "resolutions": [
                { "resolution": "64x64" },
                { "resolution": "256x256" }
            ] }
        ]"#,
    )?;

    let mut cmd = test.command();
    cmd.args(["list", "--catalog", "catalog.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("1 resolution\n"));
    assert!(out.stdout.contains("2 resolutions"));
    assert!(out.stdout.contains("2 ratio classes"));
    Ok(())
}

#[test]
fn test_show_square_group_in_order() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["show", "1:1"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    let positions: Vec<usize> = ["64x64", "256x256", "512x512", "1024x1024"]
        .iter()
        .map(|token| out.stdout.find(token).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[test]
fn test_show_single_entry_group() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["show", "9:21"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("1080x2520"));
    assert!(out.stdout.contains("超长条屏显示"));
    Ok(())
}

#[test]
fn test_show_unknown_ratio_fails() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["show", "5:4"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("no resolutions for ratio \"5:4\""));
    Ok(())
}
