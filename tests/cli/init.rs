use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_writes_the_built_in_catalog() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Created resolutions.json"));
    assert!(test.root().join("resolutions.json").exists());

    let content = test.read_file("resolutions.json")?;
    let parsed: Value = serde_json::from_str(&content).context("catalog should be valid JSON")?;
    let groups = parsed.as_array().context("catalog should be an array")?;
    assert_eq!(groups.len(), 10);
    assert_eq!(groups[0]["ratio"], "1:1");
    assert_eq!(groups[4]["resolutions"][1]["resolution"], "1920x1080");
    assert_eq!(
        groups[4]["resolutions"][1]["description"],
        "全高清，视频、游戏主流标准"
    );
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file("resolutions.json", "[]")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("already exists"));
    assert_eq!(test.read_file("resolutions.json")?, "[]");
    Ok(())
}

#[test]
fn test_init_output_passes_check() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["init", "table.json"]);
    assert_eq!(run(cmd)?.code, Some(0));

    let mut cmd = test.command();
    cmd.args(["check", "table.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checked 10 ratio groups - no issues found"));
    Ok(())
}

#[test]
fn test_init_output_round_trips_through_queries() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.args(["init", "table.json"]);
    assert_eq!(run(cmd)?.code, Some(0));

    let mut cmd = test.command();
    cmd.args(["describe", "16:10", "1280x800", "--catalog", "table.json"]);
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "WXGA，笔记本电脑显示器\n");
    Ok(())
}
