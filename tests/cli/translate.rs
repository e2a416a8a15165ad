use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, StubService};

fn setup_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "core/bags.lua",
        r#"
local L = addon:GetModule('Localization')
button:SetText(L:G("Bag"))
label:SetText(L:G('Sort'))
"#,
    )?;
    test.write_file("frames/bank.lua", r#"title:SetText(L:G("Bank")) x(L:G("Bag"))"#)?;
    // vendored libraries are never scanned
    test.write_file("libs/ace.lua", r#"L:G("Vendored")"#)
}

#[test]
fn test_dry_run_lists_pending_terms() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;

    assert_cmd_snapshot!(test.translate_command().arg("--dry-run"));

    assert!(!test.root().join("cache").exists());
    assert!(!test.root().join("core/translations.lua").exists());

    Ok(())
}

#[test]
fn test_missing_api_key() -> Result<()> {
    let test = CliTest::new()?;
    let service = StubService::start()?;
    test.use_service(&service)?;
    setup_sources(&test)?;

    assert_cmd_snapshot!(test.translate_command());

    assert_eq!(service.chat_requests(), 0);
    assert!(!test.root().join("cache/translations.json").exists());

    Ok(())
}

#[test]
fn test_translate_writes_cache_and_artifact() -> Result<()> {
    let test = CliTest::new()?;
    let service = StubService::start()?;
    test.use_service(&service)?;
    setup_sources(&test)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(
        test.translate_command()
            .env("OPENAI_API_KEY", "test-key")
    );

    // three terms over two slots
    assert_eq!(service.chat_requests(), 2);

    let artifact = test.read_file("core/translations.lua")?;
    assert_eq!(
        artifact,
        r#"-- generated

L.data["Bag"] = {
  ["deDE"] = "de:Bag",
  ["frFR"] = "fr:Bag",
}
L.data["Bank"] = {
  ["deDE"] = "de:Bank",
  ["frFR"] = "fr:Bank",
}
L.data["Sort"] = {
  ["deDE"] = "de:Sort",
  ["frFR"] = "fr:Sort",
}
"#
    );

    let cache: serde_json::Value = serde_json::from_str(&test.read_file("cache/translations.json")?)?;
    let terms: Vec<&str> = cache
        .as_array()
        .map(|sets| sets.iter().filter_map(|s| s["Term"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(terms, vec!["Bag", "Bank", "Sort"]);
    assert_eq!(cache[0]["Translations"][0]["Locale"], "deDE");
    assert_eq!(cache[0]["Translations"][1]["Text"], "fr:Bag");

    Ok(())
}

#[test]
fn test_second_run_sends_only_new_terms() -> Result<()> {
    let test = CliTest::new()?;
    let service = StubService::start()?;
    test.use_service(&service)?;
    setup_sources(&test)?;
    let _settings = test.snapshot_settings().bind_to_scope();

    test.translate_command()
        .env("OPENAI_API_KEY", "test-key")
        .output()?;
    assert_eq!(service.chat_requests(), 2);
    let first_artifact = test.read_file("core/translations.lua")?;

    // unchanged tree: nothing to send, identical output
    assert_cmd_snapshot!(
        test.translate_command()
            .env("OPENAI_API_KEY", "test-key")
    );
    assert_eq!(service.chat_requests(), 2);
    assert_eq!(test.read_file("core/translations.lua")?, first_artifact);

    // one new term: one more request
    test.write_file("core/sort.lua", r#"L:G("Sort by name")"#)?;
    assert_cmd_snapshot!(
        test.translate_command()
            .env("OPENAI_API_KEY", "test-key")
    );
    assert_eq!(service.chat_requests(), 3);
    assert!(test.read_file("core/translations.lua")?.contains(r#"L.data["Sort by name"] = {"#));

    Ok(())
}

#[test]
fn test_malformed_cache_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    setup_sources(&test)?;
    test.write_file("cache/translations.json", r#"{"Bag": "Sac"}"#)?;

    let output = test.translate_command().arg("--dry-run").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse cache file"));

    Ok(())
}
