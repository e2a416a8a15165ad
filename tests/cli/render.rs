use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_render_regenerates_artifact_from_cache() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", r#"{ "preamble": "-- generated\n\n" }"#)?;
    test.write_file(
        "cache/translations.json",
        r#"[
            {"Term":"Sort","Translations":[{"Locale":"frFR","Text":"Trier"}]},
            {"Term":"Bag","Translations":[{"Locale":"frFR","Text":"Sac"},{"Locale":"deDE","Text":"Tasche"}]}
        ]"#,
    )?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().arg("render"));

    assert_eq!(
        test.read_file("core/translations.lua")?,
        r#"-- generated

L.data["Bag"] = {
  ["deDE"] = "Tasche",
  ["frFR"] = "Sac",
}
L.data["Sort"] = {
  ["frFR"] = "Trier",
}
"#
    );

    Ok(())
}

#[test]
fn test_render_honors_output_override() -> Result<()> {
    let test = CliTest::new()?;
    let _settings = test.snapshot_settings().bind_to_scope();

    assert_cmd_snapshot!(test.command().args(["render", "--output", "build/strings.lua"]));

    let artifact = test.read_file("build/strings.lua")?;
    assert!(artifact.contains("THIS FILE IS AUTOGENERATED"));
    assert!(!artifact.contains("L.data["));

    Ok(())
}
