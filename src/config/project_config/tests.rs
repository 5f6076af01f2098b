use super::*;
use tempfile::tempdir;

#[test]
fn test_defaults_without_config_file() {
    let dir = tempdir().unwrap();
    let config = load_project_config(dir.path());
    assert_eq!(config, ProjectConfig::default());
    assert_eq!(config.identity.name, "Vijay Ganesh");
    assert_eq!(config.identity.co_attributed(), Some("David L. Dill"));
}

#[test]
fn test_load_toml_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("gitowners.toml"),
        r#"
[identity]
name = "Ada Lovelace"
marker = "lovelace"
co_attributed = ""

[report]
format = "json"
"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.identity.name, "Ada Lovelace");
    assert_eq!(config.identity.marker, "lovelace");
    assert_eq!(config.identity.co_attributed(), None);
    assert_eq!(config.report.format.as_deref(), Some("json"));
    assert_eq!(config.report.verify, None);
}

#[test]
fn test_partial_identity_keeps_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("gitowners.toml"),
        "[identity]\nname = \"Grace Hopper\"\n",
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.identity.name, "Grace Hopper");
    assert_eq!(config.identity.marker, "ganesh");
    assert_eq!(config.identity.co_attributed(), Some("David L. Dill"));
}

#[test]
fn test_load_json_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".gitownersrc.json"),
        r#"{"identity": {"name": "Alan Turing", "marker": "turing"}, "report": {"verify": false}}"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.identity.name, "Alan Turing");
    assert_eq!(config.report.verify, Some(false));
}

#[test]
fn test_invalid_toml_falls_back_to_json() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("gitowners.toml"), "[identity\nname = ").unwrap();
    std::fs::write(
        dir.path().join(".gitownersrc.json"),
        r#"{"identity": {"name": "Alan Turing", "marker": "turing"}}"#,
    )
    .unwrap();

    let config = load_project_config(dir.path());
    assert_eq!(config.identity.name, "Alan Turing");
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("gitowners.toml"), "not = [valid").unwrap();
    assert_eq!(load_project_config(dir.path()), ProjectConfig::default());
}

#[test]
fn test_example_config_parses() {
    let config: ProjectConfig = toml::from_str(example_config()).unwrap();
    assert_eq!(config.identity, IdentityConfig::default());
    assert_eq!(config.report.format.as_deref(), Some("text"));
    assert_eq!(config.report.verify, Some(true));
}
