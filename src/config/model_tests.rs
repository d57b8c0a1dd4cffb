use super::*;

#[test]
fn default_required_dirs_keep_declared_order() {
    let config = AuditConfig::default();
    assert_eq!(
        config.structure.required_dirs,
        vec![
            "notebooks",
            "notebooks/scripts",
            "notebooks/configs",
            "deploy",
            "docs"
        ]
    );
}

#[test]
fn default_compose_uses_docker_with_ten_second_timeout() {
    let config = ComposeConfig::default();
    assert_eq!(config.validator[0], "docker");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.files.len(), 2);
}

#[test]
fn default_report_limits() {
    let config = AuditConfig::default();
    assert_eq!(config.report.detail_limit, 5);
    assert_eq!(config.syntax.max_errors, 10);
    assert_eq!(config.report.text_file, "audit_report.txt");
    assert_eq!(config.report.json_file, "audit_report.json");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[structure]
required_dirs = ["src"]
"#;
    let config: AuditConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.structure.required_dirs, vec!["src"]);
    assert_eq!(config.dependencies, DependencyConfig::default());
    assert_eq!(config.compose, ComposeConfig::default());
}

#[test]
fn partial_section_keeps_field_defaults() {
    let toml_str = r#"
[compose]
timeout_secs = 3
"#;
    let config: AuditConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.compose.timeout_secs, 3);
    assert_eq!(config.compose.files, ComposeConfig::default().files);
}

#[test]
fn manifest_mode_parses_lowercase() {
    let toml_str = r#"
[dependencies]
mode = "text"
"#;
    let config: AuditConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.dependencies.mode, ManifestMode::Text);
    assert_eq!(config.dependencies.manifest, "pyproject.toml");
}

#[test]
fn unknown_manifest_mode_is_rejected() {
    let toml_str = r#"
[dependencies]
mode = "yaml"
"#;
    assert!(toml::from_str::<AuditConfig>(toml_str).is_err());
}

#[test]
fn empty_validator_disables_external_tool() {
    let toml_str = r"
[compose]
validator = []
";
    let config: AuditConfig = toml::from_str(toml_str).unwrap();
    assert!(config.compose.validator.is_empty());
}
