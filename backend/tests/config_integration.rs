mod support;

use accident_explorer::config::ExplorerConfig;
use accident_explorer::error::ExplorerError;
use accident_explorer::services::Dashboard;
use support::{with_scoped_env, write_accident_csv};

#[test]
fn test_env_overrides_apply() {
    let config = with_scoped_env(
        &[
            ("EXPLORER_DATA_PATH", Some("/data/accidents.json")),
            ("EXPLORER_SEED", Some("7")),
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9090")),
        ],
        || ExplorerConfig::default().apply_env_overrides().unwrap(),
    );
    assert_eq!(config.dataset.path, "/data/accidents.json");
    assert_eq!(config.dataset.seed, 7);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
}

#[test]
fn test_bad_port_is_configuration_error() {
    let result = with_scoped_env(&[("PORT", Some("eighty"))], || {
        ExplorerConfig::default().apply_env_overrides()
    });
    assert!(matches!(result, Err(ExplorerError::Configuration { .. })));
}

#[test]
fn test_config_file_drives_dashboard() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_accident_csv(dir.path(), 3_000, 2);
    let config_path = dir.path().join("explorer.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[dataset]
path = "{}"

[defaults]
sample_size = 2000
point_opacity = 0.3
color_field = "weather_conditions"
shape_field = "accident_severity"
size_field = "(none)"
layout = "row"
"#,
            data.display().to_string().replace('\\', "/")
        ),
    )
    .unwrap();

    let config = ExplorerConfig::from_file(&config_path).unwrap();
    let dash = Dashboard::from_config(&config).unwrap();
    let settings = dash.settings();
    assert_eq!(dash.dataset().len(), 3_000);
    assert_eq!(dash.sample().len(), 2_000);
    assert_eq!(settings.point_opacity, 0.3);
    assert_eq!(settings.color_field, "weather_conditions");
    assert_eq!(settings.pie_field, "day_of_week");
    assert_eq!(settings.shape_field.as_deref(), Some("accident_severity"));
    assert!(settings.size_field.is_none());
    assert_eq!(settings.layout.as_str(), "row");
}

#[test]
fn test_missing_dataset_is_load_error() {
    let mut config = ExplorerConfig::default();
    config.dataset.path = "/definitely/not/here.csv".to_string();
    let err = Dashboard::from_config(&config).unwrap_err();
    assert!(matches!(err, ExplorerError::Load { .. }));
    assert_eq!(err.context().operation.as_deref(), Some("load_dataset"));
}
