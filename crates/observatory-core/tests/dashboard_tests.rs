use std::fs;

use observatory_core::{ClassSource, Config, Dashboard, DashboardError, SelectionError};
use tempfile::TempDir;

const HIERARCHY: &str = r#"{"@id":"schema:Thing","value":3,"children":[{"@id":"schema:Product","value":2},{"@id":"schema:Person"}]}"#;

fn create_test_config(hierarchy: &str) -> (Config, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("count.json");
    fs::write(&data_file, hierarchy).unwrap();

    let mut config = Config::default();
    config.data.hierarchy_file = data_file.to_string_lossy().to_string();
    config.assets.dir = temp_dir.path().join("assets").to_string_lossy().to_string();
    (config, temp_dir)
}

#[test]
fn test_init_with_fixed_classes() {
    let (config, _temp) = create_test_config(HIERARCHY);

    let dashboard = Dashboard::init(&config).unwrap();
    assert_eq!(dashboard.chart().ids, vec!["schema:Thing", "schema:Product", "schema:Person"]);
    assert_eq!(dashboard.catalog().len(), 20);
    assert_eq!(dashboard.default_class(), "schema:Product");
}

#[test]
fn test_init_with_asset_classes() {
    let (mut config, _temp) = create_test_config(HIERARCHY);
    let plots = config.assets.plots_path();
    fs::create_dir_all(&plots).unwrap();
    fs::write(plots.join("Product_plot.svg"), "<svg/>").unwrap();
    fs::write(plots.join("Event_plot.svg"), "<svg/>").unwrap();
    config.selection.source = ClassSource::Assets;

    let dashboard = Dashboard::init(&config).unwrap();
    assert_eq!(dashboard.catalog().classes(), &["schema:Event", "schema:Product"]);
}

#[test]
fn test_init_missing_asset_dir_fails() {
    let (mut config, _temp) = create_test_config(HIERARCHY);
    config.selection.source = ClassSource::Assets;

    let err = Dashboard::init(&config).unwrap_err();
    assert!(matches!(err, DashboardError::Selection(SelectionError::AssetScan { .. })));
}

#[test]
fn test_init_missing_file_fails() {
    let (mut config, temp) = create_test_config(HIERARCHY);
    config.data.hierarchy_file = temp.path().join("absent.json").to_string_lossy().to_string();

    let err = Dashboard::init(&config).unwrap_err();
    assert!(matches!(err, DashboardError::Hierarchy(_)));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn test_init_malformed_file_fails() {
    let (config, _temp) = create_test_config(r#"{"@id":"A","children":[42]}"#);
    assert!(matches!(Dashboard::init(&config), Err(DashboardError::Hierarchy(_))));
}

#[test]
fn test_init_rejects_malformed_default_class() {
    let (mut config, _temp) = create_test_config(HIERARCHY);
    config.selection.default_class = "Product".to_string();

    let err = Dashboard::init(&config).unwrap_err();
    assert!(matches!(err, DashboardError::Selection(SelectionError::MissingSeparator(_))));
}

#[test]
fn test_select() {
    let (config, _temp) = create_test_config(HIERARCHY);
    let dashboard = Dashboard::init(&config).unwrap();

    let selection = dashboard.select("schema:Person").unwrap();
    assert_eq!(selection.image_path, "assets/plots/Person_plot.svg");
    assert!(dashboard.select("Person").is_err());
}
