use std::{fs, time::Duration};

use carousel_config::{
    SettingsGuardRailError, SettingsLoadError, SettingsLoader,
};
use carousel_model::WrapMode;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn loader(dir: &TempDir) -> SettingsLoader {
    // Point at a missing .env so the working directory never leaks in.
    SettingsLoader::new()
        .with_env_file(dir.path().join("absent.env"))
        .without_process_env()
}

#[test]
fn file_values_are_applied() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "carousel.toml",
        r#"
[carousel]
wrap = "loop"
slides_per_view = 2
autoplay = "6s"
rubber_band = 0.4
resize_debounce = "150ms"
"#,
    );

    let load = loader(&dir).with_config_path(&path).load().unwrap();

    assert_eq!(load.settings.wrap, WrapMode::Loop);
    assert_eq!(load.settings.slides_per_view, 2);
    assert_eq!(load.settings.autoplay, Some(Duration::from_secs(6)));
    assert_eq!(load.settings.rubber_band, 0.4);
    assert_eq!(load.settings.resize_debounce, Duration::from_millis(150));
    assert_eq!(load.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(!load.metadata.env_file_loaded);
    assert!(load.warnings.is_empty());
}

#[test]
fn env_file_overrides_the_settings_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "carousel.toml", "[carousel]\nwrap = \"loop\"\n");
    let env = write(
        &dir,
        ".env",
        "CAROUSEL_WRAP=finite\nCAROUSEL_REDUCED_MOTION=yes\n",
    );

    let load = SettingsLoader::new()
        .with_config_path(&config)
        .with_env_file(&env)
        .without_process_env()
        .load()
        .unwrap();

    assert_eq!(load.settings.wrap, WrapMode::Finite);
    assert!(load.settings.reduced_motion);
    assert!(load.metadata.env_file_loaded);
    assert_eq!(
        load.metadata.env_overrides,
        vec!["CAROUSEL_WRAP", "CAROUSEL_REDUCED_MOTION"]
    );
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = loader(&dir)
        .with_config_path(dir.path().join("nope.toml"))
        .load()
        .unwrap_err();
    assert!(matches!(err, SettingsLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_toml_reports_the_path() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "carousel.toml", "[carousel\nwrap = ");
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    match err {
        SettingsLoadError::Parse { path: reported, .. } => {
            assert_eq!(reported, path)
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn guard_rails_reject_impossible_values() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "carousel.toml", "[carousel]\nswipe_ratio = 2.0\n");
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    assert!(matches!(
        err,
        SettingsLoadError::GuardRail(
            SettingsGuardRailError::SwipeRatioOutOfRange { .. }
        )
    ));
}

#[test]
fn odd_values_load_with_warnings() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "carousel.toml",
        "[carousel]\nautoplay = \"500ms\"\nresize_debounce = \"3s\"\n",
    );
    let load = loader(&dir).with_config_path(&path).load().unwrap();
    assert_eq!(load.warnings.len(), 2);
}

#[test]
fn bad_duration_names_the_key() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "carousel.toml",
        "[carousel]\ncontrol_recheck = \"whenever\"\n",
    );
    let err = loader(&dir).with_config_path(&path).load().unwrap_err();
    assert!(err.to_string().contains("carousel.control_recheck"));
}
