use bundlescope::config::Config;
use bundlescope::BundleError;
use std::fs;
use std::path::PathBuf;

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bundlescope.toml");
    fs::write(
        &path,
        "dir = \"out\"\nprefix = \"chunk-\"\ndump_prefix = \"chunk-core\"\nwindow = 4000\nnames_limit = 80\n",
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();

    assert_eq!(config.dir, PathBuf::from("out"));
    assert_eq!(config.prefix, "chunk-");
    assert_eq!(config.dump_prefix, "chunk-core");
    assert_eq!(config.window, 4000);
    assert_eq!(config.names_limit, 80);
    assert!(!config.sorted);
}

#[test]
fn defaults_match_vite_layout() {
    let config = Config::default();
    assert_eq!(config.dir, PathBuf::from("dist/assets"));
    assert_eq!(config.prefix, "vendor-");
    assert_eq!(config.dump_prefix, "vendor-misc");
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Config::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, BundleError::FileSystem { .. }));
}

#[test]
fn zero_window_in_file_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bundlescope.toml");
    fs::write(&path, "window = 0\n").unwrap();

    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, BundleError::Config { .. }));
}
