use std::process::Command;

#[test]
fn init_creates_valid_toml() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_seasonscope"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "seasonscope init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let config_path = dir.path().join(".seasonscope.toml");
    assert!(config_path.exists(), ".seasonscope.toml should exist");

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[chart]"));
    assert!(content.contains("[analysis]"));

    // Commented-out defaults parse back to the built-in defaults.
    let config = seasonscope_core::SeasonConfig::from_toml(&content).unwrap();
    assert_eq!(config.analysis.top_n_categories, 10);
    let _raw: toml::Value = toml::from_str(&content).unwrap();
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".seasonscope.toml"), "# existing").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_seasonscope"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let content = std::fs::read_to_string(dir.path().join(".seasonscope.toml")).unwrap();
    assert_eq!(content, "# existing");
}
