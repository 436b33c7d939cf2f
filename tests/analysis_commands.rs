use std::path::Path;
use std::process::{Command, Output};

const ORDERS: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,product_category_name
o1,c1,delivered,2017-01-05 09:00:00,cama_mesa_banho
o2,c2,delivered,2017-07-21 18:15:00,cama_mesa_banho
o3,c3,delivered,2017-12-01 08:00:00,brinquedos
o4,c3,delivered,2017-12-15 08:00:00,brinquedos
o5,c1,delivered,2017-04-02 12:00:00,beleza_saude
o6,c2,delivered,2017-08-02 12:00:00,beleza_saude
o7,c2,delivered,2017-11-09 12:00:00,beleza_saude
";

const CUSTOMERS: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,01151,sao paulo,SP
c2,u2,20040,rio de janeiro,RJ
c3,u3,30140,belo horizonte,MG
";

fn write_inputs(dir: &Path) {
    std::fs::write(dir.join("olist_orders_dataset.csv"), ORDERS).unwrap();
    std::fs::write(dir.join("olist_customers_dataset.csv"), CUSTOMERS).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seasonscope"))
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn heatmap_prints_table_and_writes_svg() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = run(
        dir.path(),
        &["heatmap", "--category", "cama_mesa_banho", "--output", "chart.svg"],
    );
    assert!(
        output.status.success(),
        "heatmap failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Seasonal Demand Patterns by State: cama_mesa_banho"));
    assert!(stdout.contains("RJ"));
    assert!(stdout.contains("100.00%"));

    let svg = std::fs::read_to_string(dir.path().join("chart.svg")).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn heatmap_for_unknown_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = run(dir.path(), &["heatmap", "--category", "garden"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("garden"), "stderr: {stderr}");
}

#[test]
fn trends_json_is_ranked() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = run(dir.path(), &["trends", "--format", "json", "--limit", "2"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranked = value.as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["category"], "brinquedos");
    assert_eq!(ranked[0]["rank"], 1);
}

#[test]
fn preferences_respects_top_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let output = run(dir.path(), &["preferences", "--top", "2", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["matrix"]["columns"].as_array().unwrap().len(), 2);
    assert_eq!(value["labels"]["title"], "Regional Product Category Preferences");
}

#[test]
fn preferences_uses_config_top_n() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    std::fs::write(
        dir.path().join(".seasonscope.toml"),
        "[analysis]\ntop_n_categories = 1\n",
    )
    .unwrap();

    let output = run(dir.path(), &["preferences", "--format", "markdown"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Regional Product Category Preferences"));
    let header = stdout.lines().find(|l| l.starts_with("| State")).unwrap();
    assert_eq!(header.matches('|').count(), 3);
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["trends"]);
    assert!(!output.status.success());
}
