use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_missing_input_reports_error_once() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_sales_reports"))
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("salesmen_info.txt").count(), 1);
    assert!(!stderr.contains("Error: "));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generated_files_feed_the_reports() {
    let dir = TempDir::new().unwrap();
    let generated = Command::new(env!("CARGO_BIN_EXE_generate_info_files"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(generated.status.success());

    let reports = Command::new(env!("CARGO_BIN_EXE_sales_reports"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(reports.status.success());
    assert!(dir.path().join("sales_report.csv").exists());
    assert!(dir.path().join("product_report.csv").exists());
}
