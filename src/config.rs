use std::path::{Path, PathBuf};

pub const SALESMEN_INFO: &str = "salesmen_info.txt";
pub const PRODUCTS_INFO: &str = "products_info.txt";
pub const SALES_REPORT: &str = "sales_report.csv";
pub const PRODUCT_REPORT: &str = "product_report.csv";

/// Where the pipeline reads its inputs and writes its reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub salesmen_info: PathBuf,
    pub products_info: PathBuf,
    /// Directory holding the `{documentNumber}_sales_{n}.txt` files
    pub sales_dir: PathBuf,
    pub sales_report: PathBuf,
    pub product_report: PathBuf,
}

impl Config {
    /// Same file names as the default configuration, all inside `dir`.
    pub fn rooted_at(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            salesmen_info: dir.join(SALESMEN_INFO),
            products_info: dir.join(PRODUCTS_INFO),
            sales_dir: dir.to_path_buf(),
            sales_report: dir.join(SALES_REPORT),
            product_report: dir.join(PRODUCT_REPORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            salesmen_info: SALESMEN_INFO.into(),
            products_info: PRODUCTS_INFO.into(),
            sales_dir: ".".into(),
            sales_report: SALES_REPORT.into(),
            product_report: PRODUCT_REPORT.into(),
        }
    }
}
