use crate::{
    compute::{merge_sales, rank_products, rank_salesmen, Products, SalesBatch},
    config::Config,
    data::{Loaded, Salesman, Warning},
    read::{read_products, read_salesmen, read_sales, sales_files},
    write::{write_product_report, write_sales_report},
};
use anyhow::Context;
use std::{fs::File, path::Path};

/// What a successful run leaves behind besides the two report files.
#[derive(Debug, Default)]
pub struct Report {
    pub warnings: Vec<Warning>,
}

fn open(path: &Path) -> anyhow::Result<File> {
    File::open(path).with_context(|| format!("Couldn't open {}", path.display()))
}

fn create(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("Couldn't create {}", path.display()))
}

pub fn load_salesmen(path: &Path) -> anyhow::Result<Vec<Salesman>> {
    read_salesmen(open(path)?).with_context(|| format!("Couldn't load {}", path.display()))
}

pub fn load_products(path: &Path) -> anyhow::Result<Loaded<Products>> {
    read_products(open(path)?).with_context(|| format!("Couldn't load {}", path.display()))
}

/// Reads every sales file of every salesman in `dir` and returns the salesmen
/// with their sales attached.
pub fn load_sales(dir: &Path, salesmen: Vec<Salesman>) -> anyhow::Result<Loaded<Vec<Salesman>>> {
    let mut warnings = Vec::new();
    let mut batches = Vec::new();
    for salesman in &salesmen {
        let files = sales_files(dir, salesman.document_number);
        if files.is_empty() {
            warnings.push(Warning::NoSalesFiles(salesman.document_number));
            continue;
        }
        for path in files {
            tracing::info!("Processing sales file {}", path.display());
            let loaded = read_sales(open(&path)?, &path)
                .with_context(|| format!("Couldn't load {}", path.display()))?;
            warnings.extend(loaded.warnings);
            batches.push(SalesBatch {
                document_number: salesman.document_number,
                sales: loaded.value,
            });
        }
    }
    Ok(Loaded {
        value: merge_sales(salesmen, batches),
        warnings,
    })
}

/// Loads everything `config` points to and writes both reports.
pub fn run(config: &Config) -> anyhow::Result<Report> {
    let mut report = Report::default();

    let salesmen = load_salesmen(&config.salesmen_info)?;
    let products = load_products(&config.products_info)?.unwrap_logged(&mut report.warnings);
    let salesmen =
        load_sales(&config.sales_dir, salesmen)?.unwrap_logged(&mut report.warnings);

    let ranking = rank_salesmen(&salesmen, &products)?;
    write_sales_report(create(&config.sales_report)?, ranking)?;
    tracing::info!("Sales report written to {}", config.sales_report.display());

    let ranking = rank_products(&products, &salesmen).unwrap_logged(&mut report.warnings);
    write_product_report(create(&config.product_report)?, ranking)?;
    tracing::info!(
        "Product report written to {}",
        config.product_report.display()
    );

    Ok(report)
}
