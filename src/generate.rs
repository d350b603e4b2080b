//! Sample input files, so the report pipeline has something to chew on.

use crate::{
    config::{PRODUCTS_INFO, SALESMEN_INFO},
    data::{DocumentNumber, Product, ProductId, Sale, Salesman},
};
use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use std::{fs::File, path::Path};

#[derive(Serialize)]
struct SalesmanRow<'a> {
    document_type: &'a str,
    document_number: DocumentNumber,
    first_name: &'a str,
    last_name: &'a str,
}

#[derive(Serialize)]
struct ProductRow<'a> {
    id: ProductId,
    name: &'a str,
    price: Decimal,
}

#[derive(Serialize)]
struct SaleRow {
    product_id: ProductId,
    quantity: u32,
}

fn semicolon_writer<W: std::io::Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_writer(writer)
}

/// Writes one `documentType;documentNumber;firstName;lastName` line per salesman.
pub fn write_salesmen_info<W: std::io::Write>(
    writer: W,
    salesmen: &[Salesman],
) -> Result<(), anyhow::Error> {
    let mut wtr = semicolon_writer(writer);
    for salesman in salesmen {
        wtr.serialize(SalesmanRow {
            document_type: &salesman.document_type,
            document_number: salesman.document_number,
            first_name: &salesman.first_name,
            last_name: &salesman.last_name,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one `productId;productName;price` line per product.
pub fn write_products_info<W: std::io::Write>(
    writer: W,
    products: &[Product],
) -> Result<(), anyhow::Error> {
    let mut wtr = semicolon_writer(writer);
    for product in products {
        wtr.serialize(ProductRow {
            id: product.id,
            name: &product.name,
            price: product.price,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a `documentType;documentNumber` header followed by one
/// `productId;quantity` line per sale.
pub fn write_sales_file<W: std::io::Write>(
    writer: W,
    salesman: &Salesman,
    sales: &[Sale],
) -> Result<(), anyhow::Error> {
    let mut wtr = semicolon_writer(writer);
    wtr.serialize((&salesman.document_type, salesman.document_number))?;
    for sale in sales {
        wtr.serialize(SaleRow {
            product_id: sale.product_id,
            quantity: sale.quantity,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// A full set of input files: who sells, what they sell, and the sales every
/// salesman reports in their first sales file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleData {
    pub salesmen: Vec<Salesman>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
}

impl Default for SampleData {
    fn default() -> Self {
        let product = |id: ProductId, price: Decimal| Product {
            id,
            name: format!("Product{id}"),
            price,
        };
        let sale = |product_id, quantity| Sale {
            product_id,
            quantity,
        };
        Self {
            salesmen: vec![
                Salesman::new("CC", 1055075, "AMILCAR", "BOSCAN"),
                Salesman::new("CC", 1122334, "GILBERTO", "SANTAROSA"),
                Salesman::new("CC", 2233445, "ANTONIO", "BANDERAS"),
            ],
            products: vec![
                product(1, Decimal::new(250, 2)),
                product(2, Decimal::new(300, 2)),
                product(3, Decimal::new(475, 2)),
            ],
            sales: vec![sale(1, 10), sale(2, 5), sale(3, 7)],
        }
    }
}

impl SampleData {
    /// Writes the salesmen info, the products info and `{documentNumber}_sales_1.txt`
    /// for each salesman into `dir`.
    pub fn write_to(&self, dir: &Path) -> anyhow::Result<()> {
        for salesman in &self.salesmen {
            let path = dir.join(format!("{}_sales_1.txt", salesman.document_number));
            write_sales_file(create(&path)?, salesman, &self.sales)
                .with_context(|| format!("Couldn't write {}", path.display()))?;
            tracing::info!("Sales file generated: {}", path.display());
        }

        let path = dir.join(SALESMEN_INFO);
        write_salesmen_info(create(&path)?, &self.salesmen)
            .with_context(|| format!("Couldn't write {}", path.display()))?;
        tracing::info!("Salesmen info file generated: {}", path.display());

        let path = dir.join(PRODUCTS_INFO);
        write_products_info(create(&path)?, &self.products)
            .with_context(|| format!("Couldn't write {}", path.display()))?;
        tracing::info!("Products info file generated: {}", path.display());

        Ok(())
    }
}

fn create(path: &Path) -> anyhow::Result<File> {
    File::create(path).with_context(|| format!("Couldn't create {}", path.display()))
}
