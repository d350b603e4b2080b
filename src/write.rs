use crate::data::{Product, Salesman};
use rust_decimal::Decimal;
use serde::Serialize;

/// One line of the sales report: `fullName;totalRevenue`.
#[derive(Serialize)]
struct SalesReportRow {
    full_name: String,
    total_revenue: Decimal,
}

/// One line of the product report: `productName;price;totalQuantity`.
#[derive(Serialize)]
struct ProductReportRow<'a> {
    name: &'a str,
    price: Decimal,
    total_quantity: u64,
}

fn semicolon_writer<W: std::io::Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer)
}

/// Revenue without trailing zeros but with at least one decimal: `35.0`, `73.25`, `0.0`.
fn revenue_for_report(revenue: Decimal) -> Decimal {
    let mut revenue = revenue.normalize();
    if revenue.scale() == 0 {
        revenue.rescale(1);
    }
    revenue
}

/// Writes salesmen with their revenue, in the order given.
pub fn write_sales_report<'a, W: std::io::Write>(
    writer: W,
    ranking: impl IntoIterator<Item = (&'a Salesman, Decimal)>,
) -> Result<(), anyhow::Error> {
    let mut wtr = semicolon_writer(writer);
    for (salesman, total_revenue) in ranking {
        wtr.serialize(SalesReportRow {
            full_name: salesman.full_name(),
            total_revenue: revenue_for_report(total_revenue),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes products with the units sold, in the order given.
pub fn write_product_report<'a, W: std::io::Write>(
    writer: W,
    ranking: impl IntoIterator<Item = (&'a Product, u64)>,
) -> Result<(), anyhow::Error> {
    let mut wtr = semicolon_writer(writer);
    for (product, total_quantity) in ranking {
        wtr.serialize(ProductReportRow {
            name: &product.name,
            price: product.price,
            total_quantity,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
