use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

pub type DocumentNumber = i64;
pub type ProductId = i32;

/// A salesperson as listed in the salesmen info file, together with every sale
/// found in their sales files. Identity fields never change once loaded; `sales`
/// only gets filled through `with_sales`, which hands back a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Salesman {
    pub document_type: String,
    pub document_number: DocumentNumber,
    pub first_name: String,
    pub last_name: String,
    pub sales: Vec<Sale>,
}

impl Salesman {
    pub fn new(
        document_type: impl Into<String>,
        document_number: DocumentNumber,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            document_number,
            first_name: first_name.into(),
            last_name: last_name.into(),
            sales: Vec::new(),
        }
    }

    /// Returns the same salesperson with `sales` appended to the ones it already has.
    #[must_use]
    pub fn with_sales(mut self, sales: impl IntoIterator<Item = Sale>) -> Self {
        self.sales.extend(sales);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
}

/// One line of a sales file. The quantity is stored without its sign: negative
/// quantities in the input are read as their absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sale {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A value together with everything that went wrong while building it but wasn't
/// bad enough to stop the run.
#[derive(Debug, PartialEq, Eq)]
pub struct Loaded<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> Loaded<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Logs every warning, then moves them into `sink` and returns the bare value.
    pub fn unwrap_logged(self, sink: &mut Vec<Warning>) -> T {
        for warning in &self.warnings {
            tracing::warn!("{warning}");
        }
        sink.extend(self.warnings);
        self.value
    }
}

/// Problems that stop the run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Line {line}: expected {expected} fields, found {found}")]
    MissingField {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("Line {line}: invalid document number {value:?}")]
    BadDocumentNumber { line: u64, value: String },
    #[error("Revenue of salesman {0} is too large to compute")]
    RevenueOverflow(DocumentNumber),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems that are reported and then skipped over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    #[error("Malformed product line: {line}")]
    MalformedProduct { line: String },
    #[error("Invalid number in product line: {line}")]
    BadProductNumber { line: String },
    #[error("Malformed sale line in {}: {line}", path.display())]
    MalformedSale { path: PathBuf, line: String },
    #[error("Invalid number in sale line in {}: {line}", path.display())]
    BadSaleNumber { path: PathBuf, line: String },
    #[error("No sales files found for salesman {0}")]
    NoSalesFiles(DocumentNumber),
    #[error("Product not found for id {0}")]
    UnknownProduct(ProductId),
}
