use crate::data::{
    DocumentNumber, Error, Loaded, Product, ProductId, Sale, Salesman, Warning,
};
use rust_decimal::Decimal;
use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
    str::FromStr,
};

/// All input files share the same shape: `;`-separated fields, no header row, and
/// lines that don't all have the same number of fields.
fn semicolon_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader)
}

/// Decodes every field of a line, replacing bytes that aren't UTF-8 instead of
/// failing on them.
fn decode(record: &csv::ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// `a;b;;` has two fields, not four.
fn drop_trailing_empty(fields: &mut Vec<String>) {
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
}

/// Reads `documentType;documentNumber;firstName;lastName` lines. Any bad line fails
/// the whole load.
pub fn read_salesmen<R: Read>(reader: R) -> Result<Vec<Salesman>, Error> {
    let mut rdr = semicolon_reader(reader);
    let mut salesmen = Vec::new();
    for result in rdr.byte_records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        let mut fields = decode(&record);
        drop_trailing_empty(&mut fields);
        let [document_type, number, first_name, last_name, ..] = fields.as_slice() else {
            return Err(Error::MissingField {
                line,
                expected: 4,
                found: fields.len(),
            });
        };
        let document_number =
            number
                .trim()
                .parse::<DocumentNumber>()
                .map_err(|_| Error::BadDocumentNumber {
                    line,
                    value: number.clone(),
                })?;
        salesmen.push(Salesman::new(
            document_type.as_str(),
            document_number,
            first_name.as_str(),
            last_name.as_str(),
        ));
    }
    Ok(salesmen)
}

/// Reads `productId;productName;price` lines into a map keyed by id. Quotes and
/// surrounding blanks are ignored; lines that don't make sense are skipped.
pub fn read_products<R: Read>(reader: R) -> Result<Loaded<HashMap<ProductId, Product>>, Error> {
    let mut rdr = semicolon_reader(reader);
    let mut loaded = Loaded::new(HashMap::new());
    for result in rdr.byte_records() {
        let record = result?;
        let mut fields: Vec<String> = decode(&record)
            .into_iter()
            .map(|field| field.replace('"', "").trim().to_string())
            .collect();
        drop_trailing_empty(&mut fields);
        let line = fields.join(";");
        let [id, name, price] = fields.as_slice() else {
            loaded.warnings.push(Warning::MalformedProduct { line });
            continue;
        };
        match (id.parse::<ProductId>(), Decimal::from_str(price)) {
            (Ok(id), Ok(price)) => {
                loaded.value.insert(
                    id,
                    Product {
                        id,
                        name: name.clone(),
                        price,
                    },
                );
            }
            _ => loaded.warnings.push(Warning::BadProductNumber { line }),
        }
    }
    Ok(loaded)
}

/// Lists `{document_number}_sales_{n}.txt` in `dir` for n = 1, 2, ... up to the
/// first one that doesn't exist.
pub fn sales_files(dir: &Path, document_number: DocumentNumber) -> Vec<PathBuf> {
    (1..)
        .map(|index| dir.join(format!("{document_number}_sales_{index}.txt")))
        .take_while(|path| path.exists())
        .collect()
}

/// Reads one sales file. The first line restates the salesman and is skipped
/// whatever it holds; every other line is `productId;quantity`. `path` only shows
/// up in warnings.
pub fn read_sales<R: Read>(reader: R, path: &Path) -> Result<Loaded<Vec<Sale>>, Error> {
    let mut reader = BufReader::new(reader);
    reader.read_until(b'\n', &mut Vec::new())?;

    let mut rdr = semicolon_reader(reader);
    let mut loaded = Loaded::new(Vec::new());
    for result in rdr.byte_records() {
        let record = result?;
        let mut fields = decode(&record);
        let line = fields.join(";");
        drop_trailing_empty(&mut fields);
        let [product_id, quantity, ..] = fields.as_slice() else {
            loaded.warnings.push(Warning::MalformedSale {
                path: path.to_path_buf(),
                line,
            });
            continue;
        };
        match (
            product_id.trim().parse::<ProductId>(),
            quantity.trim().parse::<i32>(),
        ) {
            (Ok(product_id), Ok(quantity)) => loaded.value.push(Sale {
                product_id,
                quantity: quantity.unsigned_abs(),
            }),
            _ => loaded.warnings.push(Warning::BadSaleNumber {
                path: path.to_path_buf(),
                line,
            }),
        }
    }
    Ok(loaded)
}
