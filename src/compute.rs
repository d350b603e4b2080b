use crate::data::{DocumentNumber, Error, Loaded, Product, ProductId, Sale, Salesman, Warning};
use rust_decimal::Decimal;
use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashMap},
};

pub type Products = HashMap<ProductId, Product>;

/// Sales read for one salesman, waiting to be merged back into the salesman list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesBatch {
    pub document_number: DocumentNumber,
    pub sales: Vec<Sale>,
}

/// Builds a new salesman list where each salesman owns the sales of every batch
/// carrying their document number, in batch order.
pub fn merge_sales(salesmen: Vec<Salesman>, batches: Vec<SalesBatch>) -> Vec<Salesman> {
    let mut by_number: HashMap<DocumentNumber, Vec<Sale>> = HashMap::new();
    for batch in batches {
        by_number
            .entry(batch.document_number)
            .or_default()
            .extend(batch.sales);
    }
    salesmen
        .into_iter()
        .map(|salesman| {
            let sales = by_number
                .get(&salesman.document_number)
                .cloned()
                .unwrap_or_default();
            salesman.with_sales(sales)
        })
        .collect()
}

/// Sum of `quantity * price` over the salesman's sales. Signs are ignored and sales
/// of unknown products count for nothing.
pub fn total_revenue(salesman: &Salesman, products: &Products) -> Result<Decimal, Error> {
    let overflow = || Error::RevenueOverflow(salesman.document_number);
    salesman
        .sales
        .iter()
        .filter_map(|sale| {
            products
                .get(&sale.product_id)
                .map(|product| Decimal::from(sale.quantity).checked_mul(product.price.abs()))
        })
        .try_fold(Decimal::ZERO, |total, amount| {
            amount
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(overflow)
        })
}

/// Salesmen paired with their revenue, best first. Salesmen with the same revenue
/// keep their input order.
pub fn rank_salesmen<'a>(
    salesmen: &'a [Salesman],
    products: &Products,
) -> Result<Vec<(&'a Salesman, Decimal)>, Error> {
    let mut ranking = salesmen
        .iter()
        .map(|salesman| total_revenue(salesman, products).map(|revenue| (salesman, revenue)))
        .collect::<Result<Vec<_>, Error>>()?;
    ranking.sort_by_key(|&(_, revenue)| Reverse(revenue));
    Ok(ranking)
}

/// Units sold per product id over all salesmen, whether or not the product is known.
pub fn quantities_sold(salesmen: &[Salesman]) -> BTreeMap<ProductId, u64> {
    let mut quantities = BTreeMap::new();
    for sale in salesmen.iter().flat_map(|salesman| &salesman.sales) {
        *quantities.entry(sale.product_id).or_insert(0) += u64::from(sale.quantity);
    }
    quantities
}

/// Known products paired with their units sold, most sold first. Ties stay in
/// product id order. Ids with no matching product are dropped with a warning.
pub fn rank_products<'a>(
    products: &'a Products,
    salesmen: &[Salesman],
) -> Loaded<Vec<(&'a Product, u64)>> {
    let mut sold: Vec<_> = quantities_sold(salesmen).into_iter().collect();
    sold.sort_by_key(|&(_, quantity)| Reverse(quantity));

    let mut loaded = Loaded::new(Vec::with_capacity(sold.len()));
    for (id, quantity) in sold {
        match products.get(&id) {
            Some(product) => loaded.value.push((product, quantity)),
            None => loaded.warnings.push(Warning::UnknownProduct(id)),
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: ProductId, name: &str, price: Decimal) -> (ProductId, Product) {
        (
            id,
            Product {
                id,
                name: name.to_string(),
                price,
            },
        )
    }

    fn sale(product_id: ProductId, quantity: u32) -> Sale {
        Sale {
            product_id,
            quantity,
        }
    }

    fn catalog() -> Products {
        [
            product(1, "Product1", dec!(2.0)),
            product(2, "Product2", dec!(3.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_total_revenue() {
        let salesman =
            Salesman::new("CC", 1, "ANA", "GOMEZ").with_sales([sale(1, 10), sale(2, 5)]);
        assert_eq!(total_revenue(&salesman, &catalog()).unwrap(), dec!(35.0));
    }

    #[test]
    fn test_unknown_product_is_worth_nothing() {
        let salesman =
            Salesman::new("CC", 1, "ANA", "GOMEZ").with_sales([sale(1, 10), sale(99, 500)]);
        assert_eq!(total_revenue(&salesman, &catalog()).unwrap(), dec!(20.0));
    }

    #[test]
    fn test_negative_price_counts_as_positive() {
        let products: Products = [product(1, "Refund", dec!(-1.5))].into_iter().collect();
        let salesman = Salesman::new("CC", 1, "ANA", "GOMEZ").with_sales([sale(1, 4)]);
        assert_eq!(total_revenue(&salesman, &products).unwrap(), dec!(6.0));
    }

    #[test]
    fn test_rank_salesmen_is_stable() {
        let salesmen = vec![
            Salesman::new("CC", 1, "A", "A").with_sales([sale(1, 1)]),
            Salesman::new("CC", 2, "B", "B").with_sales([sale(2, 10)]),
            Salesman::new("CC", 3, "C", "C").with_sales([sale(1, 1)]),
            Salesman::new("CC", 4, "D", "D"),
        ];
        let products = catalog();
        let ranking: Vec<_> = rank_salesmen(&salesmen, &products)
            .unwrap()
            .into_iter()
            .map(|(salesman, revenue)| (salesman.document_number, revenue))
            .collect();
        assert_eq!(
            ranking,
            [(2, dec!(30.0)), (1, dec!(2.0)), (3, dec!(2.0)), (4, dec!(0))]
        );
    }

    #[test]
    fn test_merge_sales() {
        let salesmen = vec![
            Salesman::new("CC", 1, "A", "A"),
            Salesman::new("CC", 2, "B", "B"),
        ];
        let batches = vec![
            SalesBatch {
                document_number: 2,
                sales: vec![sale(1, 1)],
            },
            SalesBatch {
                document_number: 1,
                sales: vec![sale(2, 2)],
            },
            SalesBatch {
                document_number: 2,
                sales: vec![sale(3, 3)],
            },
            SalesBatch {
                document_number: 77,
                sales: vec![sale(4, 4)],
            },
        ];
        let merged = merge_sales(salesmen, batches);
        assert_eq!(merged[0].sales, [sale(2, 2)]);
        assert_eq!(merged[1].sales, [sale(1, 1), sale(3, 3)]);
    }

    #[test]
    fn test_quantities_sold() {
        let salesmen = vec![
            Salesman::new("CC", 1, "A", "A").with_sales([sale(1, 10), sale(2, 5)]),
            Salesman::new("CC", 2, "B", "B").with_sales([sale(1, 3), sale(99, 1)]),
        ];
        let quantities: Vec<_> = quantities_sold(&salesmen).into_iter().collect();
        assert_eq!(quantities, [(1, 13), (2, 5), (99, 1)]);
    }

    #[test]
    fn test_rank_products() {
        let salesmen = vec![
            Salesman::new("CC", 1, "A", "A").with_sales([sale(1, 2), sale(2, 7), sale(99, 50)]),
            Salesman::new("CC", 2, "B", "B").with_sales([sale(1, 5)]),
        ];
        let products = catalog();
        let ranking = rank_products(&products, &salesmen);
        let names: Vec<_> = ranking
            .value
            .iter()
            .map(|(product, quantity)| (product.name.as_str(), *quantity))
            .collect();
        assert_eq!(names, [("Product1", 7), ("Product2", 7)]);
        assert_eq!(ranking.warnings, [Warning::UnknownProduct(99)]);
    }

    #[test]
    fn test_revenue_overflow_is_an_error() {
        let products: Products = [product(1, "Gold", dec!(100000000000000000000))]
            .into_iter()
            .collect();
        let salesman = Salesman::new("CC", 8, "ANA", "GOMEZ").with_sales([sale(1, 1_000_000_000)]);
        assert!(matches!(
            total_revenue(&salesman, &products),
            Err(Error::RevenueOverflow(8))
        ));
        assert!(matches!(
            rank_salesmen(&[salesman], &products),
            Err(Error::RevenueOverflow(8))
        ));
    }

    #[test]
    fn test_revenue_sum_overflow_is_an_error() {
        let products: Products = [product(1, "Gold", dec!(50000000000000000000000000000))]
            .into_iter()
            .collect();
        let salesman =
            Salesman::new("CC", 9, "ANA", "GOMEZ").with_sales([sale(1, 1), sale(1, 1)]);
        assert!(matches!(
            total_revenue(&salesman, &products),
            Err(Error::RevenueOverflow(9))
        ));
    }
}
