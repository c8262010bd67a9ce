//! Product-keyed aggregations.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{SalesError, SalesResult};
use crate::types::Sale;

/// Total sale amount per product.
///
/// Groups by product name and sums amounts with exact decimal addition.
pub fn total_sale_per_product(sales: &[Sale]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::new();
    for sale in sales {
        *totals
            .entry(sale.product_name.clone())
            .or_insert(Decimal::ZERO) += sale.sale_amount;
    }
    totals
}

/// All sale records per product.
///
/// Groups by product name; within each group the records keep their input
/// order. Every input record appears in exactly one group.
pub fn sales_per_product(sales: &[Sale]) -> HashMap<String, Vec<Sale>> {
    let mut groups: HashMap<String, Vec<Sale>> = HashMap::new();
    for sale in sales {
        groups
            .entry(sale.product_name.clone())
            .or_default()
            .push(sale.clone());
    }
    groups
}

/// The product with the maximum cumulative sale amount, with that total.
///
/// Ties are broken arbitrarily. Fails with [`SalesError::NoData`] on empty
/// input.
pub fn top_product(sales: &[Sale]) -> SalesResult<(String, Decimal)> {
    total_sale_per_product(sales)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1))
        .ok_or(SalesError::NoData)
}

#[cfg(test)]
mod tests {
    use super::{sales_per_product, top_product, total_sale_per_product};
    use crate::error::SalesError;
    use crate::types::Sale;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sale(product: &str, id: i64, day: u32, amount: i64) -> Sale {
        Sale {
            product_name: product.to_string(),
            sale_id: id,
            sale_date: NaiveDate::from_ymd_opt(2014, 12, day)
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            sale_amount: Decimal::from(amount),
        }
    }

    fn sample_sales() -> Vec<Sale> {
        vec![
            sale("Product1", 1, 1, 10),
            sale("Product1", 2, 12, 100),
            sale("Product2", 3, 5, 20),
        ]
    }

    #[test]
    fn totals_group_by_product_and_sum_exactly() {
        let totals = total_sale_per_product(&sample_sales());
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Product1"], Decimal::from(110));
        assert_eq!(totals["Product2"], Decimal::from(20));
    }

    #[test]
    fn totals_sum_to_the_whole_dataset() {
        let sales = sample_sales();
        let sum_of_totals: Decimal = total_sale_per_product(&sales).values().copied().sum();
        let sum_of_amounts: Decimal = sales.iter().map(|s| s.sale_amount).sum();
        assert_eq!(sum_of_totals, sum_of_amounts);
    }

    #[test]
    fn groups_partition_the_input_preserving_order() {
        let sales = sample_sales();
        let groups = sales_per_product(&sales);

        let group_sizes: usize = groups.values().map(|g| g.len()).sum();
        assert_eq!(group_sizes, sales.len());

        let product1 = &groups["Product1"];
        assert_eq!(product1.len(), 2);
        assert_eq!(product1[0].sale_id, 1);
        assert_eq!(product1[1].sale_id, 2);
    }

    #[test]
    fn top_product_matches_the_max_total() {
        let sales = sample_sales();
        let (product, total) = top_product(&sales).unwrap();
        assert_eq!(product, "Product1");
        assert_eq!(total, Decimal::from(110));

        let max_total = total_sale_per_product(&sales)
            .into_values()
            .max()
            .unwrap();
        assert_eq!(total, max_total);
    }

    #[test]
    fn empty_input_yields_empty_mappings_and_no_data() {
        assert!(total_sale_per_product(&[]).is_empty());
        assert!(sales_per_product(&[]).is_empty());
        assert!(matches!(top_product(&[]), Err(SalesError::NoData)));
    }
}
