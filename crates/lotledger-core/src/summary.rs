//! Read-only aggregate views over ledger state.
//!
//! [`InventoryStatus`] folds the current batch queue into per-product
//! totals; [`SalesSummary`] folds the sales log into overall revenue, cost,
//! and margin. Both are pure reads: calling them twice without a mutation
//! in between yields identical results.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{Batch, ProductName, SaleRecord};

/// Current stock of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductStatus {
    /// The product.
    pub product: ProductName,
    /// Units remaining across all batches.
    pub total_quantity: u64,
    /// Acquisition cost of the remaining units.
    pub total_buy_value: Decimal,
    /// Revenue if all remaining units sold at their asking prices.
    pub potential_revenue: Decimal,
    /// The contributing batches, oldest first.
    pub batches: Vec<Batch>,
}

impl ProductStatus {
    fn empty(product: ProductName) -> Self {
        Self {
            product,
            total_quantity: 0,
            total_buy_value: Decimal::ZERO,
            potential_revenue: Decimal::ZERO,
            batches: Vec::new(),
        }
    }

    /// Margin left in the remaining stock: potential revenue minus cost.
    #[must_use]
    pub fn expected_profit(&self) -> Decimal {
        self.potential_revenue - self.total_buy_value
    }
}

/// Snapshot of all current stock, grouped by product.
///
/// Products are listed in order of first appearance in the FIFO queue.
/// Only live batches contribute — a fully consumed product simply does not
/// appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryStatus {
    /// Per-product breakdown.
    pub products: Vec<ProductStatus>,
    /// Units remaining across all products.
    pub total_units: u64,
    /// Acquisition cost of everything in stock.
    pub total_buy_value: Decimal,
    /// Revenue if everything sold at asking prices.
    pub total_potential_revenue: Decimal,
}

impl InventoryStatus {
    /// Fold a batch queue into a status snapshot.
    #[must_use]
    pub fn collect(batches: &[Batch]) -> Self {
        let mut products: Vec<ProductStatus> = Vec::new();

        for batch in batches {
            let idx = match products.iter().position(|p| p.product == batch.product) {
                Some(idx) => idx,
                None => {
                    products.push(ProductStatus::empty(batch.product.clone()));
                    products.len() - 1
                }
            };
            let entry = &mut products[idx];
            entry.total_quantity += u64::from(batch.quantity);
            entry.total_buy_value += batch.buy_value();
            entry.potential_revenue += batch.potential_revenue();
            entry.batches.push(batch.clone());
        }

        let total_units = products.iter().map(|p| p.total_quantity).sum();
        let total_buy_value = products.iter().map(|p| p.total_buy_value).sum();
        let total_potential_revenue = products.iter().map(|p| p.potential_revenue).sum();

        Self {
            products,
            total_units,
            total_buy_value,
            total_potential_revenue,
        }
    }

    /// Look up one product's status by name.
    #[must_use]
    pub fn product(&self, name: &str) -> Option<&ProductStatus> {
        self.products.iter().find(|p| p.product == *name)
    }
}

/// Totals over the full sales log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSummary {
    /// Units sold across all records.
    pub units_sold: u64,
    /// Sum of `quantity_sold x sell_price`.
    pub total_revenue: Decimal,
    /// Sum of `quantity_sold x buy_price`.
    pub total_cost: Decimal,
    /// Revenue minus cost.
    pub total_profit: Decimal,
    /// Profit as a percentage of revenue; zero when there is no revenue.
    pub profit_margin: Decimal,
    /// Number of sale records.
    pub sales_count: usize,
}

impl SalesSummary {
    /// Fold a sales log into summary totals.
    #[must_use]
    pub fn collect(sales: &[SaleRecord]) -> Self {
        let units_sold = sales.iter().map(|r| u64::from(r.quantity_sold)).sum();
        let total_revenue: Decimal = sales.iter().map(SaleRecord::revenue).sum();
        let total_cost: Decimal = sales.iter().map(SaleRecord::cost).sum();
        let total_profit = total_revenue - total_cost;

        let profit_margin = if total_revenue.is_zero() {
            Decimal::ZERO
        } else {
            total_profit / total_revenue * Decimal::ONE_HUNDRED
        };

        Self {
            units_sold,
            total_revenue,
            total_cost,
            total_profit,
            profit_margin,
            sales_count: sales.len(),
        }
    }
}
