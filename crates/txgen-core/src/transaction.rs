use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry as it appears inside a basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier derived from the catalog index (e.g. `item12`).
    pub id: String,
    pub name: String,
    /// Price of this occurrence. Not stable per product.
    pub cost: u64,
}

impl Item {
    /// Build the catalog identifier for a product index.
    pub fn catalog_id(index: usize) -> String {
        format!("item{index}")
    }
}

/// An item paired with the quantity bought.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketItem {
    pub item: Item,
    pub quantity: u32,
}

impl BasketItem {
    /// Cost of this line (`cost * quantity`).
    pub fn line_total(&self) -> u64 {
        self.item.cost * u64::from(self.quantity)
    }
}

/// How the customer paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Card, PaymentMethod::Cash];
}

/// A synthetic retail transaction.
///
/// `total` always equals the sum of the basket line totals. Use
/// [`Transaction::new`] to build one so the total is computed rather than
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Sequential identifier, unique within a run.
    pub id: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub customer_name: String,
    pub basket: Vec<BasketItem>,
    pub total: u64,
    pub payment_method: PaymentMethod,
}

impl Transaction {
    pub fn new(
        id: String,
        date: DateTime<Utc>,
        location: String,
        customer_name: String,
        payment_method: PaymentMethod,
        basket: Vec<BasketItem>,
    ) -> Self {
        let total = Self::basket_total(&basket);
        Self {
            id,
            date,
            location,
            customer_name,
            basket,
            total,
            payment_method,
        }
    }

    /// Sum of `cost * quantity` over a basket.
    pub fn basket_total(basket: &[BasketItem]) -> u64 {
        basket.iter().map(BasketItem::line_total).sum()
    }
}
