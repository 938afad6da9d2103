use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use txgen_core::{BasketItem, Item, MAX_BASKET_ITEMS, MAX_QUANTITY, Transaction};

use crate::catalog::Catalog;
use crate::window::TimeWindow;

/// Lowest cost an item occurrence can be priced at.
pub const MIN_COST: u64 = 59;
/// Highest cost an item occurrence can be priced at.
pub const MAX_COST: u64 = 6058;

/// Random source used for a run.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fresh seed drawn from the thread-local entropy source.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Samples transactions from a catalog within a time window.
#[derive(Debug, Clone)]
pub struct TransactionGenerator<'a> {
    catalog: &'a Catalog,
    window: TimeWindow,
}

impl<'a> TransactionGenerator<'a> {
    pub fn new(catalog: &'a Catalog, window: TimeWindow) -> Self {
        Self { catalog, window }
    }

    /// Generate `n` transactions with ids `0..n`. Non-positive `n` yields none.
    pub fn generate<R: Rng + ?Sized>(&self, n: i64, rng: &mut R) -> Vec<Transaction> {
        let start = Instant::now();
        let count = usize::try_from(n).unwrap_or(0);
        info!(event = "generation_started", requested = n, "generation started");

        let transactions: Vec<Transaction> =
            (0..count).map(|index| self.transaction(index, rng)).collect();

        info!(
            event = "generation_finished",
            records = transactions.len(),
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "generation completed"
        );
        transactions
    }

    fn transaction<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Transaction {
        let basket = self.basket(rng);
        let date = self.window.sample(rng);
        let location = pick(self.catalog.locations(), rng).clone();
        let customer_name = pick(self.catalog.names(), rng).clone();
        let payment_method = *pick(self.catalog.payment_methods(), rng);

        Transaction::new(
            index.to_string(),
            date,
            location,
            customer_name,
            payment_method,
            basket,
        )
    }

    fn basket<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<BasketItem> {
        let items = rng.random_range(1..=MAX_BASKET_ITEMS);
        (0..items)
            .map(|_| {
                let quantity = rng.random_range(1..=MAX_QUANTITY);
                BasketItem {
                    item: self.item(rng),
                    quantity,
                }
            })
            .collect()
    }

    // Cost is drawn per occurrence, so one product can carry several prices.
    fn item<R: Rng + ?Sized>(&self, rng: &mut R) -> Item {
        let products = self.catalog.products();
        let index = rng.random_range(0..products.len());
        Item {
            id: Item::catalog_id(index),
            name: products[index].clone(),
            cost: rng.random_range(MIN_COST..=MAX_COST),
        }
    }
}

fn pick<'t, T, R: Rng + ?Sized>(values: &'t [T], rng: &mut R) -> &'t T {
    &values[rng.random_range(0..values.len())]
}
