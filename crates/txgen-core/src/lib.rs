//! Core record types for txgen.
//!
//! This crate defines the transaction model shared by the generator and the
//! dispatcher, plus the validation helpers that guard its invariants.

pub mod error;
pub mod transaction;
pub mod validation;

pub use error::{Error, Result};
pub use transaction::{BasketItem, Item, PaymentMethod, Transaction};
pub use validation::{validate_transaction, validate_transactions};

/// Largest number of items a single basket may hold.
pub const MAX_BASKET_ITEMS: usize = 10;

/// Largest quantity of one item in a basket.
pub const MAX_QUANTITY: u32 = 5;
