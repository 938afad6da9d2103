use crate::error::{Error, Result};
use crate::transaction::Transaction;
use crate::{MAX_BASKET_ITEMS, MAX_QUANTITY};

/// Validate the invariants of a single transaction.
///
/// This checks:
/// - the basket holds between 1 and 10 items
/// - every quantity is between 1 and 5
/// - `total` equals the sum of `cost * quantity`
pub fn validate_transaction(transaction: &Transaction) -> Result<()> {
    let invalid = |reason: String| Error::InvalidTransaction {
        id: transaction.id.clone(),
        reason,
    };

    let items = transaction.basket.len();
    if items == 0 || items > MAX_BASKET_ITEMS {
        return Err(invalid(format!(
            "basket holds {items} items, expected 1..={MAX_BASKET_ITEMS}"
        )));
    }

    for (position, line) in transaction.basket.iter().enumerate() {
        if line.quantity == 0 || line.quantity > MAX_QUANTITY {
            return Err(invalid(format!(
                "basket[{position}] quantity {} outside 1..={MAX_QUANTITY}",
                line.quantity
            )));
        }
    }

    let expected = Transaction::basket_total(&transaction.basket);
    if transaction.total != expected {
        return Err(invalid(format!(
            "total {} does not match basket sum {expected}",
            transaction.total
        )));
    }

    Ok(())
}

/// Validate a whole dataset: every record plus sequential ids `0..n-1`.
pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    for (index, transaction) in transactions.iter().enumerate() {
        if transaction.id != index.to_string() {
            return Err(Error::InvalidDataset(format!(
                "record at position {index} has id {}",
                transaction.id
            )));
        }
        validate_transaction(transaction)?;
    }
    Ok(())
}
