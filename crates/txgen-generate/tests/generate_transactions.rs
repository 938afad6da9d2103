use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use txgen_core::{MAX_BASKET_ITEMS, MAX_QUANTITY, validate_transactions};
use txgen_generate::{Catalog, MAX_COST, MIN_COST, TimeWindow, TransactionGenerator, seeded_rng};

fn window() -> TimeWindow {
    TimeWindow::today(Utc.with_ymd_and_hms(2024, 6, 1, 13, 20, 0).unwrap())
}

fn generator() -> TransactionGenerator<'static> {
    let catalog = Catalog::embedded().expect("embedded catalog");
    TransactionGenerator::new(catalog, window())
}

#[test]
fn generates_requested_count_with_sequential_ids() {
    let mut rng = seeded_rng(11);
    let transactions = generator().generate(137, &mut rng);

    assert_eq!(transactions.len(), 137);
    for (index, tx) in transactions.iter().enumerate() {
        assert_eq!(tx.id, index.to_string());
    }
    validate_transactions(&transactions).expect("generated dataset is valid");
}

#[test]
fn non_positive_count_yields_empty_dataset() {
    let mut rng = seeded_rng(1);
    assert!(generator().generate(0, &mut rng).is_empty());
    assert!(generator().generate(-5, &mut rng).is_empty());
}

#[test]
fn records_respect_sampling_bounds() {
    let catalog = Catalog::embedded().expect("embedded catalog");
    let window = window();
    let mut rng = seeded_rng(2024);
    let transactions = TransactionGenerator::new(catalog, window).generate(500, &mut rng);

    for tx in &transactions {
        assert!((1..=MAX_BASKET_ITEMS).contains(&tx.basket.len()));
        assert!(tx.date >= window.start && tx.date <= window.end);
        assert!(catalog.locations().contains(&tx.location));
        assert!(catalog.names().contains(&tx.customer_name));

        let mut sum = 0;
        for line in &tx.basket {
            assert!((1..=MAX_QUANTITY).contains(&line.quantity));
            assert!((MIN_COST..=MAX_COST).contains(&line.item.cost));

            let index: usize = line
                .item
                .id
                .strip_prefix("item")
                .and_then(|value| value.parse().ok())
                .expect("catalog item id");
            assert_eq!(catalog.products()[index], line.item.name);

            sum += line.item.cost * u64::from(line.quantity);
        }
        assert_eq!(tx.total, sum);
    }
}

#[test]
fn same_seed_is_deterministic() {
    let a = generator().generate(40, &mut seeded_rng(99));
    let b = generator().generate(40, &mut seeded_rng(99));
    let c = generator().generate(40, &mut seeded_rng(100));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn costs_vary_per_occurrence() {
    let mut rng = seeded_rng(5);
    let transactions = generator().generate(300, &mut rng);

    let mut costs: BTreeMap<&str, Vec<u64>> = BTreeMap::new();
    for line in transactions.iter().flat_map(|tx| &tx.basket) {
        costs.entry(&line.item.id).or_default().push(line.item.cost);
    }

    assert!(costs.values().any(|seen| {
        let first = seen[0];
        seen.iter().any(|cost| *cost != first)
    }));
}
