mod common;

use bill_core::core::services::{BudgetService, CategoryService, SummaryService};
use bill_core::BillStore;
use common::Collections;

const ROUNDS: usize = 200;

#[test]
fn empty_category_filter_is_identity() {
    let mut source = Collections::seeded(7);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        assert_eq!(CategoryService::filter(&collection, Some("")), collection);
    }
}

#[test]
fn selection_never_exceeds_budget() {
    let mut source = Collections::seeded(11);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        let budget = source.next_budget();
        let selected = BudgetService::select_within_budget(&collection, budget);
        assert!(
            BudgetService::total(&selected) <= budget,
            "selection {:?} exceeds {budget}",
            selected
        );
    }
}

#[test]
fn selection_is_sorted_by_amount() {
    let mut source = Collections::seeded(13);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        let selected = BudgetService::select_within_budget(&collection, source.next_budget());
        assert!(selected.windows(2).all(|pair| pair[0].amount <= pair[1].amount));
    }
}

#[test]
fn selection_is_a_prefix_of_the_sorted_collection() {
    let mut source = Collections::seeded(17);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        let selected = BudgetService::select_within_budget(&collection, source.next_budget());
        let everything = BudgetService::select_within_budget(&collection, f64::INFINITY);
        assert_eq!(everything.len(), collection.len());
        assert_eq!(selected.as_slice(), &everything[..selected.len()]);
    }
}

#[test]
fn filtered_bills_all_match_and_keep_order() {
    let mut source = Collections::seeded(19);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        let matched = CategoryService::filter(&collection, Some("food & DINING"));
        assert!(matched
            .iter()
            .all(|bill| CategoryService::matches(bill, "Food & Dining")));
        let positions: Vec<usize> = matched
            .iter()
            .map(|bill| collection.iter().position(|b| b.id == bill.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn monthly_sums_add_up_to_collection_total() {
    let mut source = Collections::seeded(23);
    for _ in 0..ROUNDS {
        let collection = source.next_collection();
        let (labels, sums) = SummaryService::aggregate_by_month(&collection);
        assert_eq!(labels.len(), sums.len());
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), labels.len());

        let expected = BudgetService::total(&collection);
        let actual: f64 = sums.iter().sum();
        assert!((expected - actual).abs() < 1e-6);
    }
}

#[test]
fn store_views_match_pure_functions_after_each_mutation() {
    let mut source = Collections::seeded(29);
    for _ in 0..50 {
        let collection = source.next_collection();
        let budget = source.next_budget();
        let mut store = BillStore::new();
        store.filter_by_category(Some("travel"));
        store.calculate_minimum_bills(budget);

        for bill in &collection {
            store.add(bill.clone()).unwrap();
            assert_eq!(
                store.filtered(),
                CategoryService::filter(store.bills(), Some("travel")).as_slice()
            );
            assert_eq!(
                store.highlighted(),
                BudgetService::select_within_budget(store.bills(), budget).as_slice()
            );
        }
        for bill in collection.iter().step_by(2) {
            store.remove(bill.id);
            assert_eq!(
                store.highlighted(),
                BudgetService::select_within_budget(store.bills(), budget).as_slice()
            );
        }
    }
}
