#![allow(dead_code)]

use bill_core::{Bill, BillDraft, BillId};
use chrono::NaiveDate;

pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid test date")
}

pub fn bill(id: u64, category: &str, amount: f64, raw_date: &str) -> Bill {
    Bill::new(BillId(id), format!("bill {id}"), category, amount, date(raw_date))
}

pub fn priced(id: u64, amount: f64) -> Bill {
    bill(id, "Utility", amount, "2024-01-01")
}

pub fn draft(category: &str, amount: f64, raw_date: &str) -> BillDraft {
    BillDraft::new("item", category, amount, date(raw_date))
}

pub fn ids(bills: &[Bill]) -> Vec<BillId> {
    bills.iter().map(|bill| bill.id).collect()
}

const CATEGORIES: [&str; 5] = ["Food & Dining", "food & dining", "Utility", "Travel", "TRAVEL"];

/// Deterministic pseudo-random collections for property checks.
pub struct Collections {
    state: u64,
}

impl Collections {
    pub fn seeded(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        // Numerical Recipes LCG constants.
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state >> 33
    }

    /// A collection of up to 24 bills with non-negative whole-cent amounts.
    pub fn next_collection(&mut self) -> Vec<Bill> {
        let len = (self.next() % 25) as usize;
        (0..len)
            .map(|index| {
                let cents = self.next() % 20_000;
                let category = CATEGORIES[(self.next() % CATEGORIES.len() as u64) as usize];
                let month = (self.next() % 12) as u32 + 1;
                let day = (self.next() % 28) as u32 + 1;
                Bill::new(
                    BillId(index as u64 + 1),
                    format!("generated {index}"),
                    category,
                    cents as f64 / 100.0,
                    NaiveDate::from_ymd_opt(2024, month, day).expect("valid generated date"),
                )
            })
            .collect()
    }

    pub fn next_budget(&mut self) -> f64 {
        (self.next() % 100_000) as f64 / 100.0
    }
}
