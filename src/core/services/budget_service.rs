//! Picks the bills that fit a monthly budget.

use tracing::debug;

use crate::domain::Bill;

/// Stateless budget selection over a bill collection.
pub struct BudgetService;

impl BudgetService {
    /// Selects bills cheapest-first while the running total stays within `budget`.
    ///
    /// The walk stops at the first bill that would overshoot; bills after it
    /// are not considered. Ties keep collection order.
    /// The result is in ascending amount order.
    ///
    /// This is a greedy heuristic, not an optimal subset-sum search. Negative
    /// amounts are accepted as-is and may let later bills fit.
    pub fn select_within_budget(bills: &[Bill], budget: f64) -> Vec<Bill> {
        let mut sorted: Vec<&Bill> = bills.iter().collect();
        // Adding 0.0 folds -0.0 into 0.0 so the two compare as a tie.
        sorted.sort_by(|a, b| (a.amount + 0.0).total_cmp(&(b.amount + 0.0)));

        let mut total = 0.0;
        let mut selected = Vec::new();
        for bill in sorted {
            if total + bill.amount <= budget {
                total += bill.amount;
                selected.push(bill.clone());
            } else {
                break;
            }
        }

        debug!(
            budget,
            total,
            selected = selected.len(),
            available = bills.len(),
            "budget selection computed"
        );
        selected
    }

    /// Sum of the amounts in `bills`.
    pub fn total(bills: &[Bill]) -> f64 {
        bills.iter().map(|bill| bill.amount).sum()
    }
}
