use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::services::summary_service::DEFAULT_SERIES_LABEL;
use crate::core::services::{BudgetService, CategoryService, ChartSeries, SummaryService};
use crate::domain::common::position_of;
use crate::domain::{Bill, BillDraft, BillId, Displayable, Identifiable};
use crate::errors::BillError;

/// Owns the bill collection and keeps its derived views current.
///
/// The filtered view and the highlighted subset are recomputed from the full
/// collection inside every call that could affect them, so readers never see
/// a view that disagrees with [`BillStore::bills`].
#[derive(Debug, Clone)]
pub struct BillStore {
    bills: Vec<Bill>,
    filtered: Vec<Bill>,
    highlighted: Vec<Bill>,
    active_category: Option<String>,
    active_budget: Option<f64>,
    default_budget: Option<f64>,
    next_id: u64,
    chart_label: String,
    category_options: Vec<String>,
}

impl Default for BillStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BillStore {
    pub fn new() -> Self {
        Self {
            bills: Vec::new(),
            filtered: Vec::new(),
            highlighted: Vec::new(),
            active_category: None,
            active_budget: None,
            default_budget: None,
            next_id: 1,
            chart_label: DEFAULT_SERIES_LABEL.to_string(),
            category_options: Vec::new(),
        }
    }

    /// Creates an empty store labelled and budgeted from `config`.
    ///
    /// The configured budget is only a suggestion for the caller's budget
    /// input; nothing is highlighted until [`BillStore::calculate_minimum_bills`] runs.
    pub fn with_config(config: &Config) -> Self {
        let mut store = Self::new();
        store.chart_label = config.chart_label.clone();
        store.default_budget = Some(config.default_budget);
        store.category_options = config.categories.clone();
        store
    }

    /// Appends a bill whose id the caller chose.
    ///
    /// Fails without touching any state when the id is already present.
    pub fn add(&mut self, bill: Bill) -> Result<BillId, BillError> {
        if self.get(bill.id).is_some() {
            warn!(id = %bill.id, "rejected bill with duplicate id");
            return Err(BillError::DuplicateId(bill.id));
        }
        let id = bill.id;
        self.next_id = self.next_id.max(id.value().saturating_add(1));
        debug!(%id, bill = %bill.display_label(), "bill added");
        self.bills.push(bill);
        self.refresh();
        Ok(id)
    }

    /// Appends a bill under the next free id and returns that id.
    pub fn add_draft(&mut self, draft: BillDraft) -> BillId {
        let id = self.allocate_id();
        let bill = draft.into_bill(id);
        debug!(%id, bill = %bill.display_label(), "bill added");
        self.bills.push(bill);
        self.refresh();
        id
    }

    /// Replaces the bill with the same id in place, keeping its position.
    ///
    /// Returns `false` and changes nothing when no bill has that id.
    pub fn edit(&mut self, bill: Bill) -> bool {
        let Some(index) = position_of(&self.bills, bill.id()) else {
            debug!(id = %bill.id, "edit ignored: unknown bill");
            return false;
        };
        debug!(id = %bill.id, bill = %bill.display_label(), "bill edited");
        self.bills[index] = bill;
        self.refresh();
        true
    }

    /// Removes the bill with `id`, returning it. Unknown ids are ignored.
    pub fn remove(&mut self, id: BillId) -> Option<Bill> {
        let Some(index) = position_of(&self.bills, id) else {
            debug!(%id, "remove ignored: unknown bill");
            return None;
        };
        let removed = self.bills.remove(index);
        debug!(%id, remaining = self.bills.len(), "bill removed");
        self.refresh();
        Some(removed)
    }

    /// Sets the active category filter; `None` or `""` clears it.
    pub fn filter_by_category(&mut self, category: Option<&str>) {
        self.active_category = category
            .filter(|category| !category.is_empty())
            .map(str::to_string);
        self.refresh_filtered();
        debug!(
            category = self.active_category.as_deref().unwrap_or(""),
            visible = self.filtered.len(),
            "category filter applied"
        );
    }

    pub fn clear_filter(&mut self) {
        self.filter_by_category(None);
    }

    /// Highlights the bills the greedy selector fits into `budget`.
    ///
    /// `budget` becomes the active budget: later mutations re-run the
    /// selection against it.
    pub fn calculate_minimum_bills(&mut self, budget: f64) -> &[Bill] {
        self.active_budget = Some(budget);
        self.refresh_highlighted();
        info!(
            budget,
            highlighted = self.highlighted.len(),
            total = self.highlighted_total(),
            "minimum bills calculated"
        );
        &self.highlighted
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub fn filtered(&self) -> &[Bill] {
        &self.filtered
    }

    pub fn highlighted(&self) -> &[Bill] {
        &self.highlighted
    }

    pub fn get(&self, id: BillId) -> Option<&Bill> {
        self.bills.iter().find(|bill| bill.id == id)
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn active_budget(&self) -> Option<f64> {
        self.active_budget
    }

    pub fn default_budget(&self) -> Option<f64> {
        self.default_budget
    }

    pub fn is_highlighted(&self, id: BillId) -> bool {
        position_of(&self.highlighted, id).is_some()
    }

    pub fn highlighted_total(&self) -> f64 {
        BudgetService::total(&self.highlighted)
    }

    /// Configured categories offered to the caller's category picker.
    pub fn category_options(&self) -> &[String] {
        &self.category_options
    }

    /// Distinct categories present in the collection.
    pub fn categories(&self) -> Vec<String> {
        CategoryService::list(&self.bills)
    }

    /// Per-month totals of the filtered view.
    pub fn monthly_chart(&self) -> ChartSeries {
        SummaryService::monthly_series(&self.filtered, self.chart_label.clone())
    }

    /// Hands out `next_id`, scanning past ids a caller already claimed.
    ///
    /// The counter wraps at `u64::MAX`; the scan keeps wrapped ids unique.
    fn allocate_id(&mut self) -> BillId {
        let mut candidate = self.next_id;
        while self.get(BillId(candidate)).is_some() {
            candidate = candidate.wrapping_add(1);
        }
        self.next_id = candidate.wrapping_add(1);
        BillId(candidate)
    }

    fn refresh(&mut self) {
        self.refresh_filtered();
        self.refresh_highlighted();
    }

    fn refresh_filtered(&mut self) {
        self.filtered = CategoryService::filter(&self.bills, self.active_category.as_deref());
    }

    fn refresh_highlighted(&mut self) {
        self.highlighted = match self.active_budget {
            Some(budget) => BudgetService::select_within_budget(&self.bills, budget),
            None => Vec::new(),
        };
    }
}
