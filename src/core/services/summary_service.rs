//! Monthly aggregation of bill amounts for charting.

use serde::{Deserialize, Serialize};

use crate::domain::{month_label, Bill};

pub const DEFAULT_SERIES_LABEL: &str = "Total Bills Per Month";

/// A named line series: one value per label, in matching positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterates `(label, value)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Sums amounts per month label.
    ///
    /// # Returns
    /// Labels in first-seen order (not calendar order) and the matching sums.
    /// Bills from different years share a bucket when their month matches.
    pub fn aggregate_by_month(bills: &[Bill]) -> (Vec<String>, Vec<f64>) {
        let mut labels: Vec<String> = Vec::new();
        let mut sums: Vec<f64> = Vec::new();

        for bill in bills {
            let label = month_label(bill.date);
            match labels.iter().position(|existing| existing == label) {
                Some(index) => sums[index] += bill.amount,
                None => {
                    labels.push(label.to_string());
                    sums.push(bill.amount);
                }
            }
        }

        (labels, sums)
    }

    /// Wraps [`SummaryService::aggregate_by_month`] into a named series.
    pub fn monthly_series(bills: &[Bill], label: impl Into<String>) -> ChartSeries {
        let (labels, values) = Self::aggregate_by_month(bills);
        ChartSeries {
            label: label.into(),
            labels,
            values,
        }
    }
}
