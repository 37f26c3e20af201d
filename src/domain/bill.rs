use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::currency::{deserialize_amount, format_amount, parse_amount};
use crate::domain::common::{Displayable, Identifiable};
use crate::errors::BillError;

const DATE_FORMAT: &str = "%Y-%m-%d";

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats the Gregorian month of `date` as a three-letter abbreviation.
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

/// Unique key of a bill. Assigned once and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(pub u64);

impl BillId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub description: String,
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub date: NaiveDate,
}

impl Bill {
    pub fn new(
        id: BillId,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Short month name of the bill date ("Jan" through "Dec").
    pub fn month_label(&self) -> &'static str {
        month_label(self.date)
    }
}

impl Identifiable for Bill {
    fn id(&self) -> BillId {
        self.id
    }
}

impl Displayable for Bill {
    fn display_label(&self) -> String {
        format!(
            "{} - {} - {} - {}",
            self.description,
            self.category,
            format_amount(self.amount),
            self.date.format(DATE_FORMAT)
        )
    }
}

/// Bill fields as collected from a form, before an id is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDraft {
    pub description: String,
    pub category: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    pub date: NaiveDate,
}

impl BillDraft {
    pub fn new(
        description: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            description: description.into(),
            category: category.into(),
            amount,
            date,
        }
    }

    /// Builds a draft from raw form text. Dates use the `YYYY-MM-DD` form.
    pub fn parse(
        description: &str,
        category: &str,
        amount: &str,
        date: &str,
    ) -> Result<Self, BillError> {
        let amount = parse_amount(amount)?;
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
            .map_err(|err| BillError::InvalidDate(format!("`{}`: {}", date.trim(), err)))?;
        Ok(Self::new(description, category, amount, date))
    }

    pub fn into_bill(self, id: BillId) -> Bill {
        Bill {
            id,
            description: self.description,
            category: self.category,
            amount: self.amount,
            date: self.date,
        }
    }
}

impl From<Bill> for BillDraft {
    fn from(bill: Bill) -> Self {
        Self {
            description: bill.description,
            category: bill.category,
            amount: bill.amount,
            date: bill.date,
        }
    }
}
