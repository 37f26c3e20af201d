use crate::domain::Bill;

pub struct CategoryService;

impl CategoryService {
    /// Bills whose category equals `category`, ignoring case, in collection order.
    ///
    /// An empty or absent category returns the whole collection.
    pub fn filter(bills: &[Bill], category: Option<&str>) -> Vec<Bill> {
        let category = match category {
            Some(category) if !category.is_empty() => category,
            _ => return bills.to_vec(),
        };
        let wanted = category.to_lowercase();
        bills
            .iter()
            .filter(|bill| bill.category.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    /// Case-insensitive category equality.
    pub fn matches(bill: &Bill, category: &str) -> bool {
        bill.category.to_lowercase() == category.to_lowercase()
    }

    /// Distinct categories in first-seen order; the first spelling wins.
    pub fn list(bills: &[Bill]) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let mut names = Vec::new();
        for bill in bills {
            let normalized = bill.category.to_lowercase();
            if !seen.contains(&normalized) {
                seen.push(normalized);
                names.push(bill.category.clone());
            }
        }
        names
    }
}
