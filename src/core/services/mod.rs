pub mod budget_service;
pub mod category_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use summary_service::{ChartSeries, SummaryService};
