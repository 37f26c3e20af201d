pub mod bill;
pub mod common;

pub use bill::{month_label, Bill, BillDraft, BillId};
pub use common::{Displayable, Identifiable};
