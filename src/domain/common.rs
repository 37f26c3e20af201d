use super::BillId;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> BillId;
}

/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Returns the position of the entity carrying `id`, if any.
pub fn position_of<T: Identifiable>(items: &[T], id: BillId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}
