pub mod bag;
pub mod visit_set;

pub use bag::Bag;
pub use visit_set::VisitSet;
