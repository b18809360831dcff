pub mod comparator;
pub mod error;
pub mod policy;
pub mod score;
pub mod validation;

pub use comparator::{OrderComparator, OrderComparatorBuilder};
pub use error::ScoringError;
pub use policy::DegeneratePolicy;
pub use score::Score;
