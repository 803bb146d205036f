pub mod join;
pub mod payload;
pub mod types;

pub use join::{AlignedSeries, join_by_date};
pub use payload::{extract, parse_payload};
pub use types::{InterestPoint, PricePoint, TimelinePoint};
