pub mod date;
pub mod filter;
pub mod record;

pub use date::{INVALID_TIMESTAMP, NO_DATE, RawTimestamp};
pub use filter::{FilterCriteria, FilterField};
pub use record::PlantRecord;
