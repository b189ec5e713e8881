//! Total normalizers for AI-authored signal fields.
//!
//! Every function here degrades to a sentinel (`NaN`, `None`, `""`, or a
//! fallback string) instead of failing, so a single malformed signal can
//! never abort a batch export.

pub mod datetime;
pub mod numeric;
pub mod range;
pub mod ticker;

pub use datetime::pt_to_iso;
pub use numeric::{normalize_price, num_field, percent, percent_field, to_number};
pub use range::{parse_entry_range, EntryRange};
pub use ticker::{extract_ticker, to_symbol_usdt};
