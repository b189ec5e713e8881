pub mod error;
pub mod horizon;
pub mod store;
pub mod types;

pub use error::*;
pub use horizon::*;
pub use store::*;
pub use types::*;
