pub mod complaint;
pub mod date_range;
pub mod search;

pub use complaint::*;
pub use date_range::*;
pub use search::*;
