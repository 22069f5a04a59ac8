pub mod codes;
pub mod complaint;
pub mod identifiable;
pub mod profile;
pub mod statistics;
pub mod trace;
pub mod user;

// Re-exports
pub use codes::*;
pub use complaint::*;
pub use identifiable::*;
pub use profile::*;
pub use statistics::*;
pub use trace::*;
pub use user::*;
