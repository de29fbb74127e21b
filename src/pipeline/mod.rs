//! Pipeline module containing the four reconciliation stages and the driver

pub mod aggregate;
pub mod combine;
pub mod core;
pub mod normalize;
pub mod report;

pub use self::core::*;
pub use aggregate::*;
pub use combine::*;
pub use normalize::*;
pub use report::*;
