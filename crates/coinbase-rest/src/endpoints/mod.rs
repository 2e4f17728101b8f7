//! API endpoint implementations

pub mod accounts;
pub mod addresses;

pub use accounts::AccountEndpoints;
pub use addresses::AddressEndpoints;
