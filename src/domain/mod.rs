pub mod address;
pub mod errors;
pub mod geo;

pub use address::{Address, AddressPatch, NewAddress};
pub use errors::DomainError;
pub use geo::BoundingBox;
