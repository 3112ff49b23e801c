pub mod address;
pub mod proximity;

pub use address::AddressService;
pub use proximity::{NearbyMatch, NearbyQuery, ProximitySearch, SearchStrategy};
