mod address;
mod traits;

pub use address::AddressRepositoryImpl;
pub use traits::{AddressRepository, ScanFilter};
