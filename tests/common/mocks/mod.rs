
#[allow(dead_code, unused_imports)]
pub use address_repo::MockAddressRepo;
