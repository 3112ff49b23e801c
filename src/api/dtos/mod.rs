pub mod address_dto;
pub mod common;
pub mod health_dto;

pub use address_dto::*;
pub use common::*;
pub use health_dto::*;
