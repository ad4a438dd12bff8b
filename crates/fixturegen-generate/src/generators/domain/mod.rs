pub mod devices;
pub mod finance;
pub mod org;
pub mod publishing;
