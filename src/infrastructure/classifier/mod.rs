mod mock;
mod rest;

pub use mock::MockClassifierApi;
pub use rest::RestClassifierApi;
