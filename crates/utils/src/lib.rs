pub mod env;
pub mod response;
