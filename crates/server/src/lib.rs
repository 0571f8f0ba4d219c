pub mod config;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use state::AppState;
