// Portfolio sharing: record store plus the HTTP handlers on top of it.

pub mod handlers;
pub mod store;

pub use store::{InMemoryStore, PortfolioStore};
