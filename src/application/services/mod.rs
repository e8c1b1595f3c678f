pub mod store_service;

pub use store_service::{StoreError, StoreService};
