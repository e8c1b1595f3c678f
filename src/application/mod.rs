/// Application Layer - Services
///
/// This layer orchestrates domain logic to implement the service's use
/// cases. It depends on the domain layer but is independent of
/// infrastructure details (thanks to dependency injection).
///
/// ## Modules
/// - `services`: Application services (StoreService)

pub mod services;

// Re-export key services
pub use services::{StoreError, StoreService};
