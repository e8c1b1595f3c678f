pub mod health;

pub use health::{HealthChecker, HealthDetails, HealthResponse, HealthStatus};
