//! Health Check Endpoint
//!
//! Provides the health payload served on `GET /health`, for load balancers
//! and monitoring systems.
//!
//! ## Response format
//! ```json
//! {
//!   "status": "healthy",
//!   "uptime_seconds": 3600,
//!   "version": "0.1.0",
//!   "timestamp": 1234567890,
//!   "details": { "total_products": 12, "total_orders": 4 }
//! }
//! ```

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    /// Partially functional
    Degraded,
    Unhealthy,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub uptime_seconds: u64,
    pub version: String,
    pub timestamp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HealthDetails>,
}

/// Detailed health information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDetails {
    /// Catalog node count
    pub total_products: usize,
    /// Registered order count
    pub total_orders: usize,
}

/// Health checker
pub struct HealthChecker {
    start_time: SystemTime,
    status: RwLock<HealthStatus>,
    version: String,
}

impl HealthChecker {
    /// Creates a new health checker
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            start_time: SystemTime::now(),
            status: RwLock::new(HealthStatus::Healthy),
            version: version.into(),
        }
    }

    /// Uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().map(|d| d.as_secs()).unwrap_or(0)
    }

    fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Sets the health status
    pub fn set_status(&self, status: HealthStatus) {
        *self.status.write() = status;
    }

    /// Current health status
    pub fn status(&self) -> HealthStatus {
        *self.status.read()
    }

    /// Builds the health response served on `/health`
    pub fn check_health(&self, details: HealthDetails) -> HealthResponse {
        HealthResponse {
            status: self.status(),
            uptime_seconds: self.uptime_seconds(),
            version: self.version.clone(),
            timestamp: Self::current_timestamp(),
            details: Some(details),
        }
    }
}

impl Default for HealthChecker {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> HealthDetails {
        HealthDetails {
            total_products: 3,
            total_orders: 2,
        }
    }

    #[test]
    fn test_health_checker_creation() {
        let checker = HealthChecker::new("1.0.0");
        assert_eq!(checker.version, "1.0.0");
        assert_eq!(checker.status(), HealthStatus::Healthy);
    }

    #[test]
    fn test_status_change() {
        let checker = HealthChecker::new("1.0.0");
        checker.set_status(HealthStatus::Degraded);
        assert_eq!(checker.status(), HealthStatus::Degraded);

        checker.set_status(HealthStatus::Unhealthy);
        assert_eq!(checker.status(), HealthStatus::Unhealthy);
    }

    #[test]
    fn test_health_response() {
        let checker = HealthChecker::new("1.0.0");
        let response = checker.check_health(details());

        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, "1.0.0");
        assert!(response.timestamp > 0);

        let resp_details = response.details.unwrap();
        assert_eq!(resp_details.total_products, 3);
        assert_eq!(resp_details.total_orders, 2);
    }

    #[test]
    fn test_serialization() {
        let checker = HealthChecker::new("1.0.0");
        let json = serde_json::to_string(&checker.check_health(details())).unwrap();

        assert!(json.contains("healthy"));
        assert!(json.contains("total_products"));
        assert!(json.contains("1.0.0"));
    }
}
