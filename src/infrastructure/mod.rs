/// Infrastructure Layer - Technical Implementations
///
/// This layer contains the technical implementations that interact with
/// the outside world. The infrastructure layer depends on the domain and
/// application layers; the domain layer never depends on infrastructure
/// (dependency inversion).
///
/// ## Modules
/// - `http`: axum HTTP server, routing, and handlers
/// - `observability`: health reporting

pub mod http;
pub mod observability;
