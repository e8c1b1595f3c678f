// Global memory allocator: jemalloc handles the allocation churn of
// request handling better than the system allocator.
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
