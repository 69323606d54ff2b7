//! Crate includes reusable utils shared by the key derivation crates and their test harnesses.
//! Such as initializing the tracing framework.

pub mod logging;

// Re-export tracing crate for convenience.
pub use tracing;
