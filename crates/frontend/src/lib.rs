//! Top-level facade crate for the frontend demo service.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use frontend_core::*;
}

pub mod server {
    pub use frontend_server::*;
}
