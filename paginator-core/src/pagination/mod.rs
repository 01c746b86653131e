pub mod calc;
pub mod request;
pub mod state;

// Re-exports
pub use request::*;
pub use state::*;
