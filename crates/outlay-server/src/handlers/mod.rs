//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod analytics;
pub mod categories;
pub mod expenses;
pub mod export;
pub mod health;
pub mod predictions;
pub mod recommendations;
pub mod settings;

// Re-export all handlers for use in router
pub use analytics::*;
pub use categories::*;
pub use expenses::*;
pub use export::*;
pub use health::*;
pub use predictions::*;
pub use recommendations::*;
pub use settings::*;
