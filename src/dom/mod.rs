// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod builder;
pub mod element;
pub mod listeners;

pub use builder::*;
pub use element::*;
pub use listeners::*;
