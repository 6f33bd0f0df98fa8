//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Operation)]` | on struct/enum | Implement `Operation` |

pub mod operation;

pub use operation::expand_derive_operation;
