// Common utilities shared by user-facing macros
//
// This module contains:
// - parse_utils: #[operation(...)] attribute parsing

mod parse_utils;

pub use parse_utils::*;
