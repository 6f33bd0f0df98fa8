//! Runtime errors.
//!
//! Both operations are total over finite operands, so arithmetic never
//! fails. The only fallible step is writing the rendered line.

use std::io;

use crate::dispatch::Strategy;

/// Failure of a `dispatch_*` entry point.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The output sink rejected the rendered line.
    #[error("failed to write {strategy} line")]
    Write {
        strategy: Strategy,
        #[source]
        source: io::Error,
    },
}

impl DispatchError {
    /// Wrap a sink error raised while writing the `strategy` line.
    pub fn write(strategy: Strategy, source: io::Error) -> Self {
        Self::Write { strategy, source }
    }
}
