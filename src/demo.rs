//! The fixed four-line demonstration run by the `op-dispatch` binary.

use std::io::Write;

use crate::dispatch::{dispatch_dynamic_to, dispatch_static_to};
use crate::error::DispatchError;
use crate::ops::{Add, Mul};

/// Write both variants through both strategies, dynamic first:
///
/// ```text
/// Dynamic dispatch: 1 + 2 = 3
/// Dynamic dispatch: 4 * 5 = 20
/// Static dispatch: 1 + 2 = 3
/// Static dispatch: 4 * 5 = 20
/// ```
pub fn run<W: Write>(out: &mut W) -> Result<(), DispatchError> {
    dispatch_dynamic_to(out, &Add, 1.0, 2.0)?;
    dispatch_dynamic_to(out, &Mul, 4.0, 5.0)?;

    dispatch_static_to(out, &Add, 1.0, 2.0)?;
    dispatch_static_to(out, &Mul, 4.0, 5.0)?;

    tracing::debug!("demo finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_run_output() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dynamic dispatch: 1 + 2 = 3\n\
             Dynamic dispatch: 4 * 5 = 20\n\
             Static dispatch: 1 + 2 = 3\n\
             Static dispatch: 4 * 5 = 20\n"
        );
    }

    /// Accepts `limit` bytes, then refuses every write.
    struct Closed {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for Closed {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_stops_at_first_failed_write() {
        let mut sink = Closed { written: Vec::new(), limit: 0 };
        let err = run(&mut sink).unwrap_err();
        assert_eq!(err.to_string(), "failed to write Dynamic dispatch line");
        assert!(sink.written.is_empty());
    }

    #[test]
    fn test_static_failure_reports_static_strategy() {
        let dynamic_lines = "Dynamic dispatch: 1 + 2 = 3\nDynamic dispatch: 4 * 5 = 20\n";
        let mut sink = Closed { written: Vec::new(), limit: dynamic_lines.len() };

        let err = run(&mut sink).unwrap_err();
        assert!(matches!(err, DispatchError::Write { strategy: crate::Strategy::Static, .. }));
        assert_eq!(sink.written, dynamic_lines.as_bytes());
    }
}
