//! Fixed greeting output

use std::io::{self, Write};

/// The greeting text, without the trailing newline.
pub const GREETING: &str = "Hello, world!";

/// Write the greeting and a newline to `w`.
///
/// The byte sequence is the same on every platform: `Hello, world!` followed
/// by a single `\n`.
pub fn write_greeting<W: Write>(w: &mut W) -> io::Result<()> {
    w.write_all(GREETING.as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_greeting_bytes_exact() {
        let mut buf = Vec::new();
        write_greeting(&mut buf).unwrap();
        assert_eq!(buf, b"Hello, world!\n");
    }

    #[test]
    fn test_write_error_propagates() {
        let err = write_greeting(&mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
