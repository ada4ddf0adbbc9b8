//! `log` backend for the EE, printing through newlib's `puts`.

use core::fmt;

/// Longest line the EE logger prints; the rest is cut off.
pub const LINE_CAPACITY: usize = 128;

/// NUL-terminated line assembled on the stack.
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Contents followed by the terminating NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // one byte stays reserved for the NUL
        let room = N.saturating_sub(1) - self.len;
        let mut take = s.len().min(room);
        while !s.is_char_boundary(take) {
            take -= 1;
        }
        self.buf[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        if take < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

#[cfg(ps2_ee)]
pub use ee::init;

#[cfg(ps2_ee)]
mod ee {
    use core::ffi::{c_char, c_int};
    use core::fmt::Write;

    use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

    use super::{LineBuffer, LINE_CAPACITY};

    extern "C" {
        fn puts(s: *const c_char) -> c_int;
    }

    struct EeLogger;

    static LOGGER: EeLogger = EeLogger;

    impl Log for EeLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= log::max_level()
        }

        fn log(&self, record: &Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let mut line = LineBuffer::<LINE_CAPACITY>::new();
            let _ = write!(line, "[{} {}] {}", record.level(), record.target(), record.args());
            unsafe {
                puts(line.as_bytes_with_nul().as_ptr() as *const c_char);
            }
        }

        fn flush(&self) {}
    }

    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_logger(&LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn short_line_is_nul_terminated() {
        let mut line = LineBuffer::<16>::new();
        write!(line, "flip {}", 3).unwrap();
        assert_eq!(line.as_bytes(), b"flip 3");
        assert_eq!(line.as_bytes_with_nul(), b"flip 3\0");
        assert!(!line.is_truncated());
    }

    #[test]
    fn long_line_is_cut() {
        let mut line = LineBuffer::<8>::new();
        write!(line, "{}", "abcdefghijkl").unwrap();
        assert_eq!(line.as_bytes(), b"abcdefg");
        assert_eq!(line.as_bytes_with_nul().last(), Some(&0));
        assert!(line.is_truncated());
    }

    #[test]
    fn never_splits_a_char() {
        let mut line = LineBuffer::<5>::new();
        line.write_str("ab\u{e9}\u{e9}").unwrap();
        assert_eq!(line.as_bytes(), "ab\u{e9}".as_bytes());
    }
}
