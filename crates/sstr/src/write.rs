//! [`std::io::Write`] adapter so `SStr` can collect writer output.

use std::io::{self, Write};

use crate::buffer::SStr;

impl Write for SStr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append_bytes(buf)
            .map_err(|error| io::Error::new(io::ErrorKind::OutOfMemory, error))?;
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.write(buf).map(|_| ())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
