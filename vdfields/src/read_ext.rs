use std::io::{self, Read};


pub trait ReadExt {
    /// Fills `buf` unless the end of the input is reached first.
    ///
    /// Returns the number of bytes read; anything less than `buf.len()` means the input ended.
    fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<usize, io::Error>;
}
impl<R: Read> ReadExt for R {
    fn read_exact_or_eof(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
        let mut total_bytes_read = 0;
        while total_bytes_read < buf.len() {
            let bytes_read_this_time = match self.read(&mut buf[total_bytes_read..]) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if bytes_read_this_time == 0 {
                // EOF, break out
                break;
            }
            total_bytes_read += bytes_read_this_time;
        }
        Ok(total_bytes_read)
    }
}
