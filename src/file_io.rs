//! # File I/O Module
//!
//! Line reading for files on disk. Files are split on `\n`, `\r\n` and a bare
//! `\r`, so sources saved with old Mac line endings still yield one line per
//! header line. Standard input keeps plain `\n` splitting.

use std::io::{self, BufRead};

/// Lazy iterator over the lines of a reader, split on any line ending.
///
/// Line endings are not included in the yielded lines. Each line must be
/// valid UTF-8; otherwise an [`io::ErrorKind::InvalidData`] error is yielded.
pub struct UniversalLines<R> {
  reader: R,
}

/// Returns an iterator over the lines of `reader`, split on `\n`, `\r\n` or `\r`.
pub const fn universal_lines<R: BufRead>(reader: R) -> UniversalLines<R> {
  UniversalLines { reader }
}

impl<R: BufRead> UniversalLines<R> {
  fn read_line(&mut self) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    let mut read_any = false;

    loop {
      let available = match self.reader.fill_buf() {
        Ok(available) => available,
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      };
      if available.is_empty() {
        break;
      }
      read_any = true;

      if let Some(pos) = available.iter().position(|&b| b == b'\n' || b == b'\r') {
        let ended_by_cr = available[pos] == b'\r';
        line.extend_from_slice(&available[..pos]);
        self.reader.consume(pos + 1);
        if ended_by_cr {
          self.skip_lf()?;
        }
        return decode(line).map(Some);
      }

      let len = available.len();
      line.extend_from_slice(available);
      self.reader.consume(len);
    }

    if read_any { decode(line).map(Some) } else { Ok(None) }
  }

  /// Consumes the `\n` of a `\r\n` pair, which may sit in the next buffer.
  fn skip_lf(&mut self) -> io::Result<()> {
    loop {
      match self.reader.fill_buf() {
        Ok(available) => {
          if available.first() == Some(&b'\n') {
            self.reader.consume(1);
          }
          return Ok(());
        }
        Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
        Err(e) => return Err(e),
      }
    }
  }
}

impl<R: BufRead> Iterator for UniversalLines<R> {
  type Item = io::Result<String>;

  fn next(&mut self) -> Option<Self::Item> {
    self.read_line().transpose()
  }
}

fn decode(line: Vec<u8>) -> io::Result<String> {
  String::from_utf8(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
