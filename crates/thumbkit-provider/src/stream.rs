//! Seekable byte-stream input.

use std::io::{self, Read, Seek, SeekFrom};

/// A sequential, seekable, finite-length byte source.
///
/// Blanket-implemented for everything that is `Read + Seek`, so files and
/// in-memory cursors plug in unchanged.
pub trait InputStream: Read + Seek {}

impl<T: Read + Seek + ?Sized> InputStream for T {}

/// Read the complete contents of a stream: stat the length by seeking to
/// the end, rewind, then read everything in one pass.
pub fn read_all(stream: &mut dyn InputStream) -> io::Result<Vec<u8>> {
    let len = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(0))?;

    let mut data = Vec::with_capacity(len as usize);
    stream.read_to_end(&mut data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_all() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3, 4, 5]);
        assert_eq!(read_all(&mut cursor).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_read_all_rewinds_first() {
        // A stream handed over mid-read still yields its full contents.
        let mut cursor = Cursor::new(vec![9u8; 16]);
        cursor.set_position(7);
        assert_eq!(read_all(&mut cursor).unwrap().len(), 16);
    }

    #[test]
    fn test_read_all_empty() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert!(read_all(&mut cursor).unwrap().is_empty());
    }
}
