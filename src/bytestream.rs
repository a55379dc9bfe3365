//! ByteStream I/O (§4.1, C1): a uniform random-access byte source over
//! either an on-disk path or a caller-provided in-memory/custom object.
//!
//! No component above this layer touches filesystem APIs directly; every
//! parser in this crate is handed a `&mut ByteStream` (or, more often,
//! drives it indirectly through `binread`'s `BinReaderExt`, since
//! `ByteStream` itself implements `Read + Seek`). Grounded on the
//! teacher's use of `BufReader<File>` in `ShellLink::open`
//! (`examples/lilopkins-lnk-rs/src/lib.rs`), generalized to the pluggable
//! "open-file-io-handle" capability set spec.md §4.1 and §9 call for.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::InputError;

/// Anything an [`ByteStream::Object`] can wrap: a caller-supplied byte
/// source that behaves like a file (random-access, seekable).
pub trait ReadSeekSource: Read + Seek + Send {}
impl<T: Read + Seek + Send> ReadSeekSource for T {}

/// The polymorphic byte source every parser in this crate reads through.
pub enum ByteStream {
    /// Backed by OS file I/O (`PathStream` in spec.md §4.1).
    Path(BufReader<File>),
    /// Backed by a caller-provided byte-source object (`ObjectStream`).
    /// Borrowed for the duration of the open session; ownership stays
    /// with the caller.
    Object(Box<dyn ReadSeekSource>),
}

impl ByteStream {
    /// Opens the file at `path` for random-access reading.
    pub fn open_path(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(ByteStream::Path(BufReader::new(File::open(path)?)))
    }

    /// Wraps an arbitrary `Read + Seek` object as a byte stream, e.g. an
    /// in-memory `Cursor<Vec<u8>>` or a `.lnk` blob received over the
    /// network.
    pub fn open_object(source: impl ReadSeekSource + 'static) -> Self {
        ByteStream::Object(Box::new(source))
    }

    /// The total size of the stream, in bytes.
    pub fn size(&mut self) -> io::Result<u64> {
        let current = self.stream_position()?;
        let end = self.seek(SeekFrom::End(0))?;
        self.seek(SeekFrom::Start(current))?;
        Ok(end)
    }

    /// Reads exactly `buf.len()` bytes starting at `offset`. A short read
    /// (fewer bytes available than requested) is reported as
    /// `InputError::Truncated` per the §4.1 contract.
    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<(), InputError> {
        self.seek(SeekFrom::Start(offset))
            .map_err(|e| InputError::truncated(e.to_string()))?;
        self.read_exact(buf)
            .map_err(|_| InputError::truncated(format!("expected {} bytes at offset {offset}", buf.len())))
    }
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            ByteStream::Path(r) => r.read(buf),
            ByteStream::Object(r) => r.read(buf),
        }
    }
}

impl Seek for ByteStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        match self {
            ByteStream::Path(r) => r.seek(pos),
            ByteStream::Object(r) => r.seek(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn object_stream_reports_size() {
        let data = vec![0u8; 128];
        let mut stream = ByteStream::open_object(Cursor::new(data));
        assert_eq!(stream.size().unwrap(), 128);
    }

    #[test]
    fn read_at_is_random_access() {
        let data: Vec<u8> = (0..16u8).collect();
        let mut stream = ByteStream::open_object(Cursor::new(data));
        let mut buf = [0u8; 4];
        stream.read_at(8, &mut buf).unwrap();
        assert_eq!(buf, [8, 9, 10, 11]);
        stream.read_at(0, &mut buf).unwrap();
        assert_eq!(buf, [0, 1, 2, 3]);
    }

    #[test]
    fn short_read_is_truncated() {
        let data = vec![0u8; 4];
        let mut stream = ByteStream::open_object(Cursor::new(data));
        let mut buf = [0u8; 8];
        assert!(stream.read_at(0, &mut buf).is_err());
    }
}
