//! The ShellLink handle (C8/C9): lifecycle state machine and the full
//! typed accessor surface over a parsed LNK file.
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/lib.rs`'s `ShellLink::open`
//! and accessor methods, generalized into an explicit state machine
//! (uninitialized → initialized → open → closed) the teacher's
//! struct-returning `open` doesn't need, since the teacher never reuses a
//! handle across opens. Every accessor follows the present/absent/error
//! ternary via `Result<Option<T>, Error>`; lifecycle operations return
//! plain success/error.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use binread::BinReaderExt;
use log::{debug, trace};

use crate::bytestream::{ByteStream, ReadSeekSource};
use crate::codepage::AsciiCodepage;
use crate::error::{Error, Result, RuntimeError};
use crate::extradata::{ExtraData, ExtraDataBlock, ExtraDataRecord};
use crate::guid::Guid;
use crate::header::{DataFlags, FileAttributeFlags, HotkeyFlags, ShellLinkHeader, ShowCommand};
use crate::linktarget::LinkTargetIdentifier;
use crate::location::{DriveType, LocationInformation};
use crate::primitives::{fill_utf16, fill_utf8, utf16_fill_size, utf8_fill_size};
use crate::stringdata::StringData;

/// Generates the five-method size-probe/fill/plain accessor group for one
/// optional [`StringData`] field (§4.9, §9 "wide vs narrow string API
/// duplication").
macro_rules! string_field_accessors {
    ($get:ident, $utf8_size:ident, $utf8:ident, $utf16_size:ident, $utf16:ident, $source:ident) => {
        #[doc = concat!("The `", stringify!($source), "` StringData entry, if present.")]
        pub fn $get(&self) -> Result<Option<&str>> {
            Ok(self.parsed()?.strings.$source())
        }

        #[doc = concat!("Byte length (including terminator) [`Self::", stringify!($utf8), "`] would write.")]
        pub fn $utf8_size(&self) -> Result<Option<usize>> {
            Ok(self.parsed()?.strings.$source().map(utf8_fill_size))
        }

        #[doc = concat!("Fills `buf` with the `", stringify!($source), "` entry, UTF-8 encoded and NUL-terminated.")]
        pub fn $utf8(&self, buf: &mut [u8]) -> Result<Option<usize>> {
            fill_opt_utf8(self.parsed()?.strings.$source(), buf)
        }

        #[doc = concat!("Code-unit length (including terminator) [`Self::", stringify!($utf16), "`] would write.")]
        pub fn $utf16_size(&self) -> Result<Option<usize>> {
            Ok(self.parsed()?.strings.$source().map(utf16_fill_size))
        }

        #[doc = concat!("Fills `buf` with the `", stringify!($source), "` entry, UTF-16LE encoded and NUL-terminated.")]
        pub fn $utf16(&self, buf: &mut [u16]) -> Result<Option<usize>> {
            fill_opt_utf16(self.parsed()?.strings.$source(), buf)
        }
    };
}

/// The handle's position in the C8 lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum State {
    #[default]
    Uninitialized,
    Initialized,
    Open,
}

/// The state populated by a successful `open`, held apart from the
/// handle's configuration (codepage, abort flag) so `close` can drop it in
/// one move.
#[derive(Debug)]
struct Parsed {
    header: ShellLinkHeader,
    link_target_identifier: Option<LinkTargetIdentifier>,
    location: Option<LocationInformation>,
    strings: StringData,
    extra_data: ExtraData,
}

/// A parsed Windows Shell Link (`.lnk`) file.
///
/// Follows the C8 lifecycle: construct with [`ShellLink::initialize`], open
/// with [`ShellLink::open_path`] or [`ShellLink::open_stream`], read
/// through the accessor surface below, then either [`ShellLink::close`]
/// (leaves the handle reusable) or [`ShellLink::free`] (consumes it).
/// Every accessor returns `Error::Runtime(RuntimeError::ValueMissing)`
/// unless the handle is currently open.
#[derive(Debug)]
pub struct ShellLink {
    state: State,
    codepage: AsciiCodepage,
    abort: Arc<AtomicBool>,
    parsed: Option<Parsed>,
}

/// A clonable handle that can signal an in-flight [`ShellLink::open_path`]
/// or [`ShellLink::open_stream`] to abort from another thread (§5: "the
/// abort flag is set by a signal-like callback provided by the caller").
#[derive(Clone, Debug)]
pub struct AbortHandle(Arc<AtomicBool>);

impl AbortHandle {
    /// Requests that the in-flight (or next) `open` call abort at its next
    /// cooperative checkpoint.
    pub fn signal(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

impl Default for ShellLink {
    fn default() -> Self {
        Self::initialize()
    }
}

impl ShellLink {
    /// Allocates a handle with the default ASCII codepage (Windows-1252)
    /// and no abort requested. Matches the C8 `initialize` operation.
    pub fn initialize() -> Self {
        Self {
            state: State::Initialized,
            codepage: AsciiCodepage::default(),
            abort: Arc::new(AtomicBool::new(false)),
            parsed: None,
        }
    }

    /// Convenience constructor that initializes a handle and opens `path`
    /// in one step, matching the teacher's `ShellLink::open`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut link = Self::initialize();
        link.open_path(path)?;
        Ok(link)
    }

    /// A handle that can be cloned out and used to request abort from
    /// another thread while this handle's `open` is in flight.
    pub fn abort_handle(&self) -> AbortHandle {
        AbortHandle(self.abort.clone())
    }

    /// Requests abort directly, equivalent to
    /// `self.abort_handle().signal()`.
    pub fn signal_abort(&self) {
        self.abort.store(true, Ordering::SeqCst);
    }

    fn check_abort(&self) -> Result<()> {
        if self.abort.swap(false, Ordering::SeqCst) {
            return Err(Error::Runtime(RuntimeError::AbortRequested));
        }
        Ok(())
    }

    /// The caller-configured ASCII codepage used to decode non-Unicode
    /// strings.
    pub fn ascii_codepage(&self) -> AsciiCodepage {
        self.codepage
    }

    /// Sets the ASCII codepage used to decode non-Unicode strings in
    /// subsequent `open_path`/`open_stream` calls.
    pub fn set_ascii_codepage(&mut self, codepage: AsciiCodepage) {
        self.codepage = codepage;
    }

    /// Opens and parses the `.lnk` file at `path`. Fails with
    /// `RuntimeError::AlreadyOpen` if this handle is already open.
    pub fn open_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        debug!("opening {:?}", path.as_ref());
        let stream = ByteStream::open_path(path)?;
        self.open_with(stream)
    }

    /// Opens and parses a `.lnk` blob from an arbitrary `Read + Seek`
    /// source (a network buffer, an in-memory `Cursor`, ...).
    pub fn open_stream(&mut self, source: impl ReadSeekSource + 'static) -> Result<()> {
        debug!("opening from a caller-provided stream");
        let stream = ByteStream::open_object(source);
        self.open_with(stream)
    }

    fn open_with(&mut self, mut stream: ByteStream) -> Result<()> {
        if self.state == State::Open {
            return Err(Error::Runtime(RuntimeError::AlreadyOpen));
        }

        match self.parse(&mut stream) {
            Ok(parsed) => {
                self.parsed = Some(parsed);
                self.state = State::Open;
                Ok(())
            }
            Err(err) => {
                self.parsed = None;
                self.state = State::Initialized;
                Err(err)
            }
        }
    }

    fn parse(&self, stream: &mut ByteStream) -> Result<Parsed> {
        trace!("parsing shell link header");
        let header: ShellLinkHeader = stream.read_le()?;
        header.validate()?;
        debug!("header: {:#?}", header);
        let data_flags = *header.data_flags();
        let codepage = self.codepage.encoding();

        let link_target_identifier = if data_flags.contains(DataFlags::HAS_LINK_TARGET_IDENTIFIER) {
            trace!("parsing LinkTargetIdentifier");
            Some(stream.read_le()?)
        } else {
            None
        };

        self.check_abort()?;

        let location = if data_flags.contains(DataFlags::HAS_LOCATION_INFORMATION)
            && !data_flags.contains(DataFlags::FORCE_NO_LOCATION_INFORMATION)
        {
            trace!("parsing LocationInformation");
            Some(stream.read_le_args((codepage,))?)
        } else {
            None
        };

        self.check_abort()?;

        trace!("parsing StringData");
        let strings: StringData = stream.read_le_args((data_flags, codepage))?;

        self.check_abort()?;

        trace!("parsing ExtraData");
        let extra_data: ExtraData = stream.read_le_args((codepage,))?;

        Ok(Parsed {
            header,
            link_target_identifier,
            location,
            strings,
            extra_data,
        })
    }

    /// Releases the parsed state and the byte stream, leaving the handle
    /// `Initialized` and reusable for another `open_path`/`open_stream`.
    pub fn close(&mut self) {
        self.parsed = None;
        self.state = State::Initialized;
    }

    /// Consumes and releases the handle. Kept for API symmetry with the
    /// C8 lifecycle's `free`; Rust's ownership model makes this equivalent
    /// to dropping the value.
    pub fn free(self) {}

    fn parsed(&self) -> Result<&Parsed> {
        self.parsed.as_ref().ok_or(Error::Runtime(RuntimeError::ValueMissing))
    }

    // -- Header accessors ---------------------------------------------------

    /// The header's data-flag bitmap.
    pub fn data_flags(&self) -> Result<DataFlags> {
        Ok(*self.parsed()?.header.data_flags())
    }

    /// The link target's file attribute flags.
    pub fn file_attribute_flags(&self) -> Result<FileAttributeFlags> {
        Ok(*self.parsed()?.header.file_attribute_flags())
    }

    /// Raw 100-ns FILETIME tick count of the link target's creation time.
    pub fn creation_time(&self) -> Result<u64> {
        Ok((*self.parsed()?.header.creation_time()).into())
    }

    /// Raw 100-ns FILETIME tick count of the link target's last access
    /// time.
    pub fn access_time(&self) -> Result<u64> {
        Ok((*self.parsed()?.header.access_time()).into())
    }

    /// Raw 100-ns FILETIME tick count of the link target's last write
    /// time.
    pub fn write_time(&self) -> Result<u64> {
        Ok((*self.parsed()?.header.write_time()).into())
    }

    /// Size, in bytes, of the link target (least significant 32 bits).
    pub fn file_size(&self) -> Result<u32> {
        Ok(*self.parsed()?.header.file_size())
    }

    /// Index of the icon within the icon location.
    pub fn icon_index(&self) -> Result<i32> {
        Ok(*self.parsed()?.header.icon_index())
    }

    /// Expected window state of the launched application.
    pub fn show_command(&self) -> Result<ShowCommand> {
        Ok(*self.parsed()?.header.show_command())
    }

    /// The hotkey assigned to launch the application referenced by the
    /// link.
    pub fn hotkey(&self) -> Result<HotkeyFlags> {
        Ok(*self.parsed()?.header.hotkey())
    }

    // -- Location accessors --------------------------------------------------

    /// `true` iff a LocationInformation record is present.
    pub fn link_refers_to_file(&self) -> Result<bool> {
        Ok(self.parsed()?.location.is_some())
    }

    /// The type of drive the link target is stored on, if a volume record
    /// is present.
    pub fn drive_type(&self) -> Result<Option<DriveType>> {
        Ok(self
            .parsed()?
            .location
            .as_ref()
            .and_then(|l| l.volume_id())
            .map(|v| *v.drive_type()))
    }

    /// The drive's serial number, if a volume record is present.
    pub fn drive_serial_number(&self) -> Result<Option<u32>> {
        Ok(self
            .parsed()?
            .location
            .as_ref()
            .and_then(|l| l.volume_id())
            .map(|v| *v.drive_serial_number()))
    }

    fn volume_label_str(&self) -> Result<Option<&str>> {
        Ok(self
            .parsed()?
            .location
            .as_ref()
            .and_then(|l| l.volume_id())
            .map(|v| v.volume_label()))
    }

    /// The label of the volume the link target is stored on.
    pub fn volume_label(&self) -> Result<Option<&str>> {
        self.volume_label_str()
    }

    /// Byte length (including terminator) [`Self::volume_label_utf8`] would
    /// write.
    pub fn volume_label_utf8_size(&self) -> Result<Option<usize>> {
        Ok(self.volume_label_str()?.map(utf8_fill_size))
    }

    /// Fills `buf` with the volume label, UTF-8 encoded and
    /// NUL-terminated.
    pub fn volume_label_utf8(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        fill_opt_utf8(self.volume_label_str()?, buf)
    }

    /// Code-unit length (including terminator) [`Self::volume_label_utf16`]
    /// would write.
    pub fn volume_label_utf16_size(&self) -> Result<Option<usize>> {
        Ok(self.volume_label_str()?.map(utf16_fill_size))
    }

    /// Fills `buf` with the volume label, UTF-16LE encoded and
    /// NUL-terminated.
    pub fn volume_label_utf16(&self, buf: &mut [u16]) -> Result<Option<usize>> {
        fill_opt_utf16(self.volume_label_str()?, buf)
    }

    fn local_path_string(&self) -> Result<Option<String>> {
        let location = match self.parsed()?.location.as_ref() {
            Some(l) => l,
            None => return Ok(None),
        };
        let prefix = location.local_base_path_unicode().or(location.local_base_path());
        Ok(prefix.map(|p| format!("{p}{}", location.common_path_suffix_unicode().unwrap_or(location.common_path_suffix()))))
    }

    /// The local path to the link target, combining `LocalBasePath` (or
    /// its Unicode form) with `CommonPathSuffix`.
    pub fn local_path(&self) -> Result<Option<String>> {
        self.local_path_string()
    }

    /// Byte length (including terminator) [`Self::local_path_utf8`] would
    /// write.
    pub fn local_path_utf8_size(&self) -> Result<Option<usize>> {
        Ok(self.local_path_string()?.as_deref().map(utf8_fill_size))
    }

    /// Fills `buf` with the local path, UTF-8 encoded and NUL-terminated.
    pub fn local_path_utf8(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        fill_opt_utf8(self.local_path_string()?.as_deref(), buf)
    }

    /// Code-unit length (including terminator) [`Self::local_path_utf16`]
    /// would write.
    pub fn local_path_utf16_size(&self) -> Result<Option<usize>> {
        Ok(self.local_path_string()?.as_deref().map(utf16_fill_size))
    }

    /// Fills `buf` with the local path, UTF-16LE encoded and
    /// NUL-terminated.
    pub fn local_path_utf16(&self, buf: &mut [u16]) -> Result<Option<usize>> {
        fill_opt_utf16(self.local_path_string()?.as_deref(), buf)
    }

    fn network_path_str(&self) -> Result<Option<&str>> {
        Ok(self
            .parsed()?
            .location
            .as_ref()
            .and_then(|l| l.common_network_relative_link())
            .map(|n| n.net_name()))
    }

    /// The UNC network share path to the link target (e.g.
    /// `\\HOST\SHARE`).
    pub fn network_path(&self) -> Result<Option<&str>> {
        self.network_path_str()
    }

    /// Byte length (including terminator) [`Self::network_path_utf8`]
    /// would write.
    pub fn network_path_utf8_size(&self) -> Result<Option<usize>> {
        Ok(self.network_path_str()?.map(utf8_fill_size))
    }

    /// Fills `buf` with the network path, UTF-8 encoded and
    /// NUL-terminated.
    pub fn network_path_utf8(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        fill_opt_utf8(self.network_path_str()?, buf)
    }

    /// Code-unit length (including terminator)
    /// [`Self::network_path_utf16`] would write.
    pub fn network_path_utf16_size(&self) -> Result<Option<usize>> {
        Ok(self.network_path_str()?.map(utf16_fill_size))
    }

    /// Fills `buf` with the network path, UTF-16LE encoded and
    /// NUL-terminated.
    pub fn network_path_utf16(&self, buf: &mut [u16]) -> Result<Option<usize>> {
        fill_opt_utf16(self.network_path_str()?, buf)
    }

    /// Diagnostic notes about any LocationInformation Unicode offset field
    /// that was present but out of range, and was therefore treated as
    /// absent instead of failing the parse.
    pub fn location_diagnostic_offsets(&self) -> Result<&[String]> {
        Ok(self
            .parsed()?
            .location
            .as_ref()
            .map(|l| l.diagnostic_offsets())
            .unwrap_or(&[]))
    }

    // -- Target identifier accessor -------------------------------------------

    /// Byte length of the opaque LinkTargetIdentifier payload, if present.
    pub fn link_target_identifier_size(&self) -> Result<Option<usize>> {
        Ok(self.parsed()?.link_target_identifier.as_ref().map(|t| t.raw_size()))
    }

    /// Fills `buf` with the opaque, re-serialized LinkTargetIdentifier
    /// payload.
    pub fn link_target_identifier_data(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        match self.parsed()?.link_target_identifier.as_ref() {
            Some(target) => Ok(Some(target.fill_raw(buf)?)),
            None => Ok(None),
        }
    }

    // -- StringData accessors -------------------------------------------------

    string_field_accessors!(description, description_utf8_size, description_utf8, description_utf16_size, description_utf16, name_string);
    string_field_accessors!(relative_path, relative_path_utf8_size, relative_path_utf8, relative_path_utf16_size, relative_path_utf16, relative_path);
    string_field_accessors!(working_dir, working_dir_utf8_size, working_dir_utf8, working_dir_utf16_size, working_dir_utf16, working_dir);
    string_field_accessors!(arguments, arguments_utf8_size, arguments_utf8, arguments_utf16_size, arguments_utf16, command_line_arguments);
    string_field_accessors!(icon_location, icon_location_utf8_size, icon_location_utf8, icon_location_utf16_size, icon_location_utf16, icon_location);

    // -- Distributed link tracking accessors ----------------------------------

    fn tracker_block(&self) -> Result<Option<&crate::extradata::tracker_data::TrackerDataBlock>> {
        Ok(self.parsed()?.extra_data.blocks().iter().find_map(|record| match record.kind() {
            ExtraDataBlock::TrackerProps(tracker) => Some(tracker),
            _ => None,
        }))
    }

    /// `true` iff a distributed link tracking data block was parsed.
    pub fn has_distributed_link_tracking_data(&self) -> Result<bool> {
        Ok(self.tracker_block()?.is_some())
    }

    /// NetBIOS name of the machine where the link target last resided.
    pub fn machine_id(&self) -> Result<Option<&str>> {
        Ok(self.tracker_block()?.map(|t| t.machine_id()))
    }

    /// Byte length (including terminator) [`Self::machine_id_utf8`] would
    /// write.
    pub fn machine_id_utf8_size(&self) -> Result<Option<usize>> {
        Ok(self.tracker_block()?.map(|t| utf8_fill_size(t.machine_id())))
    }

    /// Fills `buf` with the machine identifier, UTF-8 encoded and
    /// NUL-terminated.
    pub fn machine_id_utf8(&self, buf: &mut [u8]) -> Result<Option<usize>> {
        fill_opt_utf8(self.tracker_block()?.map(|t| t.machine_id()), buf)
    }

    /// The droid-volume GUID, if distributed link tracking data is
    /// present.
    pub fn droid_volume_identifier(&self, buf: &mut [u8]) -> Result<Option<()>> {
        fill_opt_guid(self.tracker_block()?.map(|t| &t.droid()[0]), buf)
    }

    /// The droid-file GUID, if distributed link tracking data is present.
    pub fn droid_file_identifier(&self, buf: &mut [u8]) -> Result<Option<()>> {
        fill_opt_guid(self.tracker_block()?.map(|t| &t.droid()[1]), buf)
    }

    /// The birth-droid-volume GUID, if distributed link tracking data is
    /// present.
    pub fn birth_droid_volume_identifier(&self, buf: &mut [u8]) -> Result<Option<()>> {
        fill_opt_guid(self.tracker_block()?.map(|t| &t.droid_birth()[0]), buf)
    }

    /// The birth-droid-file GUID, if distributed link tracking data is
    /// present.
    pub fn birth_droid_file_identifier(&self, buf: &mut [u8]) -> Result<Option<()>> {
        fill_opt_guid(self.tracker_block()?.map(|t| &t.droid_birth()[1]), buf)
    }

    // -- Data block accessors -------------------------------------------------

    /// Number of ExtraData blocks parsed.
    pub fn data_block_count(&self) -> Result<usize> {
        Ok(self.parsed()?.extra_data.blocks().len())
    }

    fn data_block(&self, index: usize) -> Result<Option<&ExtraDataRecord>> {
        Ok(self.parsed()?.extra_data.blocks().get(index))
    }

    /// The 4-byte signature of the block at `index`.
    pub fn data_block_signature(&self, index: usize) -> Result<Option<u32>> {
        Ok(self.data_block(index)?.map(|r| r.signature()))
    }

    /// Byte length of the block's raw payload at `index`.
    pub fn data_block_raw_size(&self, index: usize) -> Result<Option<usize>> {
        Ok(self.data_block(index)?.map(|r| r.raw().len()))
    }

    /// Fills `buf` with the block's raw, uninterpreted payload at `index`.
    pub fn data_block_raw(&self, index: usize, buf: &mut [u8]) -> Result<Option<usize>> {
        match self.data_block(index)? {
            Some(record) => {
                let raw = record.raw();
                if buf.len() < raw.len() {
                    return Err(Error::Argument("destination buffer is too small".into()));
                }
                buf[..raw.len()].copy_from_slice(raw);
                Ok(Some(raw.len()))
            }
            None => Ok(None),
        }
    }

    /// The typed, decoded form of the block at `index`.
    pub fn data_block_kind(&self, index: usize) -> Result<Option<&ExtraDataBlock>> {
        Ok(self.data_block(index)?.map(|r| r.kind()))
    }
}

fn fill_opt_utf8(s: Option<&str>, buf: &mut [u8]) -> Result<Option<usize>> {
    match s {
        Some(s) => Ok(Some(fill_utf8(s, buf)?)),
        None => Ok(None),
    }
}

fn fill_opt_utf16(s: Option<&str>, buf: &mut [u16]) -> Result<Option<usize>> {
    match s {
        Some(s) => Ok(Some(fill_utf16(s, buf)?)),
        None => Ok(None),
    }
}

fn fill_opt_guid(guid: Option<&Guid>, buf: &mut [u8]) -> Result<Option<()>> {
    match guid {
        Some(guid) => {
            guid.fill(buf)?;
            Ok(Some(()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::header::LNK_CLSID;
    use std::io::Cursor;

    fn minimal_lnk_with_description() -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x4cu32.to_le_bytes());
        bytes.extend_from_slice(&LNK_CLSID);
        bytes.extend_from_slice(&0x0000_0084u32.to_le_bytes()); // HAS_DESCRIPTION_STRING | IS_UNICODE
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file attributes
        bytes.extend_from_slice(&0u64.to_le_bytes()); // creation
        bytes.extend_from_slice(&0u64.to_le_bytes()); // access
        bytes.extend_from_slice(&0u64.to_le_bytes()); // write
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file size
        bytes.extend_from_slice(&0i32.to_le_bytes()); // icon index
        bytes.extend_from_slice(&1u32.to_le_bytes()); // show command: normal
        bytes.push(0); // hotkey low
        bytes.push(0); // hotkey high
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(bytes.len(), 76);

        bytes.extend_from_slice(&3u16.to_le_bytes()); // 3 UTF-16 chars
        for c in "ABC".encode_utf16() {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
        bytes.extend_from_slice(&0u32.to_le_bytes()); // ExtraData terminator
        bytes
    }

    #[test]
    fn lifecycle_rejects_double_open() {
        let bytes = minimal_lnk_with_description();
        let mut link = ShellLink::initialize();
        link.open_stream(Cursor::new(bytes.clone())).unwrap();
        assert!(matches!(
            link.open_stream(Cursor::new(bytes)),
            Err(Error::Runtime(RuntimeError::AlreadyOpen))
        ));
    }

    #[test]
    fn accessors_require_open_state() {
        let link = ShellLink::initialize();
        assert!(matches!(
            link.data_flags(),
            Err(Error::Runtime(RuntimeError::ValueMissing))
        ));
    }

    #[test]
    fn s1_minimal_shortcut_with_description_only() {
        let bytes = minimal_lnk_with_description();
        let mut link = ShellLink::initialize();
        link.open_stream(Cursor::new(bytes)).unwrap();

        assert_eq!(link.description_utf8_size().unwrap(), Some(4));
        let mut buf = [0u8; 4];
        link.description_utf8(&mut buf).unwrap();
        assert_eq!(&buf, b"ABC\0");
        assert_eq!(link.relative_path().unwrap(), None);
        assert!(!link.link_refers_to_file().unwrap());
        assert_eq!(link.data_block_count().unwrap(), 0);
    }

    #[test]
    fn s2_hotkey_ctrl_alt_k() {
        let mut bytes = minimal_lnk_with_description();
        // Hotkey low/high bytes sit at offsets 64/65 of the 76-byte header.
        bytes[64] = 0x4B;
        bytes[65] = 0x06;
        let mut link = ShellLink::initialize();
        link.open_stream(Cursor::new(bytes)).unwrap();
        assert_eq!(link.hotkey().unwrap().value(), 0x064B);
    }

    #[test]
    fn close_returns_handle_to_initialized_and_allows_reopen() {
        let bytes = minimal_lnk_with_description();
        let mut link = ShellLink::initialize();
        link.open_stream(Cursor::new(bytes.clone())).unwrap();
        link.close();
        assert!(matches!(
            link.data_flags(),
            Err(Error::Runtime(RuntimeError::ValueMissing))
        ));
        link.open_stream(Cursor::new(bytes)).unwrap();
        assert!(link.data_flags().is_ok());
    }

    #[test]
    fn signal_abort_before_open_fails_the_open() {
        let bytes = minimal_lnk_with_description();
        let mut link = ShellLink::initialize();
        link.signal_abort();
        let err = link.open_stream(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::AbortRequested)));
        assert!(matches!(
            link.data_flags(),
            Err(Error::Runtime(RuntimeError::ValueMissing))
        ));
    }

    #[test]
    fn zero_byte_stream_is_truncated_not_io() {
        let mut link = ShellLink::initialize();
        let err = link.open_stream(Cursor::new(Vec::new())).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::Truncated { .. })));
        assert!(matches!(
            link.data_flags(),
            Err(Error::Runtime(RuntimeError::ValueMissing))
        ));
    }

    #[test]
    fn data_flag_set_with_segment_absent_is_truncated_not_io() {
        // HAS_DESCRIPTION_STRING | IS_UNICODE is set, but the stream ends
        // right after the header, with no StringData segment at all.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x4cu32.to_le_bytes());
        bytes.extend_from_slice(&LNK_CLSID);
        bytes.extend_from_slice(&0x0000_0084u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file attributes
        bytes.extend_from_slice(&0u64.to_le_bytes()); // creation
        bytes.extend_from_slice(&0u64.to_le_bytes()); // access
        bytes.extend_from_slice(&0u64.to_le_bytes()); // write
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file size
        bytes.extend_from_slice(&0i32.to_le_bytes()); // icon index
        bytes.extend_from_slice(&1u32.to_le_bytes()); // show command: normal
        bytes.push(0); // hotkey low
        bytes.push(0); // hotkey high
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(bytes.len(), 76);

        let mut link = ShellLink::initialize();
        let err = link.open_stream(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::Truncated { .. })));
        assert!(matches!(
            link.data_flags(),
            Err(Error::Runtime(RuntimeError::ValueMissing))
        ));
    }
}
