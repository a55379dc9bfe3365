#![allow(missing_docs)]
use binread::{derive_binread, BinRead};
use bitflags::bitflags;
use getset::Getters;
use num_derive::FromPrimitive;

use crate::binread_flags::*;
use crate::error::InputError;
use crate::FileTime;

/// The fixed 16-byte class identifier every LNK file must carry (§6):
/// `00021401-0000-0000-C000-000000000046`, stored on the wire in GUID
/// packet (mixed-endian) representation.
pub(crate) const LNK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/// The fixed 76-byte leader of every LNK file (§3, C3).
///
/// Invariant: `header_size` MUST be 76 and `class_identifier` MUST equal
/// [`LNK_CLSID`]; both are validated in [`ShellLinkHeader::validate`]
/// rather than via a `binread` `#[br(assert)]`, so a mismatch surfaces as
/// `InputError::SignatureMismatch` specifically instead of a generic
/// assertion failure (§7 propagation policy: "surfaces the most specific
/// kind").
#[derive(Clone, Debug, Getters)]
#[derive_binread]
#[br(little)]
#[getset(get = "pub")]
pub struct ShellLinkHeader {
    header_size: u32,

    #[br(count = 16)]
    #[getset(skip)]
    class_identifier: Vec<u8>,

    /// Specifies which optional structures follow the header, and which
    /// behavioral bits apply (§6 "Data-flag bitmap"). Unrecognized bits are
    /// preserved, not rejected (see [`crate::binread_flags`]).
    data_flags: DataFlags,

    /// File attributes of the link target, if it is a file system item.
    file_attribute_flags: FileAttributeFlags,

    /// Creation time of the link target, in UTC. Zero means "not set".
    creation_time: FileTime,

    /// Last access time of the link target, in UTC. Zero means "not set".
    access_time: FileTime,

    /// Last write time of the link target, in UTC. Zero means "not set".
    write_time: FileTime,

    /// Size, in bytes, of the link target (least significant 32 bits for
    /// targets larger than 4 GiB).
    file_size: u32,

    /// Index of an icon within the icon location.
    icon_index: i32,

    /// Expected window state of the launched application.
    show_command: ShowCommand,

    /// Hotkey used to launch the application referenced by the link.
    hotkey: HotkeyFlags,

    #[getset(skip)]
    reserved1: u16,
    #[getset(skip)]
    reserved2: u32,
    #[getset(skip)]
    reserved3: u32,
}

impl ShellLinkHeader {
    /// Validates the structural invariants binread's derive can't express
    /// precisely enough (§4.3): header size and class identifier.
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        if self.header_size != 0x4c {
            return Err(InputError::SignatureMismatch);
        }
        if self.class_identifier != LNK_CLSID {
            return Err(InputError::SignatureMismatch);
        }
        Ok(())
    }
}

bitflags! {
    /// Enumerates which optional segments follow the header and which
    /// behavioral bits are in effect (§6 "Data-flag bitmap"). The low 20
    /// bits are defined; the rest are reserved and preserved verbatim.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct DataFlags: u32 {
        /// A LinkTargetIdentifier structure follows the header.
        const HAS_LINK_TARGET_IDENTIFIER                    = 0x0000_0001;
        /// A LocationInformation structure is present.
        const HAS_LOCATION_INFORMATION                      = 0x0000_0002;
        /// A description StringData entry is present.
        const HAS_DESCRIPTION_STRING                        = 0x0000_0004;
        /// A relative-path StringData entry is present.
        const HAS_RELATIVE_PATH_STRING                      = 0x0000_0008;
        /// A working-directory StringData entry is present.
        const HAS_WORKING_DIRECTORY_STRING                  = 0x0000_0010;
        /// A command-line-arguments StringData entry is present.
        const HAS_COMMAND_LINE_ARGUMENTS_STRING             = 0x0000_0020;
        /// An icon-location StringData entry is present.
        const HAS_ICON_LOCATION_STRING                      = 0x0000_0040;
        /// StringData entries are UTF-16LE; otherwise they use the
        /// configured ASCII codepage.
        const IS_UNICODE                                    = 0x0000_0080;
        /// LocationInformation MUST be ignored even if present.
        const FORCE_NO_LOCATION_INFORMATION                 = 0x0000_0100;
        /// An EnvironmentVariablesLocation data block is present.
        const HAS_ENVIRONMENT_VARIABLES_LOCATION_BLOCK      = 0x0000_0200;
        /// Run the target in a separate VM (16-bit targets).
        const RUN_IN_SEPARATE_PROCESS                       = 0x0000_0400;
        /// A Darwin (application identifier) data block is present.
        const HAS_DARWIN_IDENTIFIER                         = 0x0000_1000;
        /// Activate the target as a different user.
        const RUN_AS_USER                                   = 0x0000_2000;
        /// An IconLocation data block is present.
        const HAS_ICON_LOCATION_BLOCK                       = 0x0000_4000;
        /// The target's shell-namespace location is preferred over an
        /// aliased form when parsing the IDList.
        const NO_PIDL_ALIAS                                 = 0x0000_8000;
        /// A ShimLayer data block applies a compatibility shim.
        const RUN_WITH_SHIM_LAYER                           = 0x0002_0000;
        /// The distributed link tracking data block is ignored.
        const NO_DISTRIBUTED_LINK_TRACKING_DATA_BLOCK       = 0x0004_0000;
        /// A metadata PropertyStore data block is present.
        const HAS_METADATA_PROPERTY_STORE_DATA_BLOCK        = 0x0008_0000;
    }
}

binread_flags!(DataFlags, u32);

bitflags! {
    /// File attributes of the link target, if it is a file system item
    /// (§3). Out-of-spec bits are preserved rather than rejected.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct FileAttributeFlags: u32 {
        const FILE_ATTRIBUTE_READONLY               = 0x0000_0001;
        const FILE_ATTRIBUTE_HIDDEN                 = 0x0000_0002;
        const FILE_ATTRIBUTE_SYSTEM                 = 0x0000_0004;
        const FILE_ATTRIBUTE_DIRECTORY              = 0x0000_0010;
        const FILE_ATTRIBUTE_ARCHIVE                = 0x0000_0020;
        const FILE_ATTRIBUTE_NORMAL                 = 0x0000_0080;
        const FILE_ATTRIBUTE_TEMPORARY              = 0x0000_0100;
        const FILE_ATTRIBUTE_SPARSE_FILE            = 0x0000_0200;
        const FILE_ATTRIBUTE_REPARSE_POINT          = 0x0000_0400;
        const FILE_ATTRIBUTE_COMPRESSED             = 0x0000_0800;
        const FILE_ATTRIBUTE_OFFLINE                = 0x0000_1000;
        const FILE_ATTRIBUTE_NOT_CONTENT_INDEXED    = 0x0000_2000;
        const FILE_ATTRIBUTE_ENCRYPTED              = 0x0000_4000;
    }
}

binread_flags!(FileAttributeFlags, u32);

/// The keystroke combination used to launch the link target (§3).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, BinRead)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HotkeyFlags {
    low_byte: HotkeyKey,
    high_byte: HotkeyModifiers,
}

impl HotkeyFlags {
    /// The raw 16-bit value as stored on disk (low byte = key, high byte
    /// = modifiers), matching the accessor surface's `get_hot_key_value`.
    pub fn value(&self) -> u16 {
        self.low_byte as u16 | ((self.high_byte.bits() as u16) << 8)
    }

    /// The primary key assigned to the hotkey.
    pub fn key(&self) -> HotkeyKey {
        self.low_byte
    }

    /// The modifiers (Shift, Ctrl, Alt) for this hotkey.
    pub fn modifiers(&self) -> HotkeyModifiers {
        self.high_byte
    }
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive, BinRead)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[br(repr = u8)]
pub enum HotkeyKey {
    NoKeyAssigned = 0x00,
    Key0 = 0x30,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,
    KeyA = 0x41,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,
    F1 = 0x70,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,
    NumLock = 0x90,
    ScrollLock,
}

bitflags! {
    /// Modifier keys combined with a [`HotkeyKey`].
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct HotkeyModifiers: u8 {
        const NO_MODIFIER       = 0x00;
        const HOTKEYF_SHIFT     = 0x01;
        const HOTKEYF_CONTROL   = 0x02;
        const HOTKEYF_ALT       = 0x04;
    }
}

binread_flags!(HotkeyModifiers, u8);

/// The expected window state of an application launched by the link.
///
/// Read from a raw 32-bit value rather than via a `#[br(repr)]` enum derive:
/// MS-SHLLINK defines only these three values, but writers in the wild emit
/// others, and a reader that rejects the whole file over an out-of-range
/// show-window value would fail on otherwise-valid input. An unrecognized
/// value is treated as `ShowNormal`, matching the original readers this
/// format is interoperable with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ShowCommand {
    /// The application's window is shown normally.
    ShowNormal = 0x01,
    /// The application's window is maximized.
    ShowMaximized = 0x03,
    /// The application's window is minimized and not given focus.
    ShowMinNoActive = 0x07,
}

impl BinRead for ShowCommand {
    type Args = ();

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        options: &binread::ReadOptions,
        _args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        let raw = u32::read_options(reader, options, ())?;
        Ok(num_traits::FromPrimitive::from_u32(raw).unwrap_or(ShowCommand::ShowNormal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binread::BinReaderExt;
    use std::io::Cursor;

    fn minimal_header(data_flags: u32, hotkey_low: u8, hotkey_high: u8) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(76);
        bytes.extend_from_slice(&0x4cu32.to_le_bytes());
        bytes.extend_from_slice(&LNK_CLSID);
        bytes.extend_from_slice(&data_flags.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file attributes
        bytes.extend_from_slice(&0u64.to_le_bytes()); // creation
        bytes.extend_from_slice(&0u64.to_le_bytes()); // access
        bytes.extend_from_slice(&0u64.to_le_bytes()); // write
        bytes.extend_from_slice(&0u32.to_le_bytes()); // file size
        bytes.extend_from_slice(&0i32.to_le_bytes()); // icon index
        bytes.extend_from_slice(&1u32.to_le_bytes()); // show command: normal
        bytes.push(hotkey_low);
        bytes.push(hotkey_high);
        bytes.extend_from_slice(&0u16.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(bytes.len(), 76);
        bytes
    }

    #[test]
    fn header_is_exactly_76_bytes() {
        let bytes = minimal_header(0, 0, 0);
        let mut cursor = Cursor::new(bytes);
        let header: ShellLinkHeader = cursor.read_le().unwrap();
        header.validate().unwrap();
        assert_eq!(cursor.position(), 76);
    }

    #[test]
    fn hotkey_ctrl_alt_k_decodes_to_064b() {
        // S2: hotkey bytes 4B 06 => low byte KeyK (0x4B), high byte CTRL|ALT (0x06)
        let bytes = minimal_header(0, 0x4B, 0x06);
        let mut cursor = Cursor::new(bytes);
        let header: ShellLinkHeader = cursor.read_le().unwrap();
        assert_eq!(header.hotkey().value(), 0x064B);
    }

    #[test]
    fn unrecognized_data_flag_bits_are_preserved() {
        let reserved_bit = 1u32 << 28;
        let bytes = minimal_header(reserved_bit, 0, 0);
        let mut cursor = Cursor::new(bytes);
        let header: ShellLinkHeader = cursor.read_le().unwrap();
        assert!(header.data_flags().bits() & reserved_bit == reserved_bit);
    }

    #[test]
    fn wrong_class_identifier_is_signature_mismatch() {
        let mut bytes = minimal_header(0, 0, 0);
        bytes[4] ^= 0xff;
        let mut cursor = Cursor::new(bytes);
        let header: ShellLinkHeader = cursor.read_le().unwrap();
        assert!(matches!(header.validate(), Err(InputError::SignatureMismatch)));
    }
}
