//! Header field decoding, exercised against a minimal in-memory fixture
//! (§4.3, C3). Grounded on the teacher's `tests/test.rs`, which asserted
//! the same fields against a binary fixture file; rebuilt here from
//! literal bytes since no fixture ships with this crate (see
//! `tests/scenarios.rs`).

use std::io::Cursor;

#[allow(unused)]
use log::{debug, error, info, trace, warn};

use shelllink::{DataFlags, FileAttributeFlags, HotkeyKey, HotkeyModifiers, ShellLink, ShowCommand};

const LNK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

#[test]
fn test_lnk_header() {
    let data_flags = DataFlags::HAS_LINK_TARGET_IDENTIFIER
        | DataFlags::HAS_LOCATION_INFORMATION
        | DataFlags::HAS_RELATIVE_PATH_STRING
        | DataFlags::HAS_WORKING_DIRECTORY_STRING
        | DataFlags::IS_UNICODE;

    // A LinkTargetIdentifier consisting of an empty IDList (just the
    // terminating zero ID size) is the smallest legal value for that field.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&0x4cu32.to_le_bytes());
    bytes.extend_from_slice(&LNK_CLSID);
    bytes.extend_from_slice(&data_flags.bits().to_le_bytes());
    bytes.extend_from_slice(&FileAttributeFlags::FILE_ATTRIBUTE_ARCHIVE.bits().to_le_bytes());
    bytes.extend_from_slice(&0x01c91515f2eee9d0u64.to_le_bytes()); // creation
    bytes.extend_from_slice(&0x01c91515f2eee9d0u64.to_le_bytes()); // access
    bytes.extend_from_slice(&0x01c91515f2eee9d0u64.to_le_bytes()); // write
    bytes.extend_from_slice(&0u32.to_le_bytes()); // file size
    bytes.extend_from_slice(&0i32.to_le_bytes()); // icon index
    bytes.extend_from_slice(&1u32.to_le_bytes()); // show command: normal
    bytes.push(0); // hotkey low: no key
    bytes.push(0); // hotkey high: no modifiers
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(bytes.len(), 76);

    // LinkTargetIdentifier: IDList size 2 (just the zero-size terminator).
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&0u16.to_le_bytes());

    // LocationInformation: minimal structure with neither VolumeID nor
    // CommonNetworkRelativeLink, just an empty CommonPathSuffix.
    let header_size = 0x1Cu32;
    let suffix_offset = header_size;
    let total_size = suffix_offset + 1;
    bytes.extend_from_slice(&total_size.to_le_bytes());
    bytes.extend_from_slice(&header_size.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes()); // location_flags: none present
    bytes.extend_from_slice(&0u32.to_le_bytes()); // volume_id_offset
    bytes.extend_from_slice(&0u32.to_le_bytes()); // local_base_path_offset
    bytes.extend_from_slice(&0u32.to_le_bytes()); // common_network_relative_link_offset
    bytes.extend_from_slice(&suffix_offset.to_le_bytes());
    bytes.push(0); // common_path_suffix: empty string

    // StringData: RelativePath and WorkingDir, both UTF-16.
    for s in ["rel.exe", "C:\\work"] {
        bytes.extend_from_slice(&(s.encode_utf16().count() as u16).to_le_bytes());
        for c in s.encode_utf16() {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
    }

    bytes.extend_from_slice(&0u32.to_le_bytes()); // ExtraData terminator

    let mut link = ShellLink::initialize();
    link.open_stream(Cursor::new(bytes)).unwrap();

    assert_eq!(link.data_flags().unwrap(), data_flags, "data flags should be parsed correctly");
    assert_eq!(
        link.file_attribute_flags().unwrap(),
        FileAttributeFlags::FILE_ATTRIBUTE_ARCHIVE,
        "file attributes should be parsed correctly"
    );

    assert_eq!(link.creation_time().unwrap(), 0x01c91515f2eee9d0, "creation time should be parsed correctly");
    assert_eq!(link.access_time().unwrap(), 0x01c91515f2eee9d0, "access time should be parsed correctly");
    assert_eq!(link.write_time().unwrap(), 0x01c91515f2eee9d0, "write time should be parsed correctly");

    assert_eq!(link.file_size().unwrap(), 0x00, "file size should be parsed correctly");
    assert_eq!(link.icon_index().unwrap(), 0x00, "icon index should be parsed correctly");
    assert_eq!(link.show_command().unwrap(), ShowCommand::ShowNormal, "show command should be parsed correctly");
    assert_eq!(link.hotkey().unwrap().key(), HotkeyKey::NoKeyAssigned);
    assert_eq!(link.hotkey().unwrap().modifiers(), HotkeyModifiers::empty());

    assert_eq!(link.relative_path().unwrap(), Some("rel.exe"));
    assert_eq!(link.working_dir().unwrap(), Some("C:\\work"));
}
