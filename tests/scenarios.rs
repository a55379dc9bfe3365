//! End-to-end scenarios exercising the public accessor surface against
//! literal byte-level fixtures, covering the scenarios not already
//! exercised by the colocated unit tests in `src/file.rs` (S1, S2).
//!
//! Grounded on the teacher's `tests/test.rs`, which built assertions
//! against a binary `.lnk` fixture file; since no such fixture ships with
//! this crate, the fixtures here are constructed byte-by-byte in Rust,
//! the same way `src/location.rs`'s and `src/file.rs`'s own unit tests
//! build theirs.

use std::io::Cursor;

use shelllink::{Error, RuntimeError, ShellLink};

const LNK_CLSID: [u8; 16] = [
    0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

fn header(data_flags: u32) -> Vec<u8> {
    let mut bytes = Vec::new();
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
    bytes.push(0); // hotkey low
    bytes.push(0); // hotkey high
    bytes.extend_from_slice(&0u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(bytes.len(), 76);
    bytes
}

/// S3 — a LocationInformation structure carrying only a
/// CommonNetworkRelativeLink (UNC network path), no VolumeID.
#[test]
fn s3_unc_network_path_only() {
    const HAS_LOCATION_INFORMATION: u32 = 0x0000_0002;
    let mut bytes = header(HAS_LOCATION_INFORMATION);

    // -- LocationInformation --
    let net_name = b"\\\\HOST\\SHARE\0";
    let device_name = b"\0";
    let common_path_suffix = b"\0";

    // CommonNetworkRelativeLink body: size(4) flags(4) net_name_off(4)
    // device_name_off(4) network_provider_type(4) then net_name, device_name.
    let cnrl_header_size = 0x14u32;
    let net_name_offset = cnrl_header_size;
    let device_name_offset = net_name_offset + net_name.len() as u32;
    let cnrl_size = device_name_offset + device_name.len() as u32;

    let mut cnrl = Vec::new();
    cnrl.extend_from_slice(&cnrl_size.to_le_bytes());
    cnrl.extend_from_slice(&0u32.to_le_bytes()); // flags: neither VALID_DEVICE nor VALID_NET_TYPE
    cnrl.extend_from_slice(&net_name_offset.to_le_bytes());
    cnrl.extend_from_slice(&0u32.to_le_bytes()); // device_name_offset (must be 0, VALID_DEVICE unset)
    // A valid NetworkProviderType discriminant is required on the wire even
    // when VALID_NET_TYPE is unset and the value is semantically ignored;
    // `CommonNetworkRelativeLinkFlags` has no all-zero enum variant to fall
    // back on.
    cnrl.extend_from_slice(&0x0002_0000u32.to_le_bytes()); // Smb
    cnrl.extend_from_slice(net_name);
    cnrl.extend_from_slice(device_name);

    let location_header_size = 0x1Cu32; // too old to carry *OffsetUnicode fields
    let common_network_relative_link_offset = location_header_size;
    let common_path_suffix_offset = common_network_relative_link_offset + cnrl.len() as u32;
    let location_size = common_path_suffix_offset + common_path_suffix.len() as u32;

    let mut location = Vec::new();
    location.extend_from_slice(&location_size.to_le_bytes());
    location.extend_from_slice(&location_header_size.to_le_bytes());
    location.extend_from_slice(&0x0000_0002u32.to_le_bytes()); // COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX
    location.extend_from_slice(&0u32.to_le_bytes()); // volume_id_offset
    location.extend_from_slice(&0u32.to_le_bytes()); // local_base_path_offset
    location.extend_from_slice(&common_network_relative_link_offset.to_le_bytes());
    location.extend_from_slice(&common_path_suffix_offset.to_le_bytes());
    location.extend_from_slice(&cnrl);
    location.extend_from_slice(common_path_suffix);

    bytes.extend_from_slice(&location);
    bytes.extend_from_slice(&0u32.to_le_bytes()); // ExtraData terminator

    let mut link = ShellLink::initialize();
    link.open_stream(Cursor::new(bytes)).unwrap();

    assert!(link.link_refers_to_file().unwrap());
    assert_eq!(link.local_path().unwrap(), None);
    assert_eq!(link.network_path().unwrap(), Some("\\\\HOST\\SHARE"));
}

/// S4 — a single TrackerDataBlock (distributed link tracking) carrying a
/// machine identifier and four droid GUIDs.
#[test]
fn s4_distributed_link_tracking_present() {
    let mut bytes = header(0);

    let mut machine_id = b"machine-01".to_vec();
    machine_id.resize(16, 0);

    fn guid_bytes(tag: u8) -> [u8; 16] {
        let mut b = [0u8; 16];
        b[0] = tag;
        b
    }
    let g1 = guid_bytes(1);
    let g2 = guid_bytes(2);
    let g3 = guid_bytes(3);
    let g4 = guid_bytes(4);

    let mut payload = Vec::new();
    payload.extend_from_slice(&0x0000_0058u32.to_le_bytes()); // length
    payload.extend_from_slice(&0u32.to_le_bytes()); // version
    payload.extend_from_slice(&machine_id);
    payload.extend_from_slice(&g1);
    payload.extend_from_slice(&g2);
    payload.extend_from_slice(&g3);
    payload.extend_from_slice(&g4);
    assert_eq!(payload.len(), 0x58);

    // The on-disk block-size field counts itself: size(4) + signature(4) + payload.
    let block_size = 4 + 4 + payload.len() as u32;
    assert_eq!(block_size, 0x60);

    bytes.extend_from_slice(&block_size.to_le_bytes());
    bytes.extend_from_slice(&0xA0000003u32.to_le_bytes());
    bytes.extend_from_slice(&payload);
    bytes.extend_from_slice(&0u32.to_le_bytes()); // ExtraData terminator

    let mut link = ShellLink::initialize();
    link.open_stream(Cursor::new(bytes)).unwrap();

    assert!(link.has_distributed_link_tracking_data().unwrap());
    assert_eq!(link.machine_id().unwrap(), Some("machine-01"));

    let mut buf = [0u8; 16];
    link.droid_volume_identifier(&mut buf).unwrap();
    assert_eq!(buf, g1);
    link.birth_droid_file_identifier(&mut buf).unwrap();
    assert_eq!(buf, g4);
}

/// S5 — an ExtraData block whose declared size overruns the actual
/// remaining bytes: `open` must fail with `InputError::Truncated` and the
/// handle must return to `Initialized`.
#[test]
fn s5_truncated_block_fails_open_and_resets_state() {
    let mut bytes = header(0);
    bytes.extend_from_slice(&0x40u32.to_le_bytes()); // declares 0x40 bytes
    bytes.extend_from_slice(&[0u8; 0x20 - 4]); // but only 0x20 total remain

    let mut link = ShellLink::initialize();
    let err = link.open_stream(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, Error::Input(_)));

    assert!(matches!(
        link.data_flags(),
        Err(Error::Runtime(RuntimeError::ValueMissing))
    ));
}

/// S6 — cooperative abort. True mid-parse concurrent abort timing can't
/// be driven deterministically from a single-threaded test, so this
/// exercises the same cooperative checkpoint mechanism by requesting
/// abort before the call: `open` must fail with
/// `RuntimeError::AbortRequested` and the data-block accessor must not be
/// callable afterward.
#[test]
fn s6_abort_is_observed_at_the_next_checkpoint() {
    let mut bytes = header(0);
    for sig in [1u32, 2, 3, 4, 5, 6, 7, 8] {
        bytes.extend_from_slice(&8u32.to_le_bytes()); // block_size: 8 (signature only)
        bytes.extend_from_slice(&(0xB0000000 + sig).to_le_bytes());
    }
    bytes.extend_from_slice(&0u32.to_le_bytes()); // ExtraData terminator

    let mut link = ShellLink::initialize();
    let handle = link.abort_handle();
    handle.signal();

    let err = link.open_stream(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, Error::Runtime(RuntimeError::AbortRequested)));
    assert!(matches!(
        link.data_block_count(),
        Err(Error::Runtime(RuntimeError::ValueMissing))
    ));
}
