//! LocationInformation (§4.5, C5): resolves the link target if it's not
//! found at its original location — the volume it was on, the mapped
//! drive, and a UNC form of the path.
//!
//! Grounded on `examples/lilopkins-lnk-rs/src/linkinfo.rs`, generalized in
//! two ways: (1) the ASCII-codepage strings are decoded with the caller's
//! configured [`crate::codepage::AsciiCodepage`] instead of a hardcoded
//! Windows-1252, and (2) the two *Unicode offset fields degrade
//! gracefully instead of hard-failing the whole parse. The teacher used a
//! `#[br(assert(...))]` on `local_base_path_offset_unicode` and
//! `common_path_suffix_offset_unicode` that rejects the entire
//! LocationInformation structure (and therefore the whole file) if either
//! offset is out of range. Real-world producers occasionally write a
//! stale or garbage Unicode offset while the non-Unicode string is
//! perfectly valid; per this crate's accessor contract such a field
//! should come back `Ok(None)`, not fail the open. So instead the offset
//! is read unconditionally (when the header size allows it) and only
//! fed into the decision of whether to read the corresponding Unicode
//! string; an out-of-range or flag-inconsistent offset is recorded in
//! [`LocationInformation::diagnostic_offsets`] rather than raised as an
//! error.

use binread::BinRead;
use bitflags::bitflags;
use encoding_rs::Encoding;
use getset::Getters;
use num_derive::FromPrimitive;

use crate::binread_flags::binread_flags;
use crate::current_offset::CurrentOffset;
use crate::strings::{NullTerminatedString, StringEncoding};

#[cfg(feature = "serde")]
use serde::Serialize;

/// The parsed LocationInformation structure.
#[derive(Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
#[br(import(default_codepage: &'static Encoding))]
pub struct LocationInformation {
    #[getset(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    start_offset: CurrentOffset,

    /// Size, in bytes, of this structure. Every offset in it must be less
    /// than this value.
    location_information_size: u32,

    /// Size, in bytes, of the header section (fields up to and including
    /// the optional `*OffsetUnicode` fields).
    location_information_header_size: u32,

    /// Which of VolumeID, LocalBasePath, LocalBasePathUnicode, and
    /// CommonNetworkRelativeLink are present.
    location_flags: LocationFlags,

    #[br(
        assert(
            if location_flags.has_volume_id_and_local_base_path() {
                volume_id_offset > 0 && volume_id_offset < location_information_size
            } else {
                volume_id_offset == 0
            }
        )
    )]
    #[getset(skip)]
    volume_id_offset: u32,

    #[br(
        assert(
            if location_flags.has_volume_id_and_local_base_path() {
                local_base_path_offset > 0 && local_base_path_offset < location_information_size
            } else {
                local_base_path_offset == 0
            }
        )
    )]
    #[getset(skip)]
    local_base_path_offset: u32,

    #[br(
        assert(
            if location_flags.has_common_network_relative_link_and_path_suffix() {
                common_network_relative_link_offset > 0 && common_network_relative_link_offset < location_information_size
            } else {
                common_network_relative_link_offset == 0
            }
        )
    )]
    #[getset(skip)]
    common_network_relative_link_offset: u32,

    #[br(assert(common_path_suffix_offset < location_information_size))]
    #[getset(skip)]
    common_path_suffix_offset: u32,

    #[br(if(location_information_header_size >= 0x24))]
    #[getset(skip)]
    local_base_path_offset_unicode: Option<u32>,

    #[br(if(location_information_header_size >= 0x24))]
    #[getset(skip)]
    common_path_suffix_offset_unicode: Option<u32>,

    /// Volume information, present if `HAS_VOLUME_ID_AND_LOCAL_BASE_PATH`
    /// is set.
    #[br(if(location_flags.has_volume_id_and_local_base_path()), args(default_codepage))]
    volume_id: Option<VolumeID>,

    /// The codepage-encoded local path prefix, present if
    /// `HAS_VOLUME_ID_AND_LOCAL_BASE_PATH` is set.
    #[br(
        if(location_flags.has_volume_id_and_local_base_path()),
        args(StringEncoding::CodePage(default_codepage)),
        map = |o: Option<NullTerminatedString>| o.map(|n| n.to_string())
    )]
    #[getset(skip)]
    local_base_path: Option<String>,

    /// Network-share information, present if
    /// `HAS_COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX` is set.
    #[br(if(location_flags.has_common_network_relative_link_and_path_suffix()), args(default_codepage))]
    common_network_relative_link: Option<CommonNetworkRelativeLink>,

    /// The codepage-encoded path suffix, appended to `local_base_path` (or
    /// the network share's `net_name`) to build the full path.
    #[br(
        args(StringEncoding::CodePage(default_codepage)),
        map = |n: NullTerminatedString| n.to_string()
    )]
    #[getset(skip)]
    common_path_suffix: String,

    /// Unicode local path prefix. `None` if the header is too old to carry
    /// it, the corresponding flag isn't set, or
    /// `local_base_path_offset_unicode` is out of range for this
    /// structure's size — the latter case is recorded in
    /// [`Self::diagnostic_offsets`] rather than failing the parse.
    #[br(
        if(location_information_header_size >= 0x24
            && local_base_path_offset_unicode
                .map(|o| location_flags.has_volume_id_and_local_base_path() && o > 0 && o < location_information_size)
                .unwrap_or(false)),
        args(StringEncoding::Unicode),
        map = |o: Option<NullTerminatedString>| o.map(|n| n.to_string())
    )]
    #[getset(skip)]
    local_base_path_unicode: Option<String>,

    /// Unicode path suffix. See [`Self::local_base_path_unicode`] for the
    /// absent-vs-error policy on its offset field.
    #[br(
        if(location_information_header_size >= 0x24
            && common_path_suffix_offset_unicode
                .map(|o| o > 0 && o < location_information_size)
                .unwrap_or(false)),
        args(StringEncoding::Unicode),
        map = |o: Option<NullTerminatedString>| o.map(|n| n.to_string())
    )]
    #[getset(skip)]
    common_path_suffix_unicode: Option<String>,

    /// Human-readable notes about Unicode offset fields that were present
    /// but out of range or flag-inconsistent, and were therefore treated
    /// as absent rather than failing the parse. Empty in the common case.
    #[br(calc = {
        let mut notes = Vec::new();
        if let Some(off) = local_base_path_offset_unicode {
            let in_range = location_flags.has_volume_id_and_local_base_path()
                && off > 0
                && off < location_information_size;
            if !in_range {
                notes.push(format!(
                    "local_base_path_offset_unicode {off:#x} ignored (flag {}, size {:#x})",
                    location_flags.has_volume_id_and_local_base_path(),
                    location_information_size
                ));
            }
        }
        if let Some(off) = common_path_suffix_offset_unicode {
            let in_range = off > 0 && off < location_information_size;
            if !in_range {
                notes.push(format!(
                    "common_path_suffix_offset_unicode {off:#x} ignored (size {:#x})",
                    location_information_size
                ));
            }
        }
        notes
    })]
    diagnostic_offsets: Vec<String>,
}

impl LocationInformation {
    /// The codepage-encoded local path prefix.
    pub fn local_base_path(&self) -> Option<&str> {
        self.local_base_path.as_deref()
    }

    /// The codepage-encoded path suffix.
    pub fn common_path_suffix(&self) -> &str {
        &self.common_path_suffix
    }

    /// The Unicode local path prefix, if present and in range.
    pub fn local_base_path_unicode(&self) -> Option<&str> {
        self.local_base_path_unicode.as_deref()
    }

    /// The Unicode path suffix, if present and in range.
    pub fn common_path_suffix_unicode(&self) -> Option<&str> {
        self.common_path_suffix_unicode.as_deref()
    }

    /// Notes describing any Unicode offset fields that were present but
    /// treated as absent because they were out of range or inconsistent
    /// with the location flags.
    pub fn diagnostic_offsets(&self) -> &[String] {
        &self.diagnostic_offsets
    }
}

bitflags! {
    /// Which optional fields of [`LocationInformation`] are present.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct LocationFlags: u32 {
        /// VolumeID, LocalBasePath, and (if the header is new enough)
        /// LocalBasePathUnicode are present.
        const VOLUME_ID_AND_LOCAL_BASE_PATH = 0x0000_0001;
        /// CommonNetworkRelativeLink is present.
        const COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX = 0x0000_0002;
    }
}

binread_flags!(LocationFlags, u32);

#[allow(missing_docs)]
impl LocationFlags {
    pub fn has_volume_id_and_local_base_path(&self) -> bool {
        self.contains(Self::VOLUME_ID_AND_LOCAL_BASE_PATH)
    }

    pub fn has_common_network_relative_link_and_path_suffix(&self) -> bool {
        self.contains(Self::COMMON_NETWORK_RELATIVE_LINK_AND_PATH_SUFFIX)
    }
}

/// Information about the volume the link target was stored on.
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
#[br(import(default_codepage: &'static Encoding))]
pub struct VolumeID {
    #[getset(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    start_offset: CurrentOffset,

    /// Size, in bytes, of this structure. Always greater than `0x10`.
    #[br(assert(volume_id_size > 0x10))]
    #[getset(skip)]
    volume_id_size: u32,

    /// The type of drive the link target is stored on.
    drive_type: DriveType,

    /// Drive serial number of the volume the link target is stored on.
    drive_serial_number: u32,

    #[br(assert(volume_label_offset < volume_id_size))]
    #[getset(skip)]
    volume_label_offset: u32,

    #[br(if(volume_label_offset == 0x14))]
    #[getset(skip)]
    volume_label_offset_unicode: Option<u32>,

    /// The label of the volume the link target is stored on.
    #[br(
        args({volume_label_offset_unicode.and(Some(StringEncoding::Unicode)).unwrap_or(StringEncoding::CodePage(default_codepage))}),
        map = |s: NullTerminatedString| s.to_string()
    )]
    #[getset(skip)]
    volume_label: String,

    #[getset(skip)]
    #[cfg_attr(feature = "serde", serde(skip))]
    _next_offset: CurrentOffset,
}

impl VolumeID {
    /// The label of the volume the link target is stored on.
    pub fn volume_label(&self) -> &str {
        &self.volume_label
    }
}

/// The type of drive the link target is stored on.
#[derive(Clone, Copy, Debug, FromPrimitive, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(repr(u32))]
pub enum DriveType {
    /// The drive type cannot be determined.
    DriveUnknown = 0x00,
    /// The root path is invalid (e.g. no volume is mounted at the path).
    DriveNoRootDir = 0x01,
    /// The drive has removable media.
    DriveRemovable = 0x02,
    /// The drive has fixed media.
    DriveFixed = 0x03,
    /// The drive is a remote (network) drive.
    DriveRemote = 0x04,
    /// The drive is a CD-ROM drive.
    DriveCDRom = 0x05,
    /// The drive is a RAM disk.
    DriveRamdisk = 0x06,
}

/// Information about the network location of a link target, including the
/// mapped drive letter and the UNC path prefix.
#[derive(Clone, Debug, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(default_codepage: &'static Encoding))]
pub struct CommonNetworkRelativeLink {
    #[cfg_attr(feature = "serde", serde(skip))]
    start_offset: CurrentOffset,

    #[br(assert(common_network_relative_link_size >= 0x14))]
    common_network_relative_link_size: u32,

    /// Which of DeviceName and NetworkProviderType are meaningful.
    flags: CommonNetworkRelativeLinkFlags,

    #[br(assert(net_name_offset < common_network_relative_link_size))]
    net_name_offset: u32,

    #[br(
        assert(
            device_name_offset < common_network_relative_link_size &&
            if flags.has_valid_device() {
                device_name_offset > 0
            } else {
                device_name_offset == 0
            }
        )
    )]
    device_name_offset: u32,

    /// The network provider type, meaningful only if `VALID_NET_TYPE` is set.
    #[br(map = |t| if flags.has_valid_net_type() { Some(t) } else { None })]
    network_provider_type: Option<NetworkProviderType>,

    #[br(if(net_name_offset > 0x00000014))]
    net_name_offset_unicode: Option<u32>,

    #[br(if(net_name_offset > 0x00000014))]
    device_name_offset_unicode: Option<u32>,

    /// Server share path, e.g. `\\server\share`.
    #[br(
        args(StringEncoding::CodePage(default_codepage)),
        map = |n: NullTerminatedString| n.to_string()
    )]
    net_name: String,

    /// Mapped device, e.g. the drive letter `D:`.
    #[br(
        args(StringEncoding::CodePage(default_codepage)),
        map = |n: NullTerminatedString| n.to_string()
    )]
    device_name: String,

    /// Unicode form of `net_name`.
    #[br(
        if(net_name_offset > 0x00000014),
        args(StringEncoding::Unicode),
        map = |n: NullTerminatedString| n.to_string()
    )]
    net_name_unicode: String,

    /// Unicode form of `device_name`.
    #[br(
        if(net_name_offset > 0x00000014),
        args(StringEncoding::Unicode),
        map = |n: NullTerminatedString| n.to_string()
    )]
    device_name_unicode: String,
}

impl CommonNetworkRelativeLink {
    /// Server share path, e.g. `\\server\share`.
    pub fn net_name(&self) -> &str {
        &self.net_name
    }

    /// Mapped device, e.g. the drive letter `D:`.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// The network provider type, if known.
    pub fn network_provider_type(&self) -> Option<&NetworkProviderType> {
        self.network_provider_type.as_ref()
    }
}

bitflags! {
    /// Which of DeviceNameOffset and NetworkProviderType are meaningful.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct CommonNetworkRelativeLinkFlags: u32 {
        /// `DeviceNameOffset` contains an offset to the device name.
        const VALID_DEVICE = 0x0000_0001;
        /// `NetworkProviderType` is meaningful.
        const VALID_NET_TYPE = 0x0000_0002;
    }
}

binread_flags!(CommonNetworkRelativeLinkFlags, u32);

#[allow(missing_docs)]
impl CommonNetworkRelativeLinkFlags {
    pub fn has_valid_device(&self) -> bool {
        self.contains(Self::VALID_DEVICE)
    }

    pub fn has_valid_net_type(&self) -> bool {
        self.contains(Self::VALID_NET_TYPE)
    }
}

/// The type of network provider serving a [`CommonNetworkRelativeLink`].
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, FromPrimitive, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(repr(u32))]
pub enum NetworkProviderType {
    MSNet = 0x00010000,
    Smb = 0x00020000,
    Netware = 0x00030000,
    Vines = 0x00040000,
    TenNet = 0x00050000,
    Locus = 0x00060000,
    SunPCNFS = 0x00070000,
    LanStep = 0x00080000,
    NineTiles = 0x00090000,
    Lantastic = 0x000A0000,
    As400 = 0x000B0000,
    FTPNFS = 0x000C0000,
    PathWorks = 0x000D0000,
    LifeNet = 0x000E0000,
    PowerLAN = 0x000F0000,
    BWNFS = 0x00100000,
    Cogent = 0x00110000,
    Farallon = 0x00120000,
    AppleTalk = 0x00130000,
    Intergraph = 0x00140000,
    SymfoNet = 0x00150000,
    ClearCase = 0x00160000,
    Frontier = 0x00170000,
    BMC = 0x00180000,
    DCE = 0x00190000,
    Avid = 0x001A0000,
    Docuspace = 0x001B0000,
    Mangosoft = 0x001C0000,
    Sernet = 0x001D0000,
    Riverfront1 = 0x001E0000,
    Riverfront2 = 0x001F0000,
    Decorb = 0x00200000,
    Protstor = 0x00210000,
    FjRedir = 0x00220000,
    Distinct = 0x00230000,
    Twins = 0x00240000,
    Rdr2Sample = 0x00250000,
    CSC = 0x00260000,
    ThreeIn1 = 0x00270000,
    ExtendNet = 0x00290000,
    Stac = 0x002A0000,
    Foxbat = 0x002B0000,
    Yahoo = 0x002C0000,
    Exifs = 0x002D0000,
    Dav = 0x002E0000,
    Knoware = 0x002F0000,
    ObjectDire = 0x00300000,
    Masfax = 0x00310000,
    HobNfs = 0x00320000,
    Shiva = 0x00330000,
    Ibmal = 0x00340000,
    Lock = 0x00350000,
    Termsrv = 0x00360000,
    Srt = 0x00370000,
    Quincy = 0x00380000,
    Openafs = 0x00390000,
    Avid1 = 0x003A0000,
    Dfs = 0x003B0000,
    Kwnp = 0x003C0000,
    Zenworks = 0x003D0000,
    Driveonweb = 0x003E0000,
    Vmware = 0x003F0000,
    Rsfx = 0x00400000,
    Mfiles = 0x00410000,
    MsNfs = 0x00420000,
    Google = 0x00430000,
}
