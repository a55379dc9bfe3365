#![warn(missing_docs)]

//! A parser and accessor library for Windows Shell Link (`.lnk`) files.
//!
//! This crate reads and exposes every field of the LNK binary format
//! (MS-SHLLINK): the fixed header, the optional LinkTargetIdentifier and
//! LocationInformation structures, the StringData entries, and the
//! signature-tagged ExtraData blocks. It never writes, mutates, resolves a
//! link target, executes anything, or repairs malformed input — see
//! [`ShellLink`] for the full accessor surface.
//!
//! ```no_run
//! use shelllink::ShellLink;
//!
//! let link = ShellLink::open("target.lnk").unwrap();
//! if let Some(description) = link.description().unwrap() {
//!     println!("{description}");
//! }
//! ```

mod binread_flags;
mod bytestream;
mod codepage;
mod current_offset;
mod error;
mod extradata;
mod file;
mod filetime;
mod guid;
mod header;
mod idlist;
mod itemid;
mod linktarget;
mod location;
mod primitives;
mod stringdata;
mod strings;

pub use bytestream::ReadSeekSource;
pub use codepage::AsciiCodepage;
pub use error::{Error, InputError, Result, RuntimeError};
pub use extradata::{
    ConsoleDataBlock, ConsoleFEDataBlock, DarwinDataBlock, EnvironmentVariableDataBlock,
    ExtraDataBlock, ExtraDataRecord, IconEnvironmentDataBlock, KnownFolderDataBlock,
    PropertyStoreDataBlock, ShimDataBlock, SpecialFolderDataBlock, TrackerDataBlock,
    UnknownDataBlock, VistaAndAboveIdListDataBlock,
};
pub use file::{AbortHandle, ShellLink};
pub use filetime::FileTime;
pub use guid::Guid;
pub use header::{
    DataFlags, FileAttributeFlags, HotkeyFlags, HotkeyKey, HotkeyModifiers, ShellLinkHeader,
    ShowCommand,
};
pub use idlist::IdList;
pub use itemid::ItemID;
pub use linktarget::LinkTargetIdentifier;
pub use location::{
    CommonNetworkRelativeLink, CommonNetworkRelativeLinkFlags, DriveType, LocationFlags,
    LocationInformation, NetworkProviderType, VolumeID,
};
pub use stringdata::StringData;
