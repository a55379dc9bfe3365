use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::guid::Guid;

/// The location of a known folder that is (or contains) the link target
/// (§4.7, signature `0xa000000b`).
#[derive(Clone, Copy, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size == 0x1C))]
#[getset(get = "pub")]
pub struct KnownFolderDataBlock {
    /// GUID identifying the known folder.
    known_folder_id: Guid,
    /// Offset, in bytes, into the link target IDList of the first child
    /// segment under this known folder.
    offset: u32,
}
