use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The location of a special folder that is (or contains) the link target
/// (§4.7, signature `0xa0000005`).
#[derive(Clone, Copy, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size == 0x10))]
#[getset(get = "pub")]
pub struct SpecialFolderDataBlock {
    /// Special folder integer ID.
    special_folder_id: u32,
    /// Offset, in bytes, into the link target IDList of the first child
    /// segment under this special folder.
    offset: u32,
}
