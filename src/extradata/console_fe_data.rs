use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The code page used for console text for East Asian locales (§4.7,
/// signature `0xa0000004`).
#[derive(Clone, Copy, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32), pre_assert(block_size == 0x0C))]
#[getset(get = "pub")]
pub struct ConsoleFEDataBlock {
    /// A code page language code identifier ([MS-LCID]).
    code_page: u32,
}
