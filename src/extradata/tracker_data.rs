use binread::BinRead;
use encoding_rs::Encoding;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::guid::Guid;
use crate::strings::FixedSizeString;

/// Distributed link tracking data used to resolve a moved link target
/// (§4.7, signature `0xa0000003`). Forwarded, uninterpreted beyond its
/// declared fields, to the Link Tracking service ([MS-DLTW]).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32, default_codepage: &'static Encoding), pre_assert(block_size == 0x60))]
#[getset(get = "pub")]
pub struct TrackerDataBlock {
    #[br(assert(length == 0x58))]
    #[getset(skip)]
    length: u32,

    #[br(assert(version == 0x00000000))]
    #[getset(skip)]
    version: u32,

    /// NetBIOS name of the machine where the link target last resided.
    #[br(args(16, default_codepage), map = |s: FixedSizeString| s.to_string())]
    #[getset(skip)]
    machine_id: String,

    /// Droid values used to find the link target via the Link Tracking
    /// service.
    droid: [Guid; 2],

    /// Droid-birth values used to find the link target via the Link
    /// Tracking service.
    droid_birth: [Guid; 2],
}

impl TrackerDataBlock {
    /// NetBIOS name of the machine where the link target last resided.
    pub fn machine_id(&self) -> &str {
        &self.machine_id
    }
}
