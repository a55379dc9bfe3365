use binread::BinRead;
use encoding_rs::{Encoding, UTF_16LE};
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::strings::FixedSizeString;

/// An application identifier usable instead of a LinkTargetIdentifier to
/// install an application when the link is activated (§4.7, signature
/// `0xa0000006`).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32, default_codepage: &'static Encoding), pre_assert(block_size == 0x314))]
#[getset(get = "pub")]
pub struct DarwinDataBlock {
    /// Application identifier in the system default code page. Should be
    /// ignored per the format documentation but kept for completeness.
    #[br(args(260, default_codepage), map = |s: FixedSizeString| s.to_string())]
    #[getset(skip)]
    darwin_data_ansi: String,

    /// Unicode form of the application identifier.
    #[br(args(520, UTF_16LE), map = |s: FixedSizeString| if s.is_empty() { None } else { Some(s.to_string()) })]
    #[getset(skip)]
    darwin_data_unicode: Option<String>,
}

impl DarwinDataBlock {
    /// Application identifier in the system default code page.
    pub fn darwin_data_ansi(&self) -> &str {
        &self.darwin_data_ansi
    }

    /// Unicode form of the application identifier, if non-empty.
    pub fn darwin_data_unicode(&self) -> Option<&str> {
        self.darwin_data_unicode.as_deref()
    }
}
