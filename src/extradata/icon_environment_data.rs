use binread::BinRead;
use encoding_rs::{Encoding, UTF_16LE};
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::strings::FixedSizeString;

/// A path to an icon, encoded with environment variables so it resolves
/// across machines (§4.7, signature `0xa0000007`).
#[derive(Clone, Debug, BinRead, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[br(import(block_size: u32, default_codepage: &'static Encoding), pre_assert(block_size == 0x314))]
#[getset(get = "pub")]
pub struct IconEnvironmentDataBlock {
    /// Icon path, in the system default code page.
    #[br(args(260, default_codepage), map = |s: FixedSizeString| s.to_string())]
    #[getset(skip)]
    target_ansi: String,

    /// Unicode form of the icon path.
    #[br(args(520, UTF_16LE), map = |s: FixedSizeString| if s.is_empty() { None } else { Some(s.to_string()) })]
    #[getset(skip)]
    target_unicode: Option<String>,
}

impl IconEnvironmentDataBlock {
    /// Icon path, in the system default code page.
    pub fn target_ansi(&self) -> &str {
        &self.target_ansi
    }

    /// Unicode form of the icon path, if non-empty.
    pub fn target_unicode(&self) -> Option<&str> {
        self.target_unicode.as_deref()
    }
}
