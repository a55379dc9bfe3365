use binread::BinRead;
use bitflags::bitflags;
use encoding_rs::UTF_16LE;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::binread_flags::binread_flags;
use crate::strings::FixedSizeString;

bitflags! {
    /// Foreground/background text color attributes for a console window.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct FillAttributeFlags: u16 {
        const FOREGROUND_BLUE      = 0x0001;
        const FOREGROUND_GREEN     = 0x0002;
        const FOREGROUND_RED       = 0x0004;
        const FOREGROUND_INTENSITY = 0x0008;
        const BACKGROUND_BLUE      = 0x0010;
        const BACKGROUND_GREEN     = 0x0020;
        const BACKGROUND_RED       = 0x0040;
        const BACKGROUND_INTENSITY = 0x0080;
    }
}

binread_flags!(FillAttributeFlags, u16);

bitflags! {
    /// Font family and pitch used in a console window.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    #[cfg_attr(feature = "serde", derive(Serialize))]
    pub struct FontFamilyFlags: u32 {
        const FF_DONT_CARE     = 0x0000;
        const FF_ROMAN         = 0x0010;
        const FF_SWISS         = 0x0020;
        const FF_MODERN        = 0x0030;
        const FF_SCRIPT        = 0x0040;
        const FF_DECORATIVE    = 0x0050;
        const TMPF_FIXED_PITCH = 0x0001;
        const TMPF_VECTOR      = 0x0002;
        const TMPF_TRUETYPE    = 0x0004;
        const TMPF_DEVICE      = 0x0008;
    }
}

binread_flags!(FontFamilyFlags, u32);

/// Display settings for a link target that runs in a console window
/// (§4.7, signature `0xa0000002`).
#[derive(Clone, Debug, Getters, BinRead)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
#[br(import(block_size: u32), pre_assert(block_size == 0xC8))]
pub struct ConsoleDataBlock {
    /// Foreground/background text color in the console window.
    fill_attributes: FillAttributeFlags,
    /// Foreground/background text color in the console window popup.
    popup_fill_attributes: FillAttributeFlags,
    /// Horizontal size, in characters, of the console window buffer.
    screen_buffer_size_x: i16,
    /// Vertical size, in characters, of the console window buffer.
    screen_buffer_size_y: i16,
    /// Horizontal size, in characters, of the console window.
    window_size_x: i16,
    /// Vertical size, in characters, of the console window.
    window_size_y: i16,
    /// Horizontal coordinate, in pixels, of the console window origin.
    window_origin_x: i16,
    /// Vertical coordinate, in pixels, of the console window origin.
    window_origin_y: i16,

    #[getset(skip)]
    unused1: u32,
    #[getset(skip)]
    unused2: u32,

    /// Font size, in pixels: high word is height, low word is width (0
    /// for vector fonts).
    font_size: u32,
    /// Font family and pitch used in the console window.
    font_family: FontFamilyFlags,
    /// Stroke weight of the font used in the console window.
    font_weight: u32,
    /// Face name of the font used in the console window.
    #[br(args(64, UTF_16LE), map = |s: FixedSizeString| s.to_string())]
    #[getset(skip)]
    face_name: String,
    /// Cursor size, in pixels.
    cursor_size: u32,
    /// Whether the console window opens in full-screen mode.
    #[br(map = |b: u32| b != 0)]
    full_screen: bool,
    /// Whether the console window opens in QuickEdit mode.
    #[br(map = |b: u32| b != 0)]
    quick_edit: bool,
    /// Insert mode of the console window.
    #[br(map = |b: u32| b != 0)]
    insert_mode: bool,
    /// Auto-position mode of the console window.
    #[br(map = |b: u32| b != 0)]
    auto_position: bool,
    /// Size, in characters, of the console input history buffer.
    history_buffer_size: u32,
    /// Number of history buffers to use.
    number_of_history_buffers: u32,
    /// Whether duplicates are removed from the history buffer.
    #[br(map = |b: u32| b != 0)]
    history_no_dup: bool,
    /// RGB colors used for text in the console window, indexed by the
    /// fill attribute fields.
    color_table: [u32; 16],
}

impl ConsoleDataBlock {
    /// Face name of the font used in the console window.
    pub fn face_name(&self) -> &str {
        &self.face_name
    }
}
