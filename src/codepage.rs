//! The ASCII codepage table (§6 "Supported ASCII codepages").
//!
//! This is a pure data mapping, carried as a static table rather than a
//! runtime-loaded resource, per the design note in spec.md §9. Grounded on
//! `pylnk_codepage.h`/`pylnk_codepage.c` in `examples/original_source/`,
//! which enumerates the same ISO-8859/KOI8/Windows code page families.
//!
//! `encoding_rs` doesn't carry a distinct table for every codepage named by
//! the original format documentation (notably ISO-8859-1/9/11/12, which the
//! WHATWG encoding standard folds into windows-1252/1254/874 or drops).
//! Those variants fall back to their nearest WHATWG-standard equivalent;
//! see DESIGN.md for the full list of fallbacks.

use encoding_rs::*;

/// Selects the single-byte ("ASCII") codepage used to decode non-Unicode
/// strings in a LNK file. Default is Windows-1252, matching the format's
/// documented default system code page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AsciiCodepage {
    /// 7-bit ASCII / US-ASCII (codepage 20127).
    Ascii,
    /// ISO-8859 part 1 (Latin-1). Decoded via windows-1252 (superset).
    Iso8859_1,
    /// ISO-8859 part 2 (Latin-2, Central European).
    Iso8859_2,
    /// ISO-8859 part 3 (Latin-3, South European).
    Iso8859_3,
    /// ISO-8859 part 4 (Latin-4, North European).
    Iso8859_4,
    /// ISO-8859 part 5 (Cyrillic).
    Iso8859_5,
    /// ISO-8859 part 6 (Arabic).
    Iso8859_6,
    /// ISO-8859 part 7 (Greek).
    Iso8859_7,
    /// ISO-8859 part 8 (Hebrew).
    Iso8859_8,
    /// ISO-8859 part 9 (Latin-5, Turkish). Decoded via windows-1254 (superset).
    Iso8859_9,
    /// ISO-8859 part 10 (Latin-6, Nordic).
    Iso8859_10,
    /// ISO-8859 part 11 (Thai). Decoded via windows-874 (near superset).
    Iso8859_11,
    /// ISO-8859 part 13 (Latin-7, Baltic Rim).
    Iso8859_13,
    /// ISO-8859 part 14 (Latin-8, Celtic).
    Iso8859_14,
    /// ISO-8859 part 15 (Latin-9).
    Iso8859_15,
    /// ISO-8859 part 16 (Latin-10, South-Eastern European).
    Iso8859_16,
    /// KOI8-R (Russian).
    Koi8R,
    /// KOI8-U (Ukrainian).
    Koi8U,
    /// Windows codepage 874 (Thai).
    Windows874,
    /// Windows codepage 932 (Japanese, Shift-JIS).
    Windows932,
    /// Windows codepage 936 (Simplified Chinese, GBK).
    Windows936,
    /// Windows codepage 949 (Korean).
    Windows949,
    /// Windows codepage 950 (Traditional Chinese, Big5).
    Windows950,
    /// Windows codepage 1250 (Central European).
    Windows1250,
    /// Windows codepage 1251 (Cyrillic).
    Windows1251,
    /// Windows codepage 1252 (Western European). The format's default.
    Windows1252,
    /// Windows codepage 1253 (Greek).
    Windows1253,
    /// Windows codepage 1254 (Turkish).
    Windows1254,
    /// Windows codepage 1255 (Hebrew).
    Windows1255,
    /// Windows codepage 1256 (Arabic).
    Windows1256,
    /// Windows codepage 1257 (Baltic).
    Windows1257,
    /// Windows codepage 1258 (Vietnamese).
    Windows1258,
}

impl Default for AsciiCodepage {
    fn default() -> Self {
        AsciiCodepage::Windows1252
    }
}

impl AsciiCodepage {
    /// Returns the `encoding_rs` table used to decode bytes in this codepage.
    pub fn encoding(self) -> &'static Encoding {
        use AsciiCodepage::*;
        match self {
            Ascii | Iso8859_1 | Windows1252 => WINDOWS_1252,
            Iso8859_2 | Windows1250 => WINDOWS_1250,
            Iso8859_3 => ISO_8859_3,
            Iso8859_4 => ISO_8859_4,
            Iso8859_5 | Windows1251 => WINDOWS_1251,
            Iso8859_6 | Windows1256 => WINDOWS_1256,
            Iso8859_7 | Windows1253 => WINDOWS_1253,
            Iso8859_8 | Windows1255 => WINDOWS_1255,
            Iso8859_9 | Windows1254 => WINDOWS_1254,
            Iso8859_10 => ISO_8859_10,
            Iso8859_11 | Windows874 => WINDOWS_874,
            Iso8859_13 | Windows1257 => WINDOWS_1257,
            Iso8859_14 => ISO_8859_14,
            Iso8859_15 => ISO_8859_15,
            Iso8859_16 => ISO_8859_16,
            Koi8R => KOI8_R,
            Koi8U => KOI8_U,
            Windows932 => SHIFT_JIS,
            Windows936 => GBK,
            Windows949 => EUC_KR,
            Windows950 => BIG5,
            Windows1258 => WINDOWS_1258,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_windows_1252() {
        assert_eq!(AsciiCodepage::default(), AsciiCodepage::Windows1252);
        assert_eq!(AsciiCodepage::default().encoding(), WINDOWS_1252);
    }

    #[test]
    fn every_variant_resolves_to_an_encoding() {
        use AsciiCodepage::*;
        let all = [
            Ascii, Iso8859_1, Iso8859_2, Iso8859_3, Iso8859_4, Iso8859_5, Iso8859_6, Iso8859_7,
            Iso8859_8, Iso8859_9, Iso8859_10, Iso8859_11, Iso8859_13, Iso8859_14, Iso8859_15,
            Iso8859_16, Koi8R, Koi8U, Windows874, Windows932, Windows936, Windows949, Windows950,
            Windows1250, Windows1251, Windows1252, Windows1253, Windows1254, Windows1255,
            Windows1256, Windows1257, Windows1258,
        ];
        for cp in all {
            let _ = cp.encoding();
        }
    }
}
