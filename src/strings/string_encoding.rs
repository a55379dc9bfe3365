use encoding_rs::Encoding;

use crate::header::DataFlags;

/// Which encoding a given StringData/LocationInformation string uses: the
/// configured ASCII codepage, or UTF-16LE when `DataFlags::IS_UNICODE` is
/// set (§4.2, §4.6).
#[derive(Copy, Clone, Debug)]
pub enum StringEncoding {
    /// The caller-configured ASCII codepage.
    CodePage(&'static Encoding),

    /// UTF-16LE ("Unicode" in the format's own terminology).
    Unicode,
}

impl StringEncoding {
    /// Picks [`StringEncoding::Unicode`] or [`StringEncoding::CodePage`]
    /// according to `DataFlags::IS_UNICODE`.
    pub fn from_data_flags(data_flags: DataFlags, codepage: &'static Encoding) -> Self {
        if data_flags.contains(DataFlags::IS_UNICODE) {
            Self::Unicode
        } else {
            Self::CodePage(codepage)
        }
    }
}
