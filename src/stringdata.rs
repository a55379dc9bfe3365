//! StringData (§4.6, C6): up to five conditional, length-prefixed strings
//! trailing the optional LinkTargetIdentifier/LocationInformation
//! structures, each gated by its own `DataFlags` bit.
//!
//! The teacher's copy of this file only carried half-finished write-path
//! helpers (`parse_string`/`to_data`) and no actual `StringData` type,
//! even though `lib.rs` already referenced one — this module is written
//! fresh, grounded on the `SizedString` reader in
//! `examples/lilopkins-lnk-rs/src/strings/sized_string.rs` and the field
//! order documented in `examples/original_source/pylnk/pylnk_file.c`.

use binread::BinRead;
use getset::Getters;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::header::DataFlags;
use crate::strings::{SizedString, StringEncoding};

/// The five optional StringData entries, each present only if its
/// corresponding `DataFlags` bit is set.
#[derive(Clone, Debug, Default, Getters)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[getset(get = "pub")]
pub struct StringData {
    #[getset(skip)]
    name_string: Option<String>,
    #[getset(skip)]
    relative_path: Option<String>,
    #[getset(skip)]
    working_dir: Option<String>,
    #[getset(skip)]
    command_line_arguments: Option<String>,
    #[getset(skip)]
    icon_location: Option<String>,
}

impl StringData {
    /// The description string, if `HAS_DESCRIPTION_STRING` is set.
    pub fn name_string(&self) -> Option<&str> {
        self.name_string.as_deref()
    }

    /// The relative path string, if `HAS_RELATIVE_PATH_STRING` is set.
    pub fn relative_path(&self) -> Option<&str> {
        self.relative_path.as_deref()
    }

    /// The working directory string, if `HAS_WORKING_DIRECTORY_STRING` is set.
    pub fn working_dir(&self) -> Option<&str> {
        self.working_dir.as_deref()
    }

    /// The command-line arguments string, if
    /// `HAS_COMMAND_LINE_ARGUMENTS_STRING` is set.
    pub fn command_line_arguments(&self) -> Option<&str> {
        self.command_line_arguments.as_deref()
    }

    /// The icon location string, if `HAS_ICON_LOCATION_STRING` is set.
    pub fn icon_location(&self) -> Option<&str> {
        self.icon_location.as_deref()
    }
}

impl BinRead for StringData {
    type Args = (DataFlags, &'static encoding_rs::Encoding);

    fn read_options<R: std::io::prelude::Read + std::io::prelude::Seek>(
        reader: &mut R,
        _options: &binread::ReadOptions,
        args: Self::Args,
    ) -> binread::prelude::BinResult<Self> {
        use binread::BinReaderExt;

        let (data_flags, default_codepage) = args;
        let encoding = StringEncoding::from_data_flags(data_flags, default_codepage);

        let read_if = |reader: &mut R, present: bool| -> binread::prelude::BinResult<Option<String>> {
            if !present {
                return Ok(None);
            }
            let s: SizedString = reader.read_le_args((encoding,))?;
            Ok(Some(s.to_string()))
        };

        Ok(Self {
            name_string: read_if(reader, data_flags.contains(DataFlags::HAS_DESCRIPTION_STRING))?,
            relative_path: read_if(reader, data_flags.contains(DataFlags::HAS_RELATIVE_PATH_STRING))?,
            working_dir: read_if(reader, data_flags.contains(DataFlags::HAS_WORKING_DIRECTORY_STRING))?,
            command_line_arguments: read_if(
                reader,
                data_flags.contains(DataFlags::HAS_COMMAND_LINE_ARGUMENTS_STRING),
            )?,
            icon_location: read_if(reader, data_flags.contains(DataFlags::HAS_ICON_LOCATION_STRING))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1252;
    use std::io::Cursor;

    fn sized(s: &str) -> Vec<u8> {
        let mut bytes = vec![];
        bytes.extend_from_slice(&(s.len() as u16).to_le_bytes());
        bytes.extend_from_slice(s.as_bytes());
        bytes
    }

    #[test]
    fn only_flagged_fields_are_read() {
        let mut bytes = sized("desc");
        bytes.extend(sized("args"));
        let mut cursor = Cursor::new(bytes);
        let flags = DataFlags::HAS_DESCRIPTION_STRING | DataFlags::HAS_COMMAND_LINE_ARGUMENTS_STRING;
        let data: StringData = cursor
            .read_le_args::<StringData>((flags, WINDOWS_1252))
            .unwrap();
        assert_eq!(data.name_string(), Some("desc"));
        assert_eq!(data.relative_path(), None);
        assert_eq!(data.command_line_arguments(), Some("args"));
    }
}
