//! The nine canonical SAUCE data types.

/// Top-level file category stored in the DataType byte of a record.
///
/// Values outside the specified `0..=8` range are coerced to `None` on
/// decode; the pair `(file_type, data_type)` is what identifies the
/// concrete media type (see [`crate::media`]).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SauceDataType {
    /// None / undefined.
    #[default]
    None = 0,
    /// A character based file, typically interpreted sequentially.
    Character = 1,
    /// Bitmap graphic and animation files.
    Bitmap = 2,
    /// A vector graphic file.
    Vector = 3,
    /// An audio file.
    Audio = 4,
    /// Raw memory copy of a text mode screen (.BIN file).
    BinaryText = 5,
    /// XBin or eXtended BIN file.
    XBin = 6,
    /// Archive file.
    Archive = 7,
    /// Executable file.
    Executable = 8,
}

impl SauceDataType {
    /// All canonical data types in wire order.
    pub const ALL: [SauceDataType; 9] = [
        SauceDataType::None,
        SauceDataType::Character,
        SauceDataType::Bitmap,
        SauceDataType::Vector,
        SauceDataType::Audio,
        SauceDataType::BinaryText,
        SauceDataType::XBin,
        SauceDataType::Archive,
        SauceDataType::Executable,
    ];

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            SauceDataType::None => "None",
            SauceDataType::Character => "Character",
            SauceDataType::Bitmap => "Bitmap",
            SauceDataType::Vector => "Vector",
            SauceDataType::Audio => "Audio",
            SauceDataType::BinaryText => "BinaryText",
            SauceDataType::XBin => "XBin",
            SauceDataType::Archive => "Archive",
            SauceDataType::Executable => "Executable",
        }
    }
}

impl std::fmt::Display for SauceDataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<u8> for SauceDataType {
    fn from(byte: u8) -> SauceDataType {
        match byte {
            1 => SauceDataType::Character,
            2 => SauceDataType::Bitmap,
            3 => SauceDataType::Vector,
            4 => SauceDataType::Audio,
            5 => SauceDataType::BinaryText,
            6 => SauceDataType::XBin,
            7 => SauceDataType::Archive,
            8 => SauceDataType::Executable,
            _ => SauceDataType::None,
        }
    }
}

impl From<SauceDataType> for u8 {
    fn from(data_type: SauceDataType) -> u8 {
        data_type as u8
    }
}
