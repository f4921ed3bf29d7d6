//! The media type registry.
//!
//! A SAUCE record identifies its payload with the `(file_type, data_type)`
//! byte pair. This module owns the static table mapping that pair to a
//! named media type and to the interpretation of the type-dependent
//! fields (TInfo1..4, TFlags, TInfoS). The table is the single place
//! where "slot 1 of an ANSi means character width" is written down.
//!
//! One lookup rule is irregular by specification: `BinaryText` (data
//! type 5) matches any file type, because the file type byte of a .BIN
//! stores half the image width instead of a format discriminator.

use crate::ansi_flags::AnsiFlags;
use crate::data_type::SauceDataType;
use crate::fonts::FontId;

/// Named media type derived from the `(file_type, data_type)` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MediaType {
    #[default]
    None,
    Ascii,
    Ansi,
    AnsiMation,
    RipScript,
    PcBoard,
    Avatar,
    Html,
    Source,
    TundraDraw,
    Gif,
    Pcx,
    Lbm,
    Tga,
    Fli,
    Flc,
    Bmp,
    Gl,
    Dl,
    WpgBitmap,
    Png,
    Jpg,
    Mpg,
    Avi,
    Dxf,
    Dwg,
    WpgVector,
    ThreeDs,
    Mod,
    Mod669,
    Stm,
    S3m,
    Mtm,
    Far,
    Ult,
    Amf,
    Dmf,
    Okt,
    Rol,
    Cmf,
    Mid,
    Sadt,
    Voc,
    Wav,
    Smp8,
    Smp8s,
    Smp16,
    Smp16s,
    Patch8,
    Patch16,
    Xm,
    Hsc,
    It,
    BinaryText,
    XBin,
    Zip,
    Arj,
    Lzh,
    Arc,
    Tar,
    Zoo,
    Rar,
    Uc2,
    Pak,
    Sqz,
    Executable,
}

/// What a type-dependent field of a particular media type stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotMeaning {
    CharacterWidth,
    NumberOfLines,
    PixelWidth,
    PixelHeight,
    PixelDepth,
    NumberOfColors,
    SampleRate,
    AnsiFlags,
    FontId,
}

impl SlotMeaning {
    pub const fn name(self) -> &'static str {
        match self {
            SlotMeaning::CharacterWidth => "character_width",
            SlotMeaning::NumberOfLines => "number_of_lines",
            SlotMeaning::PixelWidth => "pixel_width",
            SlotMeaning::PixelHeight => "pixel_height",
            SlotMeaning::PixelDepth => "pixel_depth",
            SlotMeaning::NumberOfColors => "number_of_colors",
            SlotMeaning::SampleRate => "sample_rate",
            SlotMeaning::AnsiFlags => "ansi_flags",
            SlotMeaning::FontId => "font_id",
        }
    }
}

/// The six type-dependent record fields, in declared order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InfoSlot {
    TInfo1,
    TInfo2,
    TInfo3,
    TInfo4,
    TFlags,
    TInfoS,
}

impl InfoSlot {
    pub const ALL: [InfoSlot; 6] = [
        InfoSlot::TInfo1,
        InfoSlot::TInfo2,
        InfoSlot::TInfo3,
        InfoSlot::TInfo4,
        InfoSlot::TFlags,
        InfoSlot::TInfoS,
    ];
}

/// Raw value of a type-dependent field, as stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotRaw<'a> {
    /// A TInfo1..4 value.
    Number(u16),
    /// The TFlags byte.
    Byte(u8),
    /// The decoded TInfoS string.
    Text(&'a str),
}

/// Interpreted value of a type-dependent field.
#[derive(Clone, Debug, PartialEq)]
pub enum SlotValue {
    Number(u16),
    Flags(AnsiFlags),
    Font(FontId),
    /// A TInfoS string that does not name a registered font.
    Text(String),
}

/// One row of the media registry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaInfo {
    pub media_type: MediaType,
    pub file_type: u8,
    pub data_type: SauceDataType,
    pub name: &'static str,
    pub t_info_1: Option<SlotMeaning>,
    pub t_info_2: Option<SlotMeaning>,
    pub t_info_3: Option<SlotMeaning>,
    pub t_info_4: Option<SlotMeaning>,
    pub t_flags: Option<SlotMeaning>,
    pub t_info_s: Option<SlotMeaning>,
}

impl MediaInfo {
    /// The meaning of one slot, if the media type uses it.
    pub const fn meaning(&self, slot: InfoSlot) -> Option<SlotMeaning> {
        match slot {
            InfoSlot::TInfo1 => self.t_info_1,
            InfoSlot::TInfo2 => self.t_info_2,
            InfoSlot::TInfo3 => self.t_info_3,
            InfoSlot::TInfo4 => self.t_info_4,
            InfoSlot::TFlags => self.t_flags,
            InfoSlot::TInfoS => self.t_info_s,
        }
    }
}

const fn plain(
    media_type: MediaType,
    file_type: u8,
    data_type: SauceDataType,
    name: &'static str,
) -> MediaInfo {
    MediaInfo {
        media_type,
        file_type,
        data_type,
        name,
        t_info_1: None,
        t_info_2: None,
        t_info_3: None,
        t_info_4: None,
        t_flags: None,
        t_info_s: None,
    }
}

/// Character media with width/lines plus ANSi flags and font name.
const fn ansi_like(
    media_type: MediaType,
    file_type: u8,
    name: &'static str,
) -> MediaInfo {
    MediaInfo {
        t_info_1: Some(SlotMeaning::CharacterWidth),
        t_info_2: Some(SlotMeaning::NumberOfLines),
        t_flags: Some(SlotMeaning::AnsiFlags),
        t_info_s: Some(SlotMeaning::FontId),
        ..plain(media_type, file_type, SauceDataType::Character, name)
    }
}

/// Character media with width/lines only.
const fn sized_text(
    media_type: MediaType,
    file_type: u8,
    name: &'static str,
) -> MediaInfo {
    MediaInfo {
        t_info_1: Some(SlotMeaning::CharacterWidth),
        t_info_2: Some(SlotMeaning::NumberOfLines),
        ..plain(media_type, file_type, SauceDataType::Character, name)
    }
}

const fn bitmap(media_type: MediaType, file_type: u8, name: &'static str) -> MediaInfo {
    MediaInfo {
        t_info_1: Some(SlotMeaning::PixelWidth),
        t_info_2: Some(SlotMeaning::PixelHeight),
        t_info_3: Some(SlotMeaning::PixelDepth),
        ..plain(media_type, file_type, SauceDataType::Bitmap, name)
    }
}

const fn vector(media_type: MediaType, file_type: u8, name: &'static str) -> MediaInfo {
    plain(media_type, file_type, SauceDataType::Vector, name)
}

const fn audio(media_type: MediaType, file_type: u8, name: &'static str) -> MediaInfo {
    plain(media_type, file_type, SauceDataType::Audio, name)
}

const fn sampled(media_type: MediaType, file_type: u8, name: &'static str) -> MediaInfo {
    MediaInfo {
        t_info_1: Some(SlotMeaning::SampleRate),
        ..plain(media_type, file_type, SauceDataType::Audio, name)
    }
}

const fn archive(media_type: MediaType, file_type: u8, name: &'static str) -> MediaInfo {
    plain(media_type, file_type, SauceDataType::Archive, name)
}

/// Every media type the registry resolves, in `(data_type, file_type)`
/// order.
pub static MEDIA_TABLE: [MediaInfo; 66] = [
    plain(MediaType::None, 0, SauceDataType::None, "None"),
    ansi_like(MediaType::Ascii, 0, "ASCII"),
    ansi_like(MediaType::Ansi, 1, "ANSi"),
    ansi_like(MediaType::AnsiMation, 2, "ANSiMation"),
    MediaInfo {
        t_info_1: Some(SlotMeaning::PixelWidth),
        t_info_2: Some(SlotMeaning::PixelHeight),
        t_info_3: Some(SlotMeaning::NumberOfColors),
        ..plain(
            MediaType::RipScript,
            3,
            SauceDataType::Character,
            "RIP script",
        )
    },
    sized_text(MediaType::PcBoard, 4, "PCBoard"),
    sized_text(MediaType::Avatar, 5, "Avatar"),
    plain(MediaType::Html, 6, SauceDataType::Character, "HTML"),
    plain(MediaType::Source, 7, SauceDataType::Character, "Source"),
    sized_text(MediaType::TundraDraw, 8, "TundraDraw"),
    bitmap(MediaType::Gif, 0, "GIF"),
    bitmap(MediaType::Pcx, 1, "PCX"),
    bitmap(MediaType::Lbm, 2, "LBM/IFF"),
    bitmap(MediaType::Tga, 3, "TGA"),
    bitmap(MediaType::Fli, 4, "FLI"),
    bitmap(MediaType::Flc, 5, "FLC"),
    bitmap(MediaType::Bmp, 6, "BMP"),
    bitmap(MediaType::Gl, 7, "GL"),
    bitmap(MediaType::Dl, 8, "DL"),
    bitmap(MediaType::WpgBitmap, 9, "WPG"),
    bitmap(MediaType::Png, 10, "PNG"),
    bitmap(MediaType::Jpg, 11, "JPG"),
    bitmap(MediaType::Mpg, 12, "MPG"),
    bitmap(MediaType::Avi, 13, "AVI"),
    vector(MediaType::Dxf, 0, "DXF"),
    vector(MediaType::Dwg, 1, "DWG"),
    vector(MediaType::WpgVector, 2, "WPG"),
    vector(MediaType::ThreeDs, 3, "3DS"),
    audio(MediaType::Mod, 0, "MOD"),
    audio(MediaType::Mod669, 1, "669"),
    audio(MediaType::Stm, 2, "STM"),
    audio(MediaType::S3m, 3, "S3M"),
    audio(MediaType::Mtm, 4, "MTM"),
    audio(MediaType::Far, 5, "FAR"),
    audio(MediaType::Ult, 6, "ULT"),
    audio(MediaType::Amf, 7, "AMF"),
    audio(MediaType::Dmf, 8, "DMF"),
    audio(MediaType::Okt, 9, "OKT"),
    audio(MediaType::Rol, 10, "ROL"),
    audio(MediaType::Cmf, 11, "CMF"),
    audio(MediaType::Mid, 12, "MID"),
    audio(MediaType::Sadt, 13, "SAdT"),
    audio(MediaType::Voc, 14, "VOC"),
    audio(MediaType::Wav, 15, "WAV"),
    sampled(MediaType::Smp8, 16, "SMP8"),
    sampled(MediaType::Smp8s, 17, "SMP8S"),
    sampled(MediaType::Smp16, 18, "SMP16"),
    sampled(MediaType::Smp16s, 19, "SMP16S"),
    audio(MediaType::Patch8, 20, "PATCH8"),
    audio(MediaType::Patch16, 21, "PATCH16"),
    audio(MediaType::Xm, 22, "XM"),
    audio(MediaType::Hsc, 23, "HSC"),
    audio(MediaType::It, 24, "IT"),
    MediaInfo {
        t_flags: Some(SlotMeaning::AnsiFlags),
        t_info_s: Some(SlotMeaning::FontId),
        ..plain(
            MediaType::BinaryText,
            0,
            SauceDataType::BinaryText,
            "Binary text",
        )
    },
    MediaInfo {
        t_info_1: Some(SlotMeaning::CharacterWidth),
        t_info_2: Some(SlotMeaning::NumberOfLines),
        ..plain(MediaType::XBin, 0, SauceDataType::XBin, "XBin")
    },
    archive(MediaType::Zip, 0, "ZIP"),
    archive(MediaType::Arj, 1, "ARJ"),
    archive(MediaType::Lzh, 2, "LZH"),
    archive(MediaType::Arc, 3, "ARC"),
    archive(MediaType::Tar, 4, "TAR"),
    archive(MediaType::Zoo, 5, "ZOO"),
    archive(MediaType::Rar, 6, "RAR"),
    archive(MediaType::Uc2, 7, "UC2"),
    archive(MediaType::Pak, 8, "PAK"),
    archive(MediaType::Sqz, 9, "SQZ"),
    plain(
        MediaType::Executable,
        0,
        SauceDataType::Executable,
        "Executable",
    ),
];

/// Resolve the `(file_type, data_type)` pair to a media type.
///
/// `BinaryText` accepts any file type because that byte stores half the
/// image width. Unknown pairs resolve to [`MediaType::None`].
pub fn resolve(file_type: u8, data_type: SauceDataType) -> MediaType {
    lookup(file_type, data_type)
        .map(|row| row.media_type)
        .unwrap_or(MediaType::None)
}

/// The registry row for a `(file_type, data_type)` pair, `None` when the
/// pair is not registered. Unlike [`resolve`] this distinguishes the
/// canonical none row from an unknown pair.
pub(crate) fn lookup(file_type: u8, data_type: SauceDataType) -> Option<&'static MediaInfo> {
    if data_type == SauceDataType::BinaryText {
        return Some(info(MediaType::BinaryText));
    }
    MEDIA_TABLE
        .iter()
        .find(|row| row.data_type == data_type && row.file_type == file_type)
}

/// The registry row for a media type.
pub fn info(media_type: MediaType) -> &'static MediaInfo {
    MEDIA_TABLE
        .iter()
        .find(|row| row.media_type == media_type)
        .expect("every media type has a registry row")
}

/// The canonical `(file_type, data_type)` pair of a media type, the
/// inverse of [`resolve`].
pub fn handle(media_type: MediaType) -> (u8, SauceDataType) {
    let row = info(media_type);
    (row.file_type, row.data_type)
}

/// The slot interpretations of a media type, in slot order. Slots the
/// media does not use are omitted.
pub fn meanings(media_type: MediaType) -> Vec<(InfoSlot, SlotMeaning)> {
    let row = info(media_type);
    InfoSlot::ALL
        .iter()
        .filter_map(|&slot| row.meaning(slot).map(|meaning| (slot, meaning)))
        .collect()
}

/// Interpret one raw slot value for a media type.
///
/// Returns `None` when the media does not use the slot. ANSi flag bytes
/// and font names are decoded; everything else passes through.
pub fn interpret(
    media_type: MediaType,
    slot: InfoSlot,
    raw: SlotRaw<'_>,
) -> Option<(SlotMeaning, SlotValue)> {
    let meaning = info(media_type).meaning(slot)?;
    let value = match (meaning, raw) {
        (SlotMeaning::AnsiFlags, SlotRaw::Byte(byte)) => SlotValue::Flags(AnsiFlags::from_byte(byte)),
        (SlotMeaning::AnsiFlags, SlotRaw::Number(number)) => {
            SlotValue::Flags(AnsiFlags::from_int(number as i64))
        }
        (SlotMeaning::FontId, SlotRaw::Text(name)) => match FontId::parse_with_fallback(name) {
            Some(font) => SlotValue::Font(font),
            None => SlotValue::Text(name.to_string()),
        },
        (_, SlotRaw::Number(number)) => SlotValue::Number(number),
        (_, SlotRaw::Byte(byte)) => SlotValue::Number(byte as u16),
        (_, SlotRaw::Text(text)) => SlotValue::Text(text.to_string()),
    };
    Some((meaning, value))
}

/// All media types registered under a data type.
pub fn media_types_for(data_type: SauceDataType) -> Vec<MediaType> {
    MEDIA_TABLE
        .iter()
        .filter(|row| row.data_type == data_type)
        .map(|row| row.media_type)
        .collect()
}

/// All file type values registered under a data type.
pub fn file_types_for(data_type: SauceDataType) -> Vec<u8> {
    MEDIA_TABLE
        .iter()
        .filter(|row| row.data_type == data_type)
        .map(|row| row.file_type)
        .collect()
}
