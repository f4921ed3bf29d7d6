//! The logical SAUCE block.
//!
//! [`SauceBlock`] is what decoding produces and encoding consumes: the
//! record fields in decoded form plus the comment lines. Comment lines
//! live here, not in the record; the stored count byte is derived on
//! encode so a block can never carry an inconsistent pointer.

use crate::ansi_flags::AnsiFlags;
use crate::data_type::SauceDataType;
use crate::date::SauceDate;
use crate::field;
use crate::fonts::FontId;
use crate::media::{self, InfoSlot, MediaType, SlotMeaning, SlotRaw, SlotValue};

/// Decoded SAUCE metadata for one file.
#[derive(Clone, Debug, PartialEq)]
pub struct SauceBlock {
    /// Format version, "00" everywhere in practice.
    pub version: String,
    /// Title of the work; empty when unset.
    pub title: String,
    /// Creator's name or handle; empty when unset.
    pub author: String,
    /// Group or company; empty when unset.
    pub group: String,
    /// Creation date; `None` when absent or garbage.
    pub date: Option<SauceDate>,
    /// Comment lines, up to 255.
    pub comments: Vec<String>,
    /// The media identification and type-dependent fields.
    pub media: MediaFields,
}

/// The `(file_type, data_type)` pair and the type-dependent fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaFields {
    pub data_type: SauceDataType,
    pub file_type: u8,
    /// Size of the payload before the SAUCE block; 0 when unknown or
    /// beyond the 32-bit range.
    pub file_size: u32,
    pub t_info_1: u16,
    pub t_info_2: u16,
    pub t_info_3: u16,
    pub t_info_4: u16,
    pub t_flags: u8,
    /// The TInfoS string; `None` for a zero-filled slot.
    pub t_info_s: Option<String>,
}

impl Default for SauceBlock {
    fn default() -> Self {
        SauceBlock {
            version: field::DEFAULT_VERSION.to_string(),
            title: String::new(),
            author: String::new(),
            group: String::new(),
            date: None,
            comments: Vec::new(),
            media: MediaFields::default(),
        }
    }
}

impl SauceBlock {
    pub fn new(media: MediaFields) -> Self {
        SauceBlock {
            media,
            ..Default::default()
        }
    }

    /// The comment count as it will be stored, derived from the lines.
    pub fn comment_lines(&self) -> u8 {
        field::clamp_comment_lines(self.comments.len())
    }

    /// The comment lines joined with `separator`.
    pub fn formatted_comments(&self, separator: &str) -> String {
        self.comments.join(separator)
    }

    pub fn prepend_comment(&mut self, line: impl Into<String>) {
        self.comments.insert(0, line.into());
    }

    pub fn add_comments<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments.extend(lines.into_iter().map(Into::into));
    }

    pub fn clear_comments(&mut self) {
        self.comments.clear();
    }

    /// The media type the `(file_type, data_type)` pair resolves to.
    pub fn media_type(&self) -> MediaType {
        media::resolve(self.media.file_type, self.media.data_type)
    }

    pub fn data_type(&self) -> SauceDataType {
        self.media.data_type
    }

    /// Interpret TInfo1 for this block's media type.
    pub fn t_info_1(&self) -> Option<(SlotMeaning, SlotValue)> {
        media::interpret(
            self.media_type(),
            InfoSlot::TInfo1,
            SlotRaw::Number(self.media.t_info_1),
        )
    }

    pub fn t_info_2(&self) -> Option<(SlotMeaning, SlotValue)> {
        media::interpret(
            self.media_type(),
            InfoSlot::TInfo2,
            SlotRaw::Number(self.media.t_info_2),
        )
    }

    pub fn t_info_3(&self) -> Option<(SlotMeaning, SlotValue)> {
        media::interpret(
            self.media_type(),
            InfoSlot::TInfo3,
            SlotRaw::Number(self.media.t_info_3),
        )
    }

    pub fn t_info_4(&self) -> Option<(SlotMeaning, SlotValue)> {
        media::interpret(
            self.media_type(),
            InfoSlot::TInfo4,
            SlotRaw::Number(self.media.t_info_4),
        )
    }

    pub fn t_flags(&self) -> Option<(SlotMeaning, SlotValue)> {
        media::interpret(
            self.media_type(),
            InfoSlot::TFlags,
            SlotRaw::Byte(self.media.t_flags),
        )
    }

    pub fn t_info_s(&self) -> Option<(SlotMeaning, SlotValue)> {
        let text = self.media.t_info_s.as_deref()?;
        media::interpret(self.media_type(), InfoSlot::TInfoS, SlotRaw::Text(text))
    }

    /// The decoded ANSi flags, when the media type carries them.
    pub fn ansi_flags(&self) -> Option<AnsiFlags> {
        match self.t_flags() {
            Some((SlotMeaning::AnsiFlags, SlotValue::Flags(flags))) => Some(flags),
            _ => None,
        }
    }

    /// The font the TInfoS field names, when it resolves.
    pub fn font(&self) -> Option<FontId> {
        match self.t_info_s() {
            Some((SlotMeaning::FontId, SlotValue::Font(font))) => Some(font),
            _ => None,
        }
    }

    /// Flatten record fields and interpreted slots into one descriptor.
    pub fn details(&self) -> SauceDetails {
        let media_type = self.media_type();
        let slots = [
            self.t_info_1(),
            self.t_info_2(),
            self.t_info_3(),
            self.t_info_4(),
            self.t_flags(),
            self.t_info_s(),
        ]
        .into_iter()
        .flatten()
        .collect();
        SauceDetails {
            media_type,
            media_name: media::info(media_type).name,
            data_type: self.media.data_type,
            file_type: self.media.file_type,
            file_size: self.media.file_size,
            version: self.version.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            group: self.group.clone(),
            date: self.date,
            comments: self.comments.clone(),
            slots,
        }
    }
}

/// Flat, UI-ready view of a block: record fields plus every used
/// type-dependent slot with its interpreted value.
#[derive(Clone, Debug, PartialEq)]
pub struct SauceDetails {
    pub media_type: MediaType,
    pub media_name: &'static str,
    pub data_type: SauceDataType,
    pub file_type: u8,
    pub file_size: u32,
    pub version: String,
    pub title: String,
    pub author: String,
    pub group: String,
    pub date: Option<SauceDate>,
    pub comments: Vec<String>,
    pub slots: Vec<(SlotMeaning, SlotValue)>,
}
