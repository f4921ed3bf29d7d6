//! Builder for valid SAUCE blocks.
//!
//! Field widths are validated against the stored CP437 byte length, so
//! a title that only fits after transcoding still passes.

use crate::ansi_flags::AnsiFlags;
use crate::block::SauceBlock;
use crate::data_type::SauceDataType;
use crate::date::SauceDate;
use crate::encoding::encode_text;
use crate::fonts::FontId;
use crate::limits;
use crate::media::{self, MediaType};
use crate::{Result, SauceError};

/// The builder helps creating valid SAUCE blocks.
#[derive(Default)]
pub struct SauceBlockBuilder {
    block: SauceBlock,
}

impl SauceBlockBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        let stored = encode_text(&title).len();
        if stored > limits::MAX_TITLE_LENGTH {
            return Err(SauceError::TitleTooLong(stored));
        }
        self.block.title = title;
        Ok(self)
    }

    pub fn author(mut self, author: impl Into<String>) -> Result<Self> {
        let author = author.into();
        let stored = encode_text(&author).len();
        if stored > limits::MAX_AUTHOR_LENGTH {
            return Err(SauceError::AuthorTooLong(stored));
        }
        self.block.author = author;
        Ok(self)
    }

    pub fn group(mut self, group: impl Into<String>) -> Result<Self> {
        let group = group.into();
        let stored = encode_text(&group).len();
        if stored > limits::MAX_GROUP_LENGTH {
            return Err(SauceError::GroupTooLong(stored));
        }
        self.block.group = group;
        Ok(self)
    }

    pub fn date(mut self, date: SauceDate) -> Self {
        self.block.date = Some(date);
        self
    }

    pub fn file_size(mut self, file_size: u32) -> Self {
        self.block.media.file_size = file_size;
        self
    }

    /// Set the `(file_type, data_type)` pair from a registered media
    /// type.
    pub fn media_type(mut self, media_type: MediaType) -> Self {
        let (file_type, data_type) = media::handle(media_type);
        self.block.media.file_type = file_type;
        self.block.media.data_type = data_type;
        self
    }

    pub fn data_type(mut self, data_type: SauceDataType) -> Self {
        self.block.media.data_type = data_type;
        self
    }

    pub fn file_type(mut self, file_type: u8) -> Self {
        self.block.media.file_type = file_type;
        self
    }

    pub fn t_info_1(mut self, value: u16) -> Self {
        self.block.media.t_info_1 = value;
        self
    }

    pub fn t_info_2(mut self, value: u16) -> Self {
        self.block.media.t_info_2 = value;
        self
    }

    pub fn t_info_3(mut self, value: u16) -> Self {
        self.block.media.t_info_3 = value;
        self
    }

    pub fn t_info_4(mut self, value: u16) -> Self {
        self.block.media.t_info_4 = value;
        self
    }

    pub fn t_flags(mut self, flags: u8) -> Self {
        self.block.media.t_flags = flags;
        self
    }

    /// Set the flags byte from decoded ANSi flags.
    pub fn ansi_flags(mut self, flags: AnsiFlags) -> Self {
        self.block.media.t_flags = flags.to_byte();
        self
    }

    pub fn info_string(mut self, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let stored = encode_text(&text).len();
        if stored > limits::MAX_INFO_STRING_LENGTH {
            return Err(SauceError::InfoStringTooLong(stored));
        }
        self.block.media.t_info_s = Some(text);
        Ok(self)
    }

    /// Set the info string to a registered font name.
    pub fn font(mut self, font: FontId) -> Self {
        self.block.media.t_info_s = Some(font.name());
        self
    }

    /// Append a comment line.
    pub fn comment(mut self, line: impl Into<String>) -> Result<Self> {
        if self.block.comments.len() >= limits::MAX_COMMENT_LINES {
            return Err(SauceError::CommentLimitExceeded);
        }
        let line = line.into();
        let stored = encode_text(&line).len();
        if stored > limits::COMMENT_LINE_SIZE {
            return Err(SauceError::CommentTooLong(stored));
        }
        self.block.comments.push(line);
        Ok(self)
    }

    pub fn build(self) -> SauceBlock {
        self.block
    }
}

impl From<SauceBlock> for SauceBlockBuilder {
    /// Continue editing an existing block.
    fn from(block: SauceBlock) -> Self {
        SauceBlockBuilder { block }
    }
}

impl SauceBlock {
    /// Continue editing a copy of this block.
    pub fn to_builder(&self) -> SauceBlockBuilder {
        SauceBlockBuilder {
            block: self.clone(),
        }
    }
}
