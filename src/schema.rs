//! SAUCE record field schema.
//!
//! One source of truth for the 16 field offsets and sizes of the 128-byte
//! record. The codec pattern-matches on [`SauceField`] so field access
//! compiles down to constant offsets; the layout is checked at compile time.
//!
//! | Offset | Length | Field        | Type     |
//! |--------|--------|--------------|----------|
//! | 0      | 5      | Id           | char[5]  |
//! | 5      | 2      | Version      | char[2]  |
//! | 7      | 35     | Title        | char[35] |
//! | 42     | 20     | Author       | char[20] |
//! | 62     | 20     | Group        | char[20] |
//! | 82     | 8      | Date         | char[8]  |
//! | 90     | 4      | FileSize     | u32 LE   |
//! | 94     | 1      | DataType     | u8       |
//! | 95     | 1      | FileType     | u8       |
//! | 96     | 2      | TInfo1       | u16 LE   |
//! | 98     | 2      | TInfo2       | u16 LE   |
//! | 100    | 2      | TInfo3       | u16 LE   |
//! | 102    | 2      | TInfo4       | u16 LE   |
//! | 104    | 1      | CommentLines | u8       |
//! | 105    | 1      | TFlags       | u8       |
//! | 106    | 22     | TInfoS       | char[22] |

use crate::limits;

/// Identifier of a SAUCE record field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SauceField {
    Id,
    Version,
    Title,
    Author,
    Group,
    Date,
    FileSize,
    DataType,
    FileType,
    TInfo1,
    TInfo2,
    TInfo3,
    TInfo4,
    CommentLines,
    TFlags,
    TInfoS,
}

impl SauceField {
    /// All fields in declared (wire) order.
    pub const ALL: [SauceField; 16] = [
        SauceField::Id,
        SauceField::Version,
        SauceField::Title,
        SauceField::Author,
        SauceField::Group,
        SauceField::Date,
        SauceField::FileSize,
        SauceField::DataType,
        SauceField::FileType,
        SauceField::TInfo1,
        SauceField::TInfo2,
        SauceField::TInfo3,
        SauceField::TInfo4,
        SauceField::CommentLines,
        SauceField::TFlags,
        SauceField::TInfoS,
    ];

    /// Fields that must decode for a record to be considered valid.
    /// Every other field falls back to its default on decode failure.
    pub const REQUIRED: [SauceField; 2] = [SauceField::Id, SauceField::Version];

    /// Byte length of the field inside the record.
    pub const fn size(self) -> usize {
        match self {
            SauceField::Id => limits::SAUCE_ID_SIZE,
            SauceField::Version => 2,
            SauceField::Title => limits::MAX_TITLE_LENGTH,
            SauceField::Author => limits::MAX_AUTHOR_LENGTH,
            SauceField::Group => limits::MAX_GROUP_LENGTH,
            SauceField::Date => limits::DATE_LENGTH,
            SauceField::FileSize => 4,
            SauceField::DataType => 1,
            SauceField::FileType => 1,
            SauceField::TInfo1 => 2,
            SauceField::TInfo2 => 2,
            SauceField::TInfo3 => 2,
            SauceField::TInfo4 => 2,
            SauceField::CommentLines => 1,
            SauceField::TFlags => 1,
            SauceField::TInfoS => limits::MAX_INFO_STRING_LENGTH,
        }
    }

    /// Byte offset of the field inside the record.
    pub const fn offset(self) -> usize {
        match self {
            SauceField::Id => 0,
            SauceField::Version => 5,
            SauceField::Title => 7,
            SauceField::Author => 42,
            SauceField::Group => 62,
            SauceField::Date => 82,
            SauceField::FileSize => 90,
            SauceField::DataType => 94,
            SauceField::FileType => 95,
            SauceField::TInfo1 => 96,
            SauceField::TInfo2 => 98,
            SauceField::TInfo3 => 100,
            SauceField::TInfo4 => 102,
            SauceField::CommentLines => 104,
            SauceField::TFlags => 105,
            SauceField::TInfoS => 106,
        }
    }

    /// Byte range of the field inside the record.
    pub const fn range(self) -> std::ops::Range<usize> {
        self.offset()..self.offset() + self.size()
    }
}

// The declared offsets must tile [0, 128) without gap or overlap.
const _: () = {
    let mut expected = 0;
    let mut i = 0;
    while i < SauceField::ALL.len() {
        let field = SauceField::ALL[i];
        assert!(field.offset() == expected);
        expected += field.size();
        i += 1;
    }
    assert!(expected == limits::RECORD_SIZE);
};
