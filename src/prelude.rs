//! Convenience re-exports of the most commonly used types and entry
//! points.
//!
//! ```
//! use saucery::prelude::*;
//!
//! let block = SauceBlockBuilder::default()
//!     .title("Example")?
//!     .media_type(MediaType::Ansi)
//!     .build();
//! let tagged = writer::write(b"contents", &block);
//! assert_eq!(reader::sauce(&tagged)?.title, "Example");
//! # Ok::<(), SauceError>(())
//! ```

pub use crate::{
    // Core types
    AnsiFlags,
    AspectRatio,
    FontId,
    LetterSpacing,
    MediaFields,
    MediaType,
    Result,
    SauceBlock,
    SauceBlockBuilder,
    SauceDataType,
    SauceDate,
    SauceDetails,
    SauceError,
    SauceField,
    SlotMeaning,
    SlotValue,
    // Entry point modules
    file,
    reader,
    writer,
};
