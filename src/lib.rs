//! Read, write, repair and introspect SAUCE metadata.
//!
//! SAUCE is the 128-byte trailer the text-mode art scene appends to
//! files (ANSi, ASCII, XBIN, tracker modules, bitmaps), optionally
//! preceded by a comment block. Wild files are frequently malformed:
//! wrong comment counts, missing EOF sentinels, zero-filled records,
//! oversize strings. This crate reads those tolerantly and always writes
//! well-formed blocks.
//!
//! # Reading
//!
//! ```no_run
//! use saucery::reader;
//!
//! let data = std::fs::read("artwork.ans")?;
//! match reader::sauce(&data) {
//!     Ok(block) => {
//!         println!("{} by {}", block.title, block.author);
//!         for (meaning, value) in block.details().slots {
//!             println!("  {}: {:?}", meaning.name(), value);
//!         }
//!     }
//!     Err(saucery::SauceError::NoSauce) => println!("no SAUCE"),
//!     Err(err) => return Err(err.into()),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Writing
//!
//! ```
//! use saucery::{writer, MediaType, SauceBlockBuilder};
//!
//! let block = SauceBlockBuilder::default()
//!     .title("Example")?
//!     .author("Me")?
//!     .media_type(MediaType::Ansi)
//!     .t_info_1(80)
//!     .comment("drawn at 80 columns")?
//!     .build();
//!
//! let tagged = writer::write(b"file contents", &block);
//! assert!(saucery::reader::has_sauce(&tagged));
//! # Ok::<(), saucery::SauceError>(())
//! ```
//!
//! Files are handled positionally without loading the whole container;
//! see [`file`]. The raw building blocks (field schema, tolerant tail
//! splitting, single-field rewrites) are public in [`schema`] and
//! [`binary`] for repair tooling.

pub type Result<T> = std::result::Result<T, SauceError>;

pub mod ansi_flags;
pub mod binary;
mod block;
mod builder;
mod data_type;
mod date;
pub mod encoding;
mod errors;
mod field;
pub mod file;
pub mod fonts;
pub mod limits;
pub mod media;
pub mod reader;
pub mod record;
pub mod schema;
pub mod util;
pub mod writer;

pub mod prelude;

pub use ansi_flags::{AnsiFlags, AspectRatio, LetterSpacing};
pub use block::{MediaFields, SauceBlock, SauceDetails};
pub use builder::SauceBlockBuilder;
pub use data_type::SauceDataType;
pub use date::SauceDate;
pub use errors::SauceError;
pub use fonts::{FontEncoding, FontFamily, FontId, FontOptions};
pub use media::{InfoSlot, MediaType, SlotMeaning, SlotValue};
pub use schema::SauceField;
