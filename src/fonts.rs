//! The SAUCE font name registry.
//!
//! The TInfoS field of ANSi-family media names the font the artwork was
//! drawn for. The specified name list is the cross product of the five
//! IBM PC font families with the supported code pages, plus the Amiga,
//! Commodore 64 and Atari fonts. [`FontId`] models that factorization
//! directly instead of spelling out every combination: a family plus an
//! optional code page for the IBM families.
//!
//! Display metrics (cell size, mode resolution, aspect) are properties
//! of the family; [`FontId::options`] exposes them for renderers that
//! want to reproduce period-correct output.

/// Hardware font family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// IBM VGA 9x16 text mode font.
    IbmVga,
    /// IBM VGA 9x8 font for 50 line mode.
    IbmVga50,
    /// IBM VGA 8x19 font for graphics mode.
    IbmVga25g,
    /// IBM EGA 8x14 text mode font.
    IbmEga,
    /// IBM EGA 8x8 font for 43 line mode.
    IbmEga43,
    AmigaTopaz1,
    AmigaTopaz1Plus,
    AmigaTopaz2,
    AmigaTopaz2Plus,
    AmigaPotNoodle,
    AmigaMicroKnight,
    AmigaMicroKnightPlus,
    AmigaMosoul,
    C64PetsciiUnshifted,
    C64PetsciiShifted,
    AtariAtascii,
}

impl FontFamily {
    pub const ALL: [FontFamily; 16] = [
        FontFamily::IbmVga,
        FontFamily::IbmVga50,
        FontFamily::IbmVga25g,
        FontFamily::IbmEga,
        FontFamily::IbmEga43,
        FontFamily::AmigaTopaz1,
        FontFamily::AmigaTopaz1Plus,
        FontFamily::AmigaTopaz2,
        FontFamily::AmigaTopaz2Plus,
        FontFamily::AmigaPotNoodle,
        FontFamily::AmigaMicroKnight,
        FontFamily::AmigaMicroKnightPlus,
        FontFamily::AmigaMosoul,
        FontFamily::C64PetsciiUnshifted,
        FontFamily::C64PetsciiShifted,
        FontFamily::AtariAtascii,
    ];

    /// Exact SAUCE spelling of the family base name.
    pub const fn base_name(self) -> &'static str {
        match self {
            FontFamily::IbmVga => "IBM VGA",
            FontFamily::IbmVga50 => "IBM VGA50",
            FontFamily::IbmVga25g => "IBM VGA25G",
            FontFamily::IbmEga => "IBM EGA",
            FontFamily::IbmEga43 => "IBM EGA43",
            FontFamily::AmigaTopaz1 => "Amiga Topaz 1",
            FontFamily::AmigaTopaz1Plus => "Amiga Topaz 1+",
            FontFamily::AmigaTopaz2 => "Amiga Topaz 2",
            FontFamily::AmigaTopaz2Plus => "Amiga Topaz 2+",
            FontFamily::AmigaPotNoodle => "Amiga P0T-NOoDLE",
            FontFamily::AmigaMicroKnight => "Amiga MicroKnight",
            FontFamily::AmigaMicroKnightPlus => "Amiga MicroKnight+",
            FontFamily::AmigaMosoul => "Amiga mOsOul",
            FontFamily::C64PetsciiUnshifted => "C64 PETSCII unshifted",
            FontFamily::C64PetsciiShifted => "C64 PETSCII shifted",
            FontFamily::AtariAtascii => "Atari ATASCII",
        }
    }

    /// Whether the family name takes a code page suffix.
    pub const fn takes_codepage(self) -> bool {
        matches!(
            self,
            FontFamily::IbmVga
                | FontFamily::IbmVga50
                | FontFamily::IbmVga25g
                | FontFamily::IbmEga
                | FontFamily::IbmEga43
        )
    }

    /// Display metrics shared by every code page variant of the family.
    pub const fn options(self) -> FontOptions {
        match self {
            FontFamily::IbmVga => FontOptions {
                font_size: (9, 16),
                resolution: (720, 400),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (20, 27),
                vertical_stretch: 35.0,
            },
            FontFamily::IbmVga50 => FontOptions {
                font_size: (9, 8),
                resolution: (720, 400),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (20, 27),
                vertical_stretch: 35.0,
            },
            FontFamily::IbmVga25g => FontOptions {
                font_size: (8, 19),
                resolution: (640, 480),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (1, 1),
                vertical_stretch: 0.0,
            },
            FontFamily::IbmEga => FontOptions {
                font_size: (8, 14),
                resolution: (640, 350),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (35, 48),
                vertical_stretch: 37.14,
            },
            FontFamily::IbmEga43 => FontOptions {
                font_size: (8, 8),
                resolution: (640, 350),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (35, 48),
                vertical_stretch: 37.14,
            },
            FontFamily::AmigaTopaz1
            | FontFamily::AmigaTopaz1Plus
            | FontFamily::AmigaTopaz2
            | FontFamily::AmigaTopaz2Plus
            | FontFamily::AmigaPotNoodle
            | FontFamily::AmigaMicroKnight
            | FontFamily::AmigaMicroKnightPlus
            | FontFamily::AmigaMosoul => FontOptions {
                font_size: (8, 16),
                resolution: (640, 400),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (5, 6),
                vertical_stretch: 20.0,
            },
            FontFamily::C64PetsciiUnshifted | FontFamily::C64PetsciiShifted => FontOptions {
                font_size: (8, 8),
                resolution: (320, 200),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (5, 6),
                vertical_stretch: 20.0,
            },
            FontFamily::AtariAtascii => FontOptions {
                font_size: (8, 8),
                resolution: (320, 192),
                display_aspect_ratio: (4, 3),
                pixel_ratio: (4, 5),
                vertical_stretch: 25.0,
            },
        }
    }
}

/// Code page suffix for the IBM font families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Codepage {
    Cp437,
    Cp720,
    Cp737,
    Cp775,
    Cp819,
    Cp850,
    Cp852,
    Cp855,
    Cp857,
    Cp858,
    Cp860,
    Cp861,
    Cp862,
    Cp863,
    Cp864,
    Cp865,
    Cp866,
    Cp869,
    Cp872,
    /// Kamenicky (Czech, Slovak).
    Kam,
    /// Mazovia (Polish).
    Maz,
    /// MIK (Bulgarian).
    Mik,
}

impl Codepage {
    pub const ALL: [Codepage; 22] = [
        Codepage::Cp437,
        Codepage::Cp720,
        Codepage::Cp737,
        Codepage::Cp775,
        Codepage::Cp819,
        Codepage::Cp850,
        Codepage::Cp852,
        Codepage::Cp855,
        Codepage::Cp857,
        Codepage::Cp858,
        Codepage::Cp860,
        Codepage::Cp861,
        Codepage::Cp862,
        Codepage::Cp863,
        Codepage::Cp864,
        Codepage::Cp865,
        Codepage::Cp866,
        Codepage::Cp869,
        Codepage::Cp872,
        Codepage::Kam,
        Codepage::Maz,
        Codepage::Mik,
    ];

    /// The suffix as it appears in SAUCE font names.
    pub const fn suffix(self) -> &'static str {
        match self {
            Codepage::Cp437 => "437",
            Codepage::Cp720 => "720",
            Codepage::Cp737 => "737",
            Codepage::Cp775 => "775",
            Codepage::Cp819 => "819",
            Codepage::Cp850 => "850",
            Codepage::Cp852 => "852",
            Codepage::Cp855 => "855",
            Codepage::Cp857 => "857",
            Codepage::Cp858 => "858",
            Codepage::Cp860 => "860",
            Codepage::Cp861 => "861",
            Codepage::Cp862 => "862",
            Codepage::Cp863 => "863",
            Codepage::Cp864 => "864",
            Codepage::Cp865 => "865",
            Codepage::Cp866 => "866",
            Codepage::Cp869 => "869",
            Codepage::Cp872 => "872",
            Codepage::Kam => "KAM",
            Codepage::Maz => "MAZ",
            Codepage::Mik => "MIK",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Codepage> {
        Codepage::ALL
            .iter()
            .copied()
            .find(|cp| cp.suffix().eq_ignore_ascii_case(suffix))
    }
}

/// Character encoding a font renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontEncoding {
    Cp437,
    Cp720,
    Cp737,
    Cp775,
    Cp819,
    Cp850,
    Cp852,
    Cp855,
    Cp857,
    Cp858,
    Cp860,
    Cp861,
    Cp862,
    Cp863,
    Cp864,
    Cp865,
    Cp866,
    Cp869,
    Cp872,
    Kam,
    Maz,
    Mik,
    AmigaTopaz,
    AmigaPotNoodle,
    AmigaMicroKnight,
    AmigaMosoul,
    Petscii,
    Atascii,
}

impl Codepage {
    const fn encoding(self) -> FontEncoding {
        match self {
            Codepage::Cp437 => FontEncoding::Cp437,
            Codepage::Cp720 => FontEncoding::Cp720,
            Codepage::Cp737 => FontEncoding::Cp737,
            Codepage::Cp775 => FontEncoding::Cp775,
            Codepage::Cp819 => FontEncoding::Cp819,
            Codepage::Cp850 => FontEncoding::Cp850,
            Codepage::Cp852 => FontEncoding::Cp852,
            Codepage::Cp855 => FontEncoding::Cp855,
            Codepage::Cp857 => FontEncoding::Cp857,
            Codepage::Cp858 => FontEncoding::Cp858,
            Codepage::Cp860 => FontEncoding::Cp860,
            Codepage::Cp861 => FontEncoding::Cp861,
            Codepage::Cp862 => FontEncoding::Cp862,
            Codepage::Cp863 => FontEncoding::Cp863,
            Codepage::Cp864 => FontEncoding::Cp864,
            Codepage::Cp865 => FontEncoding::Cp865,
            Codepage::Cp866 => FontEncoding::Cp866,
            Codepage::Cp869 => FontEncoding::Cp869,
            Codepage::Cp872 => FontEncoding::Cp872,
            Codepage::Kam => FontEncoding::Kam,
            Codepage::Maz => FontEncoding::Maz,
            Codepage::Mik => FontEncoding::Mik,
        }
    }
}

/// Display metrics for period-correct rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontOptions {
    /// Glyph cell size in pixels, width by height.
    pub font_size: (u8, u8),
    /// Video mode resolution the font was designed for.
    pub resolution: (u16, u16),
    /// Physical display aspect ratio.
    pub display_aspect_ratio: (u8, u8),
    /// Pixel aspect ratio on the original display.
    pub pixel_ratio: (u8, u8),
    /// Vertical stretch percentage needed on square pixels.
    pub vertical_stretch: f32,
}

/// A font identifier from the SAUCE name list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontId {
    pub family: FontFamily,
    /// Code page suffix; only the IBM families carry one.
    pub codepage: Option<Codepage>,
}

impl FontId {
    pub const IBM_VGA: FontId = FontId {
        family: FontFamily::IbmVga,
        codepage: None,
    };

    /// Pair a family with a code page. Returns `None` when the family
    /// does not take a code page suffix.
    pub fn new(family: FontFamily, codepage: Option<Codepage>) -> Option<FontId> {
        if codepage.is_some() && !family.takes_codepage() {
            return None;
        }
        Some(FontId { family, codepage })
    }

    /// Every font identifier in the SAUCE name list.
    pub fn all() -> impl Iterator<Item = FontId> {
        FontFamily::ALL.iter().flat_map(|&family| {
            let codepages: &[Option<Codepage>] = if family.takes_codepage() {
                &PAGED
            } else {
                &BARE
            };
            codepages
                .iter()
                .map(move |&codepage| FontId { family, codepage })
        })
    }

    /// Look up a font by its exact SAUCE spelling, ASCII case-insensitive.
    ///
    /// ```
    /// use saucery::fonts::{Codepage, FontFamily, FontId};
    ///
    /// let font = FontId::parse("IBM VGA 850").unwrap();
    /// assert_eq!(font.family, FontFamily::IbmVga);
    /// assert_eq!(font.codepage, Some(Codepage::Cp850));
    /// assert!(FontId::parse("MS Comic Sans").is_none());
    /// ```
    pub fn parse(name: &str) -> Option<FontId> {
        let name = name.trim();
        for &family in &FontFamily::ALL {
            let base = family.base_name();
            if name.eq_ignore_ascii_case(base) {
                return Some(FontId {
                    family,
                    codepage: None,
                });
            }
            if !family.takes_codepage() || name.len() <= base.len() {
                continue;
            }
            // A code page suffix follows the base name after one space.
            let (head, tail) = name.split_at(base.len());
            if head.eq_ignore_ascii_case(base) && tail.starts_with(' ') {
                if let Some(codepage) = Codepage::from_suffix(tail.trim_start()) {
                    return Some(FontId {
                        family,
                        codepage: Some(codepage),
                    });
                }
            }
        }
        None
    }

    /// Look up a font with the conventional fallback chain: an unknown
    /// IBM code page suffix falls back to the base family, an unknown
    /// "+" variant falls back to the font without the plus.
    pub fn parse_with_fallback(name: &str) -> Option<FontId> {
        let name = name.trim();
        if let Some(font) = FontId::parse(name) {
            return Some(font);
        }
        if let Some(base) = name.rfind(' ').map(|pos| &name[..pos]) {
            if let Some(font) = FontId::parse(base) {
                if font.family.takes_codepage() {
                    return Some(font);
                }
            }
        }
        if let Some(base) = name.strip_suffix('+') {
            if let Some(font) = FontId::parse(base) {
                return Some(font);
            }
        }
        None
    }

    /// The exact SAUCE spelling of this font identifier.
    pub fn name(self) -> String {
        match self.codepage {
            Some(codepage) => format!("{} {}", self.family.base_name(), codepage.suffix()),
            None => self.family.base_name().to_string(),
        }
    }

    /// The character encoding this font renders. IBM families without a
    /// code page suffix default to CP437.
    pub fn encoding(self) -> FontEncoding {
        match self.family {
            FontFamily::IbmVga
            | FontFamily::IbmVga50
            | FontFamily::IbmVga25g
            | FontFamily::IbmEga
            | FontFamily::IbmEga43 => self.codepage.unwrap_or(Codepage::Cp437).encoding(),
            FontFamily::AmigaTopaz1
            | FontFamily::AmigaTopaz1Plus
            | FontFamily::AmigaTopaz2
            | FontFamily::AmigaTopaz2Plus => FontEncoding::AmigaTopaz,
            FontFamily::AmigaPotNoodle => FontEncoding::AmigaPotNoodle,
            FontFamily::AmigaMicroKnight | FontFamily::AmigaMicroKnightPlus => {
                FontEncoding::AmigaMicroKnight
            }
            FontFamily::AmigaMosoul => FontEncoding::AmigaMosoul,
            FontFamily::C64PetsciiUnshifted | FontFamily::C64PetsciiShifted => {
                FontEncoding::Petscii
            }
            FontFamily::AtariAtascii => FontEncoding::Atascii,
        }
    }

    /// Display metrics for this font.
    pub fn options(self) -> FontOptions {
        self.family.options()
    }

    /// Sibling font of this hardware line with the given glyph cell
    /// size, keeping the code page. `None` when no sibling matches.
    ///
    /// ```
    /// use saucery::fonts::{FontFamily, FontId};
    ///
    /// let vga = FontId::IBM_VGA;
    /// let fifty = vga.with_cell_size((9, 8)).unwrap();
    /// assert_eq!(fifty.family, FontFamily::IbmVga50);
    /// ```
    pub fn with_cell_size(self, cell: (u8, u8)) -> Option<FontId> {
        if !self.family.takes_codepage() {
            return (self.options().font_size == cell).then_some(self);
        }
        const IBM: [FontFamily; 5] = [
            FontFamily::IbmVga,
            FontFamily::IbmVga50,
            FontFamily::IbmVga25g,
            FontFamily::IbmEga,
            FontFamily::IbmEga43,
        ];
        IBM.iter()
            .copied()
            .find(|family| family.options().font_size == cell)
            .map(|family| FontId {
                family,
                codepage: self.codepage,
            })
    }
}

impl std::fmt::Display for FontId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.codepage {
            Some(codepage) => {
                write!(f, "{} {}", self.family.base_name(), codepage.suffix())
            }
            None => f.write_str(self.family.base_name()),
        }
    }
}

static BARE: [Option<Codepage>; 1] = [None];
static PAGED: [Option<Codepage>; 23] = [
    None,
    Some(Codepage::Cp437),
    Some(Codepage::Cp720),
    Some(Codepage::Cp737),
    Some(Codepage::Cp775),
    Some(Codepage::Cp819),
    Some(Codepage::Cp850),
    Some(Codepage::Cp852),
    Some(Codepage::Cp855),
    Some(Codepage::Cp857),
    Some(Codepage::Cp858),
    Some(Codepage::Cp860),
    Some(Codepage::Cp861),
    Some(Codepage::Cp862),
    Some(Codepage::Cp863),
    Some(Codepage::Cp864),
    Some(Codepage::Cp865),
    Some(Codepage::Cp866),
    Some(Codepage::Cp869),
    Some(Codepage::Cp872),
    Some(Codepage::Kam),
    Some(Codepage::Maz),
    Some(Codepage::Mik),
];
