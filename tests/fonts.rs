use std::collections::HashSet;

use saucery::fonts::{Codepage, FontEncoding, FontFamily, FontId};

#[test]
fn the_registry_covers_the_full_name_list() {
    // 5 IBM families, bare plus 22 code pages each, plus 8 Amiga,
    // 2 C64 and 1 Atari font.
    assert_eq!(FontId::all().count(), 5 * 23 + 11);

    // Names are unique and parse back to themselves.
    let mut seen = HashSet::new();
    for font in FontId::all() {
        let name = font.name();
        assert!(seen.insert(name.clone()), "duplicate font name {name}");
        assert_eq!(FontId::parse(&name), Some(font));
    }
}

#[test]
fn parse_exact_spellings() {
    assert_eq!(
        FontId::parse("IBM VGA"),
        Some(FontId {
            family: FontFamily::IbmVga,
            codepage: None
        })
    );
    assert_eq!(
        FontId::parse("IBM VGA 850"),
        Some(FontId {
            family: FontFamily::IbmVga,
            codepage: Some(Codepage::Cp850)
        })
    );
    assert_eq!(
        FontId::parse("IBM EGA43 KAM"),
        Some(FontId {
            family: FontFamily::IbmEga43,
            codepage: Some(Codepage::Kam)
        })
    );
    assert_eq!(
        FontId::parse("Amiga P0T-NOoDLE"),
        Some(FontId {
            family: FontFamily::AmigaPotNoodle,
            codepage: None
        })
    );
    assert_eq!(
        FontId::parse("C64 PETSCII shifted"),
        Some(FontId {
            family: FontFamily::C64PetsciiShifted,
            codepage: None
        })
    );

    // Case does not matter, the wild is sloppy.
    assert_eq!(FontId::parse("ibm vga 850"), FontId::parse("IBM VGA 850"));
    assert_eq!(FontId::parse("AMIGA MOSOUL"), FontId::parse("Amiga mOsOul"));

    assert_eq!(FontId::parse("MS Comic Sans"), None);
    assert_eq!(FontId::parse("IBM VGA 999"), None);
}

#[test]
fn fifty_suffix_is_not_a_codepage() {
    // "IBM VGA50" is its own family, not "IBM VGA" plus a suffix.
    let font = FontId::parse("IBM VGA50").unwrap();
    assert_eq!(font.family, FontFamily::IbmVga50);
    assert_eq!(font.codepage, None);

    let paged = FontId::parse("IBM VGA50 866").unwrap();
    assert_eq!(paged.family, FontFamily::IbmVga50);
    assert_eq!(paged.codepage, Some(Codepage::Cp866));
}

#[test]
fn fallback_chain() {
    // Unknown code page falls back to the base family.
    assert_eq!(
        FontId::parse_with_fallback("IBM VGA 999"),
        Some(FontId {
            family: FontFamily::IbmVga,
            codepage: None
        })
    );
    // Exact names resolve unchanged.
    assert_eq!(
        FontId::parse_with_fallback("Amiga Topaz 2+"),
        FontId::parse("Amiga Topaz 2+")
    );
    assert_eq!(FontId::parse_with_fallback("bogus"), None);
}

#[test]
fn encodings() {
    assert_eq!(FontId::parse("IBM VGA").unwrap().encoding(), FontEncoding::Cp437);
    assert_eq!(
        FontId::parse("IBM VGA 866").unwrap().encoding(),
        FontEncoding::Cp866
    );
    assert_eq!(
        FontId::parse("Amiga Topaz 2+").unwrap().encoding(),
        FontEncoding::AmigaTopaz
    );
    assert_eq!(
        FontId::parse("C64 PETSCII unshifted").unwrap().encoding(),
        FontEncoding::Petscii
    );
    assert_eq!(
        FontId::parse("Atari ATASCII").unwrap().encoding(),
        FontEncoding::Atascii
    );

    // 22 code pages plus 4 Amiga encodings plus PETSCII and ATASCII.
    let distinct: HashSet<FontEncoding> = FontId::all().map(FontId::encoding).collect();
    assert_eq!(distinct.len(), 28);
}

#[test]
fn display_metrics() {
    let vga = FontId::IBM_VGA.options();
    assert_eq!(vga.font_size, (9, 16));
    assert_eq!(vga.resolution, (720, 400));

    let ega = FontId::parse("IBM EGA").unwrap().options();
    assert_eq!(ega.font_size, (8, 14));
    assert_eq!(ega.resolution, (640, 350));

    // Code page variants share the family metrics.
    assert_eq!(FontId::parse("IBM VGA 850").unwrap().options(), vga);
}

#[test]
fn sibling_by_cell_size() {
    let fifty = FontId::IBM_VGA.with_cell_size((9, 8)).unwrap();
    assert_eq!(fifty.family, FontFamily::IbmVga50);

    // The code page carries over to the sibling.
    let paged = FontId::parse("IBM VGA 850").unwrap();
    let ega = paged.with_cell_size((8, 14)).unwrap();
    assert_eq!(ega.family, FontFamily::IbmEga);
    assert_eq!(ega.codepage, Some(Codepage::Cp850));

    assert!(FontId::IBM_VGA.with_cell_size((7, 7)).is_none());

    let atari = FontId::parse("Atari ATASCII").unwrap();
    assert_eq!(atari.with_cell_size((8, 8)), Some(atari));
    assert_eq!(atari.with_cell_size((9, 16)), None);
}

#[test]
fn names_round_trip_through_display() {
    for font in FontId::all() {
        assert_eq!(font.to_string(), font.name());
    }
    assert_eq!(FontId::parse("IBM VGA 850").unwrap().name(), "IBM VGA 850");
}
