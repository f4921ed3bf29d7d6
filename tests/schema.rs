use saucery::{limits, SauceField};

#[test]
fn fields_tile_the_record_without_gaps() {
    let mut expected = 0;
    for field in SauceField::ALL {
        assert_eq!(field.offset(), expected, "{field:?} starts at a gap");
        assert!(field.offset() + field.size() <= limits::RECORD_SIZE);
        expected += field.size();
    }
    assert_eq!(expected, limits::RECORD_SIZE);
}

#[test]
fn declared_sizes_match_the_specification() {
    assert_eq!(SauceField::Id.size(), 5);
    assert_eq!(SauceField::Version.size(), 2);
    assert_eq!(SauceField::Title.size(), 35);
    assert_eq!(SauceField::Author.size(), 20);
    assert_eq!(SauceField::Group.size(), 20);
    assert_eq!(SauceField::Date.size(), 8);
    assert_eq!(SauceField::FileSize.size(), 4);
    assert_eq!(SauceField::TInfoS.size(), 22);
    assert_eq!(SauceField::TInfoS.range(), 106..128);
}

#[test]
fn required_fields() {
    assert_eq!(
        SauceField::REQUIRED,
        [SauceField::Id, SauceField::Version]
    );
}

#[test]
fn block_size_formula() {
    assert_eq!(limits::sauce_block_size(0), 128);
    assert_eq!(limits::sauce_block_size(1), 128 + 5 + 64);
    assert_eq!(limits::sauce_block_size(255), 128 + 5 + 255 * 64);
    assert_eq!(limits::MIN_COMMENT_BLOCK_SIZE, 69);
}
