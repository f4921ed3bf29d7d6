use saucery::{binary, util, writer, SauceBlockBuilder, SauceError, SauceField};

fn block_with_comments(lines: &[&str]) -> saucery::SauceBlock {
    let mut block = SauceBlockBuilder::default().title("split me").unwrap().build();
    block.add_comments(lines.iter().copied());
    block
}

fn tagged_buffer(lines: &[&str]) -> Vec<u8> {
    writer::write(b"contents bytes", &block_with_comments(lines))
}

#[test]
fn split_all_is_additive() {
    for lines in [&[][..], &["one"][..], &["one", "two", "three"][..]] {
        let buf = tagged_buffer(lines);
        let (contents, record, comments) = binary::split_all(&buf);
        assert_eq!(contents.len() + record.len() + comments.len(), buf.len());
        assert_eq!(record.len(), 128);
        if lines.is_empty() {
            assert!(comments.is_empty());
        } else {
            assert_eq!(comments.len(), 5 + 64 * lines.len());
        }
    }
}

#[test]
fn split_on_plain_buffer_returns_everything_as_contents() {
    let buf = b"just data";
    let (contents, record, comments) = binary::split_all(buf);
    assert_eq!(contents, buf);
    assert!(record.is_empty());
    assert!(comments.is_empty());
}

#[test]
fn record_predicate() {
    let buf = tagged_buffer(&[]);
    let (_, record) = binary::split_record(&buf);
    assert!(binary::is_record(record));
    assert!(!binary::is_record(&record[..64]));

    // Reserved-but-empty trailer.
    let mut empty = b"SAUCE".to_vec();
    empty.extend_from_slice(&[0u8; 123]);
    assert!(!binary::is_record(&empty));
}

#[test]
fn comment_block_predicates() {
    let mut block = b"COMNT".to_vec();
    block.extend_from_slice(&[b' '; 64]);
    assert!(binary::is_comment_block(&block));
    assert!(binary::is_comment_fragment(&block));

    // Ragged length: fragment yes, block no.
    block.extend_from_slice(&[b' '; 10]);
    assert!(!binary::is_comment_block(&block));
    assert!(binary::is_comment_fragment(&block));

    assert!(!binary::is_comment_fragment(b"COMNT"));
}

#[test]
fn split_with_explicit_count() {
    let buf = tagged_buffer(&["one", "two"]);
    let (_, record, comments) = binary::split_with(&buf, 2);
    assert_eq!(record.len(), 128);
    assert_eq!(comments.len(), 5 + 128);

    // A wrong count falls back to the record-only split.
    let (contents, record, comments) = binary::split_with(&buf, 7);
    assert_eq!(record.len(), 128);
    assert!(comments.is_empty());
    assert_eq!(contents.len(), buf.len() - 128);
}

#[test]
fn field_level_read_and_write() {
    let buf = tagged_buffer(&[]);
    assert_eq!(
        binary::read_field(&buf, SauceField::Id).unwrap(),
        b"SAUCE"
    );
    assert_eq!(
        binary::read_field(&buf, SauceField::TInfo1).unwrap(),
        &[0, 0]
    );

    let updated = binary::write_field(&buf, SauceField::TInfo1, &80u16.to_le_bytes()).unwrap();
    assert_eq!(
        binary::read_field(&updated, SauceField::TInfo1).unwrap(),
        &80u16.to_le_bytes()
    );
    assert_eq!(updated.len(), buf.len());

    assert!(matches!(
        binary::write_field(&buf, SauceField::TInfo1, &[1]),
        Err(SauceError::InvalidLength { .. })
    ));
    assert!(matches!(
        binary::read_field(b"no sauce", SauceField::TInfo1),
        Err(SauceError::NoSauce)
    ));
}

#[test]
fn contents_eof_termination() {
    let buf = tagged_buffer(&[]);
    // The writer already terminated the contents.
    assert!(matches!(
        binary::contents(&buf, true),
        std::borrow::Cow::Borrowed(_)
    ));

    let plain = b"abc";
    let terminated = binary::contents(plain, true);
    assert_eq!(&*terminated, b"abc\x1a");
    assert_eq!(binary::contents(plain, false).as_ref(), plain);

    assert!(binary::eof_terminated(b"abc\x1a"));
    assert!(!binary::eof_terminated(b"abc"));
}

#[test]
fn clean_contents_stops_at_the_first_sentinel() {
    let buf = writer::write(b"visible\x1ahidden", &block_with_comments(&[]));
    assert_eq!(binary::clean_contents(&buf), b"visible");

    let no_eof = b"all visible";
    assert_eq!(binary::clean_contents(no_eof), no_eof);
}

#[test]
fn match_record_respects_eof_adjacency() {
    let buf = tagged_buffer(&[]);
    let record_start = buf.len() - 128;
    assert_eq!(binary::match_record(&buf, false), Some((record_start, 128)));
    // The writer inserted a sentinel, so the adjacency match holds too
    // and reports the same position and length.
    assert_eq!(binary::match_record(&buf, true), Some((record_start, 128)));

    // Strip the sentinel: plain match still works, adjacency match fails.
    let mut no_eof = buf[..record_start - 1].to_vec();
    no_eof.extend_from_slice(&buf[record_start..]);
    assert!(binary::match_record(&no_eof, false).is_some());
    assert!(binary::match_record(&no_eof, true).is_none());
}

#[test]
fn match_comment_block_needs_a_record() {
    let buf = tagged_buffer(&["one"]);
    let comment_start = buf.len() - 128 - 69;
    assert_eq!(
        binary::match_comment_block(&buf, false),
        Some((comment_start, 69))
    );
    assert_eq!(
        binary::match_comment_block(&buf, true),
        Some((comment_start, 69))
    );

    // Without the record there is no terminator to define the block.
    let headless = &buf[..buf.len() - 128];
    assert!(binary::match_comment_block(headless, false).is_none());
    // The fragment matcher still finds the orphaned lines.
    assert_eq!(
        binary::match_comment_fragment(headless, false),
        Some((comment_start, 69))
    );
}

#[test]
fn structural_count_disagrees_with_a_lying_field() {
    // Two real lines, count field claims three.
    let buf = tagged_buffer(&["one", "two"]);
    let lying = binary::write_field(&buf, SauceField::CommentLines, &[3]).unwrap();

    assert_eq!(binary::comment_lines_field(&lying).unwrap(), 3);
    assert_eq!(binary::count_comment_lines(&lying).unwrap(), 2);

    assert!(matches!(
        binary::count_comment_lines(&tagged_buffer(&[])),
        Err(SauceError::NoComments)
    ));
}

#[test]
fn replace_slice_never_grows_the_buffer() {
    assert_eq!(util::replace_slice(b"abcd", 1, b"XY").unwrap(), b"aXYd");
    assert!(matches!(
        util::replace_slice(b"abcd", 3, b"XY"),
        Err(SauceError::InvalidLength { .. })
    ));
    assert!(matches!(
        util::replace_slice(b"abcd", 5, b""),
        Err(SauceError::InvalidLength { .. })
    ));
}

#[test]
fn padding_helpers() {
    assert_eq!(util::pad_trailing(b"ab", 5, b" "), b"ab   ");
    assert_eq!(util::pad_trailing(b"abcdef", 3, b" "), b"abcdef");
    assert_eq!(util::pad_leading(b"ab", 4, b"0"), b"00ab");
    // A multi-byte fill lands truncated at the boundary.
    assert_eq!(util::pad_trailing(b"a", 4, b"xy"), b"axyx");
    assert_eq!(util::pad_truncate(b"abcdef", 4, b" "), b"abcd");
    assert_eq!(util::pad_truncate(b"a", 4, b"xy"), b"axyx");
}
