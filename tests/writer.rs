use saucery::{
    binary, limits, reader, writer, MediaType, SauceBlockBuilder, SauceDataType, SauceDate,
    SauceField,
};

fn acid_block() -> saucery::SauceBlock {
    let mut block = SauceBlockBuilder::default()
        .title("ACiD 1994 Member/Board Listing")
        .unwrap()
        .group("ACiD Productions")
        .unwrap()
        .date(SauceDate::new(1994, 8, 31).unwrap())
        .file_size(8900)
        .media_type(MediaType::Ansi)
        .t_info_1(80)
        .t_info_2(97)
        .t_info_3(16)
        .build();
    block.add_comments([
        "test notes",
        "second line",
        "more test",
        "",
        "after a blank line",
    ]);
    block
}

#[test]
fn write_into_plain_buffer_inserts_eof() {
    let buf = [1u8, 2, 3, 4];
    let out = writer::write(&buf, &acid_block());

    assert_eq!(out.len(), 4 + limits::sauce_block_size(5) + 1);
    assert_eq!(&out[..4], &buf);
    assert_eq!(out[4], 0x1A);

    let decoded = reader::sauce(&out).unwrap();
    assert_eq!(decoded.title, "ACiD 1994 Member/Board Listing");
    assert_eq!(decoded.comments.len(), 5);
}

#[test]
fn remove_comments_rewrites_the_count_field() {
    let tagged = writer::write(&[1u8, 2, 3, 4], &acid_block());
    let stripped = writer::remove_comments(&tagged);

    assert_eq!(tagged.len() - stripped.len(), 5 + 64 * 5);
    assert!(reader::has_sauce(&stripped));
    assert!(!reader::has_comments(&stripped));
    assert_eq!(
        binary::read_field(&stripped, SauceField::CommentLines).unwrap(),
        &[0]
    );
}

#[test]
fn remove_sauce_keeps_the_eof_sentinel() {
    let tagged = writer::write(&[1u8, 2, 3, 4], &acid_block());
    assert_eq!(writer::remove_sauce(&tagged), &[1, 2, 3, 4, 0x1A]);
}

#[test]
fn write_is_transparent() {
    let block = acid_block();
    let buf = b"some payload bytes";
    let decoded = reader::sauce(&writer::write(buf, &block)).unwrap();
    assert_eq!(decoded, block);
}

#[test]
fn rewrite_replaces_the_whole_block() {
    let first = SauceBlockBuilder::default()
        .title("first")
        .unwrap()
        .comment("stale comment")
        .unwrap()
        .build();
    let second = SauceBlockBuilder::default()
        .title("second")
        .unwrap()
        .build();

    let buf = b"payload".to_vec();
    let once = writer::write(&writer::write(&buf, &first), &second);
    let direct = writer::write(&buf, &second);
    assert_eq!(once, direct);

    let decoded = reader::sauce(&once).unwrap();
    assert_eq!(decoded.title, "second");
    assert!(decoded.comments.is_empty());
}

#[test]
fn existing_eof_is_not_duplicated() {
    let out = writer::write(b"data\x1a", &SauceBlockBuilder::default().build());
    assert_eq!(&out[..5], b"data\x1a");
    assert_ne!(out[5], 0x1A);
}

#[test]
fn remove_on_plain_buffer_is_a_no_op() {
    let buf = b"no sauce here".to_vec();
    assert_eq!(writer::remove_sauce(&buf), &buf[..]);
    assert_eq!(&*writer::remove_comments(&buf), &buf[..]);
}

#[test]
fn remove_then_test() {
    let tagged = writer::write(b"payload", &acid_block());
    let stripped = writer::remove_sauce(&tagged);
    assert!(!reader::has_sauce(stripped));
    assert!(stripped.len() <= tagged.len());
}

#[test]
fn remove_comments_preserves_record_presence() {
    let without = SauceBlockBuilder::default().title("plain").unwrap().build();
    for block in [acid_block(), without] {
        let tagged = writer::write(b"payload", &block);
        let stripped = writer::remove_comments(&tagged);
        assert_eq!(reader::has_sauce(&stripped), reader::has_sauce(&tagged));
        assert!(!reader::has_comments(&stripped));
    }
}

#[test]
fn stale_comment_pointer_reads_as_no_comments() {
    // Record promises two lines, only one precedes it (truncated file).
    let mut buf = b"COMNT".to_vec();
    let mut line = b"orphaned line".to_vec();
    line.resize(64, b' ');
    buf.extend_from_slice(&line);

    let record_only = writer::write(&[], &{
        let mut block = acid_block();
        block.clear_comments();
        block
    });
    let (_, record) = binary::split_record(&record_only);
    let mut record = record.to_vec();
    record[SauceField::CommentLines.offset()] = 2;
    buf.extend_from_slice(&record);

    assert!(reader::has_sauce(&buf));
    assert!(!reader::has_comments(&buf));
    let decoded = reader::sauce(&buf).unwrap();
    assert_eq!(decoded.comments, Vec::<String>::new());
}

#[test]
fn repair_zeroes_a_stale_count_without_a_block() {
    let mut tagged = writer::write(b"payload", &{
        let mut block = acid_block();
        block.clear_comments();
        block
    });
    let count_pos = tagged.len() - 128 + SauceField::CommentLines.offset();
    tagged[count_pos] = 9; // stale pointer, no block exists

    let repaired = writer::remove_comments(&tagged);
    assert_eq!(repaired.len(), tagged.len());
    assert_eq!(
        binary::read_field(&repaired, SauceField::CommentLines).unwrap(),
        &[0]
    );
}

#[test]
fn file_size_limit_round_trips() {
    let block = SauceBlockBuilder::default()
        .file_size(limits::FILE_SIZE_LIMIT as u32)
        .data_type(SauceDataType::Character)
        .build();
    let decoded = reader::sauce(&writer::write(&[], &block)).unwrap();
    assert_eq!(decoded.media.file_size, u32::MAX);
}
