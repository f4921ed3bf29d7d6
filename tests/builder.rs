use saucery::{reader, writer, MediaType, SauceBlockBuilder, SauceError};

#[test]
fn length_limits_are_enforced() {
    assert!(matches!(
        SauceBlockBuilder::default().title("x".repeat(36)),
        Err(SauceError::TitleTooLong(36))
    ));
    assert!(matches!(
        SauceBlockBuilder::default().author("x".repeat(21)),
        Err(SauceError::AuthorTooLong(21))
    ));
    assert!(matches!(
        SauceBlockBuilder::default().group("x".repeat(21)),
        Err(SauceError::GroupTooLong(21))
    ));
    assert!(matches!(
        SauceBlockBuilder::default().info_string("x".repeat(23)),
        Err(SauceError::InfoStringTooLong(23))
    ));
    assert!(matches!(
        SauceBlockBuilder::default().comment("x".repeat(65)),
        Err(SauceError::CommentTooLong(65))
    ));
}

#[test]
fn limits_are_on_stored_bytes_not_characters() {
    // 'é' is two UTF-8 bytes but one CP437 byte.
    let title = "é".repeat(35);
    assert!(SauceBlockBuilder::default().title(title).is_ok());
}

#[test]
fn comment_limit() {
    let mut builder = SauceBlockBuilder::default();
    for i in 0..255 {
        builder = builder.comment(format!("Comment {i}")).unwrap();
    }
    assert!(matches!(
        builder.comment("one too many"),
        Err(SauceError::CommentLimitExceeded)
    ));
}

#[test]
fn unmappable_code_points_are_dropped_on_encode() {
    let block = SauceBlockBuilder::default()
        .title("snow\u{2603}man") // no CP437 snowman
        .unwrap()
        .build();
    let decoded = reader::sauce(&writer::write(&[], &block)).unwrap();
    assert_eq!(decoded.title, "snowman");
}

#[test]
fn cp437_text_survives_the_round_trip() {
    let block = SauceBlockBuilder::default()
        .title("Müller ░▒▓")
        .unwrap()
        .group("Café")
        .unwrap()
        .build();
    let decoded = reader::sauce(&writer::write(&[], &block)).unwrap();
    assert_eq!(decoded.title, "Müller ░▒▓");
    assert_eq!(decoded.group, "Café");
}

#[test]
fn media_type_sets_the_pair() {
    let block = SauceBlockBuilder::default()
        .media_type(MediaType::S3m)
        .build();
    assert_eq!(block.media.data_type, saucery::SauceDataType::Audio);
    assert_eq!(block.media.file_type, 3);
    assert_eq!(block.media_type(), MediaType::S3m);
}

#[test]
fn block_edits() {
    let mut block = SauceBlockBuilder::default()
        .comment("second")
        .unwrap()
        .build();
    block.prepend_comment("first");
    block.add_comments(["third"]);
    assert_eq!(block.comments, ["first", "second", "third"]);
    assert_eq!(block.comment_lines(), 3);
    assert_eq!(block.formatted_comments("\n"), "first\nsecond\nthird");

    block.clear_comments();
    assert_eq!(block.comment_lines(), 0);

    let edited = block.to_builder().title("edited").unwrap().build();
    assert_eq!(edited.title, "edited");
}

#[test]
fn derived_count_is_clamped_to_255() {
    let mut block = SauceBlockBuilder::default().build();
    block.add_comments((0..300).map(|i| i.to_string()));
    assert_eq!(block.comment_lines(), 255);

    // The encoder only emits the lines the count byte can address.
    let encoded = saucery::record::encode_comments(&block);
    assert_eq!(encoded.len(), 5 + 255 * 64);
}
