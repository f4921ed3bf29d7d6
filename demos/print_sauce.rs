use clap::Parser;
use saucery::{reader, SauceError, SlotValue};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Print SAUCE metadata from files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to read SAUCE information from
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Show comments if present
    #[arg(short, long)]
    comments: bool,

    /// Show raw technical details
    #[arg(short = 'r', long)]
    raw: bool,
}

fn main() {
    let args = Args::parse();

    let data = match fs::read(&args.file) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", args.file.display(), err);
            process::exit(1);
        }
    };

    let block = match reader::sauce(&data) {
        Ok(block) => block,
        Err(SauceError::NoSauce) => {
            println!("No SAUCE record found in '{}'", args.file.display());
            process::exit(0);
        }
        Err(err) => {
            eprintln!("Error parsing SAUCE: {}", err);
            process::exit(1);
        }
    };

    let details = block.details();

    println!("SAUCE Information for '{}'", args.file.display());
    println!("{}", "=".repeat(60));

    if !details.title.is_empty() {
        println!("Title:    {}", details.title);
    }
    if !details.author.is_empty() {
        println!("Author:   {}", details.author);
    }
    if !details.group.is_empty() {
        println!("Group:    {}", details.group);
    }
    if let Some(date) = details.date {
        println!("Date:     {}", date);
    }

    println!("Type:     {} ({})", details.media_name, details.data_type);

    if details.file_size > 0 {
        println!("FileSize: {} bytes", details.file_size);
    }

    if !details.slots.is_empty() {
        println!();
        println!("{} Information:", details.media_name);
        for (meaning, value) in &details.slots {
            match value {
                SlotValue::Number(number) => {
                    println!("  {:16} {}", meaning.name(), number);
                }
                SlotValue::Flags(flags) => {
                    println!("  {:16} {:?}", meaning.name(), flags);
                }
                SlotValue::Font(font) => {
                    println!("  {:16} {}", meaning.name(), font);
                }
                SlotValue::Text(text) => {
                    println!("  {:16} {}", meaning.name(), text);
                }
            }
        }
    }

    if args.comments && !details.comments.is_empty() {
        println!();
        println!("Comments ({}):", details.comments.len());
        println!("{}", "-".repeat(40));
        for (i, comment) in details.comments.iter().enumerate() {
            println!("{:3}: {}", i + 1, comment);
        }
    }

    if args.raw {
        println!();
        println!("Raw SAUCE Data:");
        println!("{}", "-".repeat(40));
        println!("DataType:       {}", u8::from(block.media.data_type));
        println!("FileType:       {}", block.media.file_type);
        println!("TInfo1:         {}", block.media.t_info_1);
        println!("TInfo2:         {}", block.media.t_info_2);
        println!("TInfo3:         {}", block.media.t_info_3);
        println!("TInfo4:         {}", block.media.t_info_4);
        println!(
            "TFlags:         0b{:08b} (0x{:02X})",
            block.media.t_flags, block.media.t_flags
        );
        if let Some(info) = &block.media.t_info_s {
            println!("TInfoS:         {:?}", info);
        }
        println!(
            "Block Size:     {} bytes",
            saucery::limits::sauce_block_size(block.comment_lines() as usize)
        );
    }
}
