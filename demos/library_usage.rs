//! Example: Using chatrecon as a library
//!
//! Parses a small transcript held in memory, then filters, aliases and
//! summarises it and renders JSON Lines.
//!
//! Run with: cargo run --example library_usage

use chatrecon::prelude::*;

const TRANSCRIPT: &str = "[01/02/2023, 09:00:00] Alice created group Friends
[01/02/2023, 09:00:01] Alice added Bob
[01/02/2023, 09:15:00] Bob: Morning all!
Anyone up for lunch?
[01/02/2023, 09:16:00] Alice: hahaha yes
[01/02/2023, 20:00:00] \u{200E}Bob: \u{200E}image omitted
[02/02/2023, 08:30:00] Bob left
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatrecon Library Usage Examples ===\n");

    // Example 1: Parse a transcript held in memory
    println!("1. Parsed records:");
    let messages = TranscriptParser::new().parse_str(TRANSCRIPT)?;

    for msg in &messages {
        println!(
            "   {} {:<8} {:<14} {:?}",
            msg.timestamp().format("%d/%m %H:%M"),
            msg.user().unwrap_or("-"),
            msg.action().map_or("unknown", ActionKind::as_str),
            msg.content()
        );
    }

    // Example 2: Stream records one at a time
    println!("\n2. Streaming with progress:");
    let mut iter = TranscriptParser::new().stream_reader(TRANSCRIPT.as_bytes());
    let chats = iter
        .by_ref()
        .filter_map(std::result::Result::ok)
        .filter(Message::is_chat)
        .count();
    println!("   {} chat messages in {} lines", chats, iter.lines_processed());

    // Example 3: Filter by user
    println!("\n3. Filtering by user (bob, any case):");
    let config = FilterConfig::new().with_user("bob".to_string());
    for msg in apply_filters(messages.clone(), &config) {
        println!("   {:?}", msg.content());
    }

    // Example 4: Aliases and statistics
    println!("\n4. Statistics with aliases:");
    let aliases = UserAliases::new().with_alias("Bob", "Robert");
    let stats = ChatStats::from_messages(&messages, &aliases);
    for (name, user) in &stats.users {
        println!(
            "   {:<8} total {}, laughs {:.0}%",
            name,
            user.total,
            user.share(ContentKind::Laugh) * 100.0
        );
    }

    // Example 5: Feature rows
    println!("\n5. Feature rows:");
    for row in messages.iter().map(|m| MessageFeatures::extract(m, &aliases)) {
        println!(
            "   {} {:02}:{:02} {:<8} msg={} laugh={} image={} action={}",
            row.date,
            row.hour,
            row.minute,
            row.username.as_deref().unwrap_or("-"),
            row.message_count,
            row.laugh_count,
            row.image_count,
            row.action_count
        );
    }

    // Example 6: JSON Lines output
    println!("\n6. JSON Lines:");
    let jsonl = to_jsonl(&messages, &OutputConfig::all())?;
    print!("{jsonl}");

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}
