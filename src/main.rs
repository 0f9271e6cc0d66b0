//! # chatrecon CLI
//!
//! Command-line interface for the chatrecon library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatrecon::cli::Args;
use chatrecon::core::{ChatStats, FilterConfig, MessageFeatures, UserAliases, hour_name};
use chatrecon::format::{OutputFormat, write_features_to_format, write_to_format};
use chatrecon::parser::TranscriptParser;
use chatrecon::streaming::MessageIterator;
use chatrecon::{ChatreconError, ContentKind, Message};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ChatreconError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();

    // Print header
    println!("📦 chatrecon v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    if let Some(rows) = args.rows {
        println!("✂️  Rows:    {}", rows);
    }

    let filter_config = build_filter(args)?;
    let features_format = match args.features {
        Some(ref path) => {
            println!("🧮 Features: {}", path);
            Some(OutputFormat::from_path(path)?)
        }
        None => None,
    };
    let aliases = match args.aliases {
        Some(ref path) => {
            println!("🏷️  Aliases: {}", path);
            UserAliases::from_path(path)?
        }
        None => UserAliases::new(),
    };

    println!();

    let parser = TranscriptParser::with_config(args.parser_config());
    println!("⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let (messages, total) = parse(&parser, Path::new(&args.input), &filter_config, &aliases)?;
    println!(
        "   Found {} messages ({:.2}s)",
        total,
        parse_start.elapsed().as_secs_f64()
    );
    if filter_config.is_active() {
        println!("🔍 {} messages after filtering", messages.len());
    }

    println!("💾 Writing {}...", format);
    let write_start = Instant::now();
    write_to_format(&messages, &output_path, format, &args.output_config())?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    if let (Some(path), Some(features_format)) = (&args.features, features_format) {
        // Users are already resolved, so rows are extracted without a table.
        let rows: Vec<MessageFeatures> = messages
            .iter()
            .map(|msg| MessageFeatures::extract(msg, &UserAliases::new()))
            .collect();
        write_features_to_format(&rows, path, features_format)?;
        println!("🧮 Wrote {} feature rows to {}", rows.len(), path);
    }

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    if args.stats {
        print_stats(&ChatStats::from_messages(&messages, &UserAliases::new()));
    }

    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    println!(
        "   Throughput:  {:.0} messages/sec",
        total as f64 / total_time.as_secs_f64()
    );

    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, ChatreconError> {
    let mut filter_config = FilterConfig::new();

    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref from) = args.from {
        filter_config = filter_config.with_user(from.clone());
        println!("👤 From:    {}", from);
    }

    if let Some(action) = args.action {
        filter_config = filter_config.with_action(action);
        println!("🎯 Action:  {}", action);
    }

    Ok(filter_config)
}

/// Streams the transcript, resolving user names and keeping only messages
/// that pass the filter.
///
/// Returns the kept messages and the number of messages read.
fn parse(
    parser: &TranscriptParser,
    path: &Path,
    filter_config: &FilterConfig,
    aliases: &UserAliases,
) -> Result<(Vec<Message>, usize), ChatreconError> {
    let mut iter = parser.stream(path)?;
    let mut kept = Vec::new();
    let mut total = 0;

    for result in iter.by_ref() {
        let msg = aliases.apply(result?);
        total += 1;
        if filter_config.matches(&msg) {
            kept.push(msg);
        }
    }

    tracing::info!(
        messages = total,
        lines = iter.lines_processed(),
        bytes = iter.bytes_processed(),
        "finished reading transcript"
    );
    Ok((kept, total))
}

fn print_stats(stats: &ChatStats) {
    println!();
    println!("📊 Statistics:");
    println!("   Records:   {}", stats.total);
    if let (Some(first), Some(last)) = (stats.first, stats.last) {
        println!(
            "   Period:    {} to {}",
            first.format("%Y-%m-%d"),
            last.format("%Y-%m-%d")
        );
    }
    if let Some(hour) = stats.busiest_hour() {
        println!("   Busiest:   {}", hour_name(hour));
    }

    let columns = [
        ContentKind::Text,
        ContentKind::Laugh,
        ContentKind::Image,
        ContentKind::Video,
        ContentKind::Audio,
    ];

    println!();
    print!("   {:<24} {:>7}", "user", "total");
    for kind in columns {
        print!(" {:>6}", kind.as_str());
    }
    println!();

    for (name, user) in &stats.users {
        print!("   {:<24} {:>7}", name, user.total);
        for kind in columns {
            print!(" {:>5.0}%", user.share(kind) * 100.0);
        }
        println!();
    }
}
