//! # wa-export CLI
//!
//! Command-line interface for the wa-export library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wa_export::ExportError;
use wa_export::bundle::ExportBundle;
use wa_export::cli::Args;
use wa_export::core::ExportStats;
use wa_export::format::{OutputFormat, write_to_format};
use wa_export::message::MessageKind;
use wa_export::parser::WhatsAppParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays a clean report.
fn init_tracing(args: &Args) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), ExportError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let format: OutputFormat = args.format.into();
    let parser_config = args.parser_config();

    println!("📦 wa-export v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", format);
    if args.keep_system {
        println!("🔔 Keeping system messages");
    }
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let (messages, stats) = if args.input.is_dir() {
        let export = ExportBundle::from_dir(&args.input)?.parse(&parser_config);
        let stats = ExportStats::from_messages(&export.messages)
            .with_media(&export.messages, &export.media);
        for name in export.missing_media() {
            info!(file = name, "attachment not found in export folder");
        }
        (export.messages, stats)
    } else {
        let messages = WhatsAppParser::with_config(parser_config).parse(&args.input)?;
        let stats = ExportStats::from_messages(&messages);
        (messages, stats)
    };
    println!(
        "   Found {} messages ({:.2}s)",
        messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", format);
    write_to_format(&messages, &output_path, format, &args.output_config())?;

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.total);
    for kind in MessageKind::all() {
        let count = stats.count(*kind);
        if count > 0 {
            println!("   {:<10} {}", format!("{}:", kind), count);
        }
    }
    if stats.forwarded > 0 {
        println!("   Forwarded: {}", stats.forwarded);
    }
    if let Some(missing) = stats.missing_media() {
        println!(
            "   Media:     {} of {} attachments found ({} missing)",
            stats.with_attachment - missing,
            stats.with_attachment,
            missing
        );
    }

    println!();
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
