mod bootstrap;
mod cli;
mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cs_app::usecases::ReorderAction;
use cs_core::ports::ClipboardSourcePort;
use cs_platform::{ClipboardRsSource, MemoryClipboard};

use crate::bootstrap::Runtime;
use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        let message = format!("{e:#}");
        tracing::error!(error = %message, "command failed");
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let dirs = bootstrap::resolve_dirs(cli.data_dir.as_deref())?;
    bootstrap::tracing::init_tracing_subscriber(&dirs.log_dir(), cli.verbose)?;

    let clipboard: Arc<dyn ClipboardSourcePort> = match &cli.cmd {
        Command::Capture(_) => Arc::new(ClipboardRsSource::new()?),
        Command::Add(args) => Arc::new(MemoryClipboard::with_text(&args.text)),
        _ => Arc::new(MemoryClipboard::new()),
    };
    let runtime = Runtime::new(&dirs, cli.config.as_deref(), clipboard)?;

    match cli.cmd {
        Command::Capture(args) => commands::capture(&runtime, args),
        Command::Add(args) => commands::add(&runtime, args),
        Command::List(args) => commands::list(&runtime, args),
        Command::Show(args) => commands::show(&runtime, args),
        Command::MoveUp(arg) => commands::reorder(&runtime, arg.id, ReorderAction::MoveUp),
        Command::PinTop(arg) => commands::reorder(&runtime, arg.id, ReorderAction::PinTop),
        Command::PinBottom(arg) => commands::reorder(&runtime, arg.id, ReorderAction::PinBottom),
        Command::Unpin(arg) => commands::reorder(&runtime, arg.id, ReorderAction::Unpin),
        Command::Edit(args) => commands::edit(&runtime, args),
        Command::Set(args) => commands::set(&runtime, args),
        Command::Export(args) => commands::export(&runtime, args),
        Command::Renormalize(args) => commands::renormalize(&runtime, args),
    }
}
