//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cs_core::OrderField;

/// Clipboard history with deduplication and pinning.
#[derive(Debug, Parser)]
#[command(name = "clipstack", version)]
pub struct Cli {
    /// Configuration file (defaults to clipstack.toml in the config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep all data (database, logs) under this directory.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Also log to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Capture the system clipboard into the history.
    Capture(CaptureArgs),

    /// Add text to the history as if it had been copied.
    Add(AddArgs),

    /// List clips, pinned first, newest first.
    List(ListArgs),

    /// Print one clip.
    Show(ShowArgs),

    /// Move a clip above its next-higher neighbour.
    MoveUp(IdArg),

    /// Pin a clip above every pinned clip.
    PinTop(IdArg),

    /// Pin a clip below every pinned clip.
    PinBottom(IdArg),

    /// Unpin a clip.
    Unpin(IdArg),

    /// Replace the text of a clip.
    Edit(EditArgs),

    /// Change clip properties.
    Set(SetArgs),

    /// Write the text of a clip to a file.
    Export(ExportArgs),

    /// Rewrite the order keys of one list to 1..n.
    Renormalize(RenormalizeArgs),
}

#[derive(Debug, Args)]
pub struct IdArg {
    pub id: i64,
}

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Formats to capture, in priority order (defaults to the configured list).
    #[arg(long = "format", value_name = "NAME")]
    pub formats: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub text: String,

    /// Add under this group clip.
    #[arg(long)]
    pub parent: Option<i64>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// List the children of this group clip instead of the top level.
    #[arg(long)]
    pub parent: Option<i64>,

    /// Maximum number of clips, 0 = all.
    #[arg(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: i64,

    /// Load only the text formats.
    #[arg(long)]
    pub text_only: bool,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: i64,
    pub text: String,

    /// Keep the stored description.
    #[arg(long)]
    pub keep_description: bool,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    pub id: i64,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub quick_paste: Option<String>,

    #[arg(long)]
    pub shortcut: Option<i32>,

    #[arg(long)]
    pub global_shortcut: Option<bool>,

    #[arg(long)]
    pub dont_auto_delete: Option<bool>,

    /// Move under this group clip.
    #[arg(long, conflicts_with = "top_level")]
    pub parent: Option<i64>,

    /// Move back to the top level.
    #[arg(long)]
    pub top_level: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    pub id: i64,
    pub path: PathBuf,

    /// UTF-8 with byte order mark.
    #[arg(long)]
    pub utf8: bool,

    /// UTF-16LE with byte order mark.
    #[arg(long)]
    pub utf16: bool,

    /// The narrow text payload as stored.
    #[arg(long)]
    pub narrow: bool,
}

#[derive(Debug, Args)]
pub struct RenormalizeArgs {
    #[arg(long, value_enum, default_value_t = FieldArg::Clip)]
    pub field: FieldArg,

    /// Only the children of this group clip.
    #[arg(long)]
    pub parent: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Clip,
    Group,
    Sticky,
    StickyGroup,
}

impl From<FieldArg> for OrderField {
    fn from(value: FieldArg) -> Self {
        match value {
            FieldArg::Clip => OrderField::Clip,
            FieldArg::Group => OrderField::ClipGroup,
            FieldArg::Sticky => OrderField::Sticky,
            FieldArg::StickyGroup => OrderField::StickyGroup,
        }
    }
}
