//! Subcommand handlers. Each one runs a use case and prints its result.

use anyhow::{bail, Result};
use cs_app::usecases::{ClipPropertiesPatch, ReorderAction};
use cs_core::clip::export::TextExportFlags;
use cs_core::clip::text::{encode_narrow, encode_wide};
use cs_core::{CaptureError, Clip, ClipHeader, ClipId, ClipList, FormatId, OrderScope};
use tracing::info;

use crate::bootstrap::Runtime;
use crate::cli::{
    AddArgs, CaptureArgs, EditArgs, ExportArgs, ListArgs, RenormalizeArgs, SetArgs, ShowArgs,
};

/// Capture the clipboard and commit the result with fresh latest keys.
pub fn capture(runtime: &Runtime, args: CaptureArgs) -> Result<()> {
    let priority: Vec<FormatId> = if args.formats.is_empty() {
        runtime.config.capture_formats.clone()
    } else {
        args.formats.into_iter().map(FormatId::from).collect()
    };

    let clip = match runtime.usecases().capture_clip().execute(&priority) {
        Ok(clip) => clip,
        Err(
            e @ (CaptureError::PrivacyBlocked
            | CaptureError::NoFormatsCaptured
            | CaptureError::SizeExceeded { .. }),
        ) => {
            println!("nothing saved: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    commit_one(runtime, clip)
}

/// Commit text through the same pipeline as a clipboard capture. The runtime
/// must be wired with a clipboard that holds the text.
pub fn add(runtime: &Runtime, args: AddArgs) -> Result<()> {
    let mut clip = runtime
        .usecases()
        .capture_clip()
        .execute(&[FormatId::unicode_text(), FormatId::text()])?;
    clip.header.parent_id = args.parent.map(ClipId::new);

    commit_one(runtime, clip)
}

fn commit_one(runtime: &Runtime, clip: Clip) -> Result<()> {
    let usecases = runtime.usecases();
    // every command is its own process; pick up where the previous one left off
    let mut session = usecases.commit_clip().resume_session()?;

    let mut list = ClipList::from(vec![clip]);
    let saved = usecases
        .commit_clip_list()
        .execute(&mut list, true, &mut session);
    if saved == 0 {
        bail!("failed to save clip");
    }

    if let Some(clip) = list.iter().next() {
        let id = clip.id().map(|id| id.to_string()).unwrap_or_default();
        info!(clip_id = %id, "clip saved from command line");
        println!("{id}\t{}", first_line(&clip.header.description));
    }
    Ok(())
}

pub fn list(runtime: &Runtime, args: ListArgs) -> Result<()> {
    let headers = runtime
        .usecases()
        .list_clips()
        .execute(args.parent.map(ClipId::new), args.limit)?;

    for header in &headers {
        println!("{}", list_line(header));
    }
    Ok(())
}

pub fn show(runtime: &Runtime, args: ShowArgs) -> Result<()> {
    let clip = runtime
        .usecases()
        .load_clip()
        .execute(ClipId::new(args.id), args.text_only)?;

    println!("{}", list_line(&clip.header));
    println!("checksum: {}", clip.header.checksum);
    for format in clip.formats.iter() {
        println!("  {} ({} bytes)", format.format(), format.len());
    }
    if let Some(text) = clip.text() {
        println!();
        println!("{text}");
    }
    Ok(())
}

pub fn reorder(runtime: &Runtime, id: i64, action: ReorderAction) -> Result<()> {
    let header = runtime
        .usecases()
        .reorder_clip()
        .execute(ClipId::new(id), action)?;
    println!("{}", list_line(&header));
    Ok(())
}

pub fn edit(runtime: &Runtime, args: EditArgs) -> Result<()> {
    let usecases = runtime.usecases();
    let mut clip = usecases.load_clip().execute(ClipId::new(args.id), false)?;

    let max = runtime.config.description_max_length;
    let now = clip.header.created_at_ms;
    clip.add_format(FormatId::unicode_text(), &encode_wide(&args.text), max, now);
    clip.add_format(FormatId::text(), &encode_narrow(&args.text), max, now);

    usecases
        .save_edited_clip()
        .execute(&mut clip, !args.keep_description)?;
    println!("{}", list_line(&clip.header));
    Ok(())
}

pub fn set(runtime: &Runtime, args: SetArgs) -> Result<()> {
    let parent_id = if args.top_level {
        Some(None)
    } else {
        args.parent.map(|p| Some(ClipId::new(p)))
    };
    let patch = ClipPropertiesPatch {
        description: args.description,
        quick_paste: args.quick_paste,
        shortcut: args.shortcut,
        global_shortcut: args.global_shortcut,
        dont_auto_delete: args.dont_auto_delete,
        parent_id,
    };

    let header = runtime
        .usecases()
        .update_clip_properties()
        .execute(ClipId::new(args.id), patch)?;
    println!("{}", list_line(&header));
    Ok(())
}

pub fn export(runtime: &Runtime, args: ExportArgs) -> Result<()> {
    let mut flags = TextExportFlags {
        utf8: args.utf8,
        utf16: args.utf16,
        narrow: args.narrow,
    };
    if flags == TextExportFlags::default() {
        flags.utf8 = true;
    }

    match runtime
        .usecases()
        .export_clip_text()
        .execute(ClipId::new(args.id), &args.path, flags)?
    {
        Some(encoding) => println!("wrote {} ({encoding:?})", args.path.display()),
        None => println!("clip {} has no text in the requested encodings", args.id),
    }
    Ok(())
}

pub fn renormalize(runtime: &Runtime, args: RenormalizeArgs) -> Result<()> {
    let scope = match args.parent {
        Some(parent) => OrderScope::Children(ClipId::new(parent)),
        None => OrderScope::TopLevel,
    };
    let rewritten = runtime
        .usecases()
        .renormalize_order()
        .execute(args.field.into(), scope)?;
    println!("rewrote {rewritten} keys");
    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

fn list_line(header: &ClipHeader) -> String {
    let id = header.id.map(|id| id.to_string()).unwrap_or_default();
    let pin = if header.order.sticky_order.is_some() || header.order.sticky_group_order.is_some() {
        "*"
    } else {
        " "
    };
    format!("{id}\t{pin}\t{}", first_line(&header.description))
}
