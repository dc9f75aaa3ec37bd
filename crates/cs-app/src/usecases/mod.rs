//! Use cases of the clip history.
//!
//! ```text
//! [Clipboard]
//!         ↓
//! CaptureClipUseCase        → uncommitted Clip
//!         ↓
//! CommitClipListUseCase     → latest keys, then CommitClipUseCase per clip
//!         ↓                   (insert or duplicate promotion)
//! ---------------------------------
//! ReorderClipUseCase        → move up / pin / unpin, one key per call
//! RenormalizeOrderUseCase   → maintenance, out of band
//! ---------------------------------
//! ListClipsUseCase / LoadClipUseCase / ExportClipTextUseCase → read side
//! SaveEditedClipUseCase / UpdateClipPropertiesUseCase        → edits
//! ```

pub mod capture_clip;
pub mod commit_clip;
pub mod commit_clip_list;
pub mod export_clip_text;
pub mod list_clips;
pub mod load_clip;
pub mod renormalize_order;
pub mod reorder_clip;
pub mod save_edited_clip;
pub mod update_clip_properties;

pub use capture_clip::CaptureClipUseCase;
pub use commit_clip::{CommitClipUseCase, CommitOutcome, DedupSession};
pub use commit_clip_list::CommitClipListUseCase;
pub use export_clip_text::ExportClipTextUseCase;
pub use list_clips::ListClipsUseCase;
pub use load_clip::LoadClipUseCase;
pub use renormalize_order::RenormalizeOrderUseCase;
pub use reorder_clip::{ReorderAction, ReorderClipUseCase};
pub use save_edited_clip::SaveEditedClipUseCase;
pub use update_clip_properties::{ClipPropertiesPatch, UpdateClipPropertiesUseCase};
