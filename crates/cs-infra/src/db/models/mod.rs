pub mod clip_data_row;
pub mod clip_row;

pub use clip_data_row::{ClipDataRow, NewClipDataRow};
pub use clip_row::{ClipRow, NewClipRow};
