//! # cs-core
//!
//! Core domain models and business logic for ClipStack.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the clip data model, the content checksum, order-key arithmetic and the
//! port traits implemented by the infrastructure and platform layers.

pub mod clip;
pub mod config;
pub mod error;
pub mod ids;
pub mod order;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clip::{Checksum, Clip, ClipFormat, ClipFormatSet, ClipHeader, ClipList, FormatId};
pub use config::{CaptureOptions, ClipConfig, DedupMode};
pub use error::{CaptureError, ClipError};
pub use ids::{ClipId, DataId};
pub use order::{OrderField, OrderKeys, OrderScope};
