use std::sync::Arc;

use cs_core::clip::description::{describe_from_formats, describe_from_text};
use cs_core::ports::{ClipboardSnapshotPort, ClipboardSourcePort, ClockPort};
use cs_core::{CaptureError, CaptureOptions, Clip, ClipFormat, FormatId};
use tracing::{debug, info, info_span, warn};

/// Build an uncommitted [`Clip`] from the live clipboard.
///
/// 从当前剪贴板构建一个尚未持久化的剪贴条目。
///
/// # Behavior / 行为
/// - Abort when the ignore marker format is present
/// - Wait `options.delay` when the delay marker format is present
/// - Resolve the description from wide text, then narrow text; each is fetched once
/// - Walk the priority list: skip unavailable and empty formats, abort the
///   whole capture on a format above the size ceiling
/// - Derive a description from content when no text was found
///
/// Not reentrant: the clipboard stays attached for the duration of the call.
pub struct CaptureClipUseCase {
    source: Arc<dyn ClipboardSourcePort>,
    clock: Arc<dyn ClockPort>,
    options: CaptureOptions,
}

impl CaptureClipUseCase {
    pub fn new(
        source: Arc<dyn ClipboardSourcePort>,
        clock: Arc<dyn ClockPort>,
        options: CaptureOptions,
    ) -> Self {
        Self {
            source,
            clock,
            options,
        }
    }

    /// Capture the formats in `priority`, in order. An empty list captures
    /// only the first format the clipboard offers.
    pub fn execute(&self, priority: &[FormatId]) -> Result<Clip, CaptureError> {
        let span = info_span!("usecase.capture_clip.execute", formats = priority.len());
        let _enter = span.enter();

        if self.source.is_format_available(&self.options.ignore_format_id) {
            info!(marker = %self.options.ignore_format_id, "ignore marker present, not capturing");
            return Err(CaptureError::PrivacyBlocked);
        }

        if self.source.is_format_available(&self.options.delay_format_id) {
            info!(
                marker = %self.options.delay_format_id,
                delay_ms = self.options.delay.as_millis() as u64,
                "delay marker present, waiting before reading"
            );
            std::thread::sleep(self.options.delay);
        }

        let mut clip = Clip::new();
        let description = {
            let snapshot = self.source.attach().map_err(|e| {
                warn!(error = %e, "failed to attach to clipboard");
                CaptureError::SourceUnavailable(format!("{e:#}"))
            })?;

            let mut prefetched = Vec::new();
            let description = self.probe_description(snapshot.as_ref(), &mut prefetched);

            let wanted = if priority.is_empty() {
                snapshot.available_formats().into_iter().take(1).collect()
            } else {
                priority.to_vec()
            };

            for format in wanted {
                self.capture_format(snapshot.as_ref(), &mut clip, format, &mut prefetched)?;
            }
            description
            // snapshot dropped here, releasing the clipboard
        };

        if clip.formats.is_empty() {
            info!("no formats captured");
            return Err(CaptureError::NoFormatsCaptured);
        }

        clip.header.description = description.unwrap_or_else(|| {
            describe_from_formats(&clip.formats, self.options.description_max_length, |f| {
                self.source.format_name(f)
            })
        });
        clip.header.created_at_ms = self.clock.now_ms();
        clip.refresh_checksum();

        info!(
            formats = clip.formats.len(),
            size = clip.formats.total_size(),
            checksum = %clip.header.checksum,
            "captured clip"
        );
        Ok(clip)
    }

    /// Fetch wide text, then narrow text, until one yields a description.
    ///
    /// Fetched payloads are kept in `prefetched` so the format loop reuses
    /// the exact bytes the description came from.
    fn probe_description(
        &self,
        snapshot: &dyn ClipboardSnapshotPort,
        prefetched: &mut Vec<(FormatId, Vec<u8>)>,
    ) -> Option<String> {
        for candidate in [FormatId::unicode_text(), FormatId::text()] {
            if !snapshot.is_format_available(&candidate) {
                continue;
            }
            let bytes = match snapshot.fetch(&candidate) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => continue,
                Err(e) => {
                    warn!(format = %candidate, error = %e, "failed to read text for description");
                    continue;
                }
            };

            let description =
                describe_from_text(&candidate, &bytes, self.options.description_max_length);
            prefetched.push((candidate, bytes));
            if description.is_some() {
                return description;
            }
        }
        None
    }

    fn capture_format(
        &self,
        snapshot: &dyn ClipboardSnapshotPort,
        clip: &mut Clip,
        format: FormatId,
        prefetched: &mut Vec<(FormatId, Vec<u8>)>,
    ) -> Result<(), CaptureError> {
        if clip.formats.contains(&format) {
            return Ok(());
        }
        if !snapshot.is_format_available(&format) {
            debug!(format = %format, "format not available, skipping");
            return Ok(());
        }

        let bytes = match prefetched.iter().position(|(f, _)| *f == format) {
            Some(index) => prefetched.swap_remove(index).1,
            None => match snapshot.fetch(&format) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => {
                    debug!(format = %format, "format vanished before fetch, skipping");
                    return Ok(());
                }
                Err(e) => {
                    warn!(format = %format, error = %e, "failed to fetch format, skipping");
                    return Ok(());
                }
            },
        };

        if bytes.is_empty() {
            info!(format = %format, "format has zero length, skipping");
            return Ok(());
        }

        if self.options.exceeds_max_size(bytes.len()) {
            warn!(
                format = %format,
                size = bytes.len(),
                max = self.options.max_clip_size_bytes,
                "format exceeds size limit, aborting capture"
            );
            return Err(CaptureError::SizeExceeded {
                format,
                size: bytes.len(),
                max: self.options.max_clip_size_bytes,
            });
        }

        debug!(format = %format, size = bytes.len(), "captured format");
        clip.formats.push(ClipFormat::new(format, bytes));
        Ok(())
    }
}
