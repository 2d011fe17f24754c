// SPDX-License-Identifier: MPL-2.0
//! Scrub-bar interaction protocol.
//!
//! Three pointer interactions share the bar without interfering:
//!
//! - click: seek to the clicked fraction once
//! - drag: press starts a drag; every move (tracked window-wide) seeks live
//!   and updates the preview; release ends it
//! - hover: moving over the bar shows a time preview and never seeks
//!
//! Drag and hover are tracked separately. [`ScrubBar`] only computes
//! positions; the lesson player decides what to do with them.

use crate::application::port::MediaElement;
use crate::config::SCRUB_TOOLTIP_MARGIN_PX;

/// Horizontal placement of the scrub bar, in the host's pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    pub left: f32,
    pub width: f32,
}

impl BarGeometry {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Fraction of the bar under pointer `x`, clamped to `[0, 1]`.
    ///
    /// A zero-width bar always yields 0.
    #[must_use]
    pub fn fraction_at(&self, x: f32) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 {
            return 0.0;
        }
        f64::from((x - self.left) / self.width).clamp(0.0, 1.0)
    }

    /// Tooltip x offset from the bar's left edge.
    ///
    /// Follows the pointer but stays `SCRUB_TOOLTIP_MARGIN_PX` inside both
    /// edges; bars too narrow for both margins centre it.
    #[must_use]
    pub fn tooltip_x(&self, x: f32) -> f32 {
        let margin = SCRUB_TOOLTIP_MARGIN_PX;
        if self.width < 2.0 * margin {
            return self.width.max(0.0) / 2.0;
        }
        (x - self.left).clamp(margin, self.width - margin)
    }
}

/// Time preview shown above the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverPreview {
    pub time_secs: f64,
    pub tooltip_x: f32,
}

/// Proof that window-wide pointer tracking is attached.
///
/// Obtained from [`DragCapture::acquire`] and consumed by
/// [`DragCapture::release`], so every capture is released exactly once.
#[derive(Debug)]
#[must_use = "a drag capture must be released"]
pub struct DragCapture {
    _private: (),
}

impl DragCapture {
    /// Attaches global pointer tracking and disables text selection.
    pub fn acquire<M: MediaElement + ?Sized>(media: &mut M) -> Self {
        media.capture_pointer();
        Self { _private: () }
    }

    /// Detaches global pointer tracking and restores text selection.
    pub fn release<M: MediaElement + ?Sized>(self, media: &mut M) {
        media.release_pointer();
    }
}

/// Pointer state of the scrub bar.
#[derive(Debug, Default)]
pub struct ScrubBar {
    drag: Option<DragCapture>,
    pointer_over: bool,
    preview: Option<HoverPreview>,
}

impl ScrubBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Last computed preview, kept while hovering or dragging.
    #[must_use]
    pub fn preview(&self) -> Option<HoverPreview> {
        self.preview
    }

    /// Whether the time tooltip should be drawn.
    #[must_use]
    pub fn tooltip_visible(&self) -> bool {
        (self.pointer_over || self.is_dragging()) && self.preview.is_some()
    }

    pub fn pointer_entered(&mut self) {
        self.pointer_over = true;
    }

    pub fn pointer_left(&mut self) {
        self.pointer_over = false;
        if !self.is_dragging() {
            self.preview = None;
        }
    }

    /// Updates the preview for pointer `x` and returns the time under it.
    pub fn track(&mut self, x: f32, bar: BarGeometry, duration_secs: f64) -> f64 {
        let time_secs = bar.fraction_at(x) * duration_secs;
        self.preview = Some(HoverPreview {
            time_secs,
            tooltip_x: bar.tooltip_x(x),
        });
        time_secs
    }

    /// Starts a drag, acquiring pointer capture if not already held.
    pub fn begin_drag<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        if self.drag.is_none() {
            self.drag = Some(DragCapture::acquire(media));
        }
    }

    /// Ends the drag, releasing pointer capture. Returns whether a drag was
    /// in progress.
    pub fn end_drag<M: MediaElement + ?Sized>(&mut self, media: &mut M) -> bool {
        match self.drag.take() {
            Some(capture) => {
                capture.release(media);
                if !self.pointer_over {
                    self.preview = None;
                }
                true
            }
            None => false,
        }
    }

    /// Releases any capture and forgets all pointer state.
    pub fn reset<M: MediaElement + ?Sized>(&mut self, media: &mut M) {
        self.end_drag(media);
        self.pointer_over = false;
        self.preview = None;
    }
}
