//! Rubber-band gestures: a transient preview that follows the pointer from a
//! first click (the anchor) until a second click commits the operation.
//!
//! The preview animates on a dedicated thread so the UI thread stays free to
//! receive the releasing click. The two threads share exactly two things: a
//! one-shot [`CancelFlag`] written once by the UI thread, and the latest
//! pointer position in a [`SharedPointer`]. The preview thread only ever
//! touches the [`PreviewSurface`].

mod kind;
mod surface;

pub use kind::RubberBandKind;
pub use surface::{OverlaySurface, PreviewSurface, PrimitiveId};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use egui::Pos2;

use crate::command::Command;
use crate::state::SharedStyle;

/// Default time one preview frame stays on screen
pub const DEFAULT_PREVIEW_INTERVAL: Duration = Duration::from_millis(100);

/// One-shot stop signal for a preview loop
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Latest pointer position, packed so reads and writes never block
#[derive(Debug)]
pub struct SharedPointer(AtomicU64);

impl SharedPointer {
    pub fn new(pos: Pos2) -> Self {
        Self(AtomicU64::new(pack(pos)))
    }

    pub fn store(&self, pos: Pos2) {
        self.0.store(pack(pos), Ordering::Relaxed);
    }

    pub fn load(&self) -> Pos2 {
        unpack(self.0.load(Ordering::Relaxed))
    }
}

fn pack(pos: Pos2) -> u64 {
    (u64::from(pos.x.to_bits()) << 32) | u64::from(pos.y.to_bits())
}

fn unpack(packed: u64) -> Pos2 {
    Pos2::new(f32::from_bits((packed >> 32) as u32), f32::from_bits(packed as u32))
}

/// Counts reported by a finished preview loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewStats {
    pub drawn: usize,
    pub erased: usize,
}

/// A gesture between its anchoring click and its releasing click
pub struct Gesture {
    kind: RubberBandKind,
    anchor: Pos2,
    pointer: Arc<SharedPointer>,
    cancel: CancelFlag,
    worker: Option<JoinHandle<PreviewStats>>,
}

impl Gesture {
    /// Anchor the gesture at `anchor` and start the preview loop.
    ///
    /// The tracked pointer starts one pixel off the anchor so the first frame
    /// is never a zero-size shape.
    pub fn begin(
        kind: RubberBandKind,
        anchor: Pos2,
        surface: Arc<dyn PreviewSurface>,
        style: Arc<SharedStyle>,
        interval: Duration,
    ) -> Self {
        let pointer = Arc::new(SharedPointer::new(anchor + egui::vec2(1.0, 1.0)));
        let cancel = CancelFlag::new();

        let worker = {
            let pointer = Arc::clone(&pointer);
            let cancel = cancel.clone();
            thread::Builder::new()
                .name("rubber-band-preview".to_owned())
                .spawn(move || preview_loop(kind, anchor, &pointer, &style, surface.as_ref(), &cancel, interval))
        };

        let worker = match worker {
            Ok(handle) => Some(handle),
            Err(err) => {
                log::error!("Failed to start {:?} preview: {}", kind, err);
                None
            }
        };

        log::debug!("Began {:?} gesture at {:?}", kind, anchor);
        Self {
            kind,
            anchor,
            pointer,
            cancel,
            worker,
        }
    }

    pub fn kind(&self) -> RubberBandKind {
        self.kind
    }

    /// Record the latest pointer position for the preview thread
    pub fn track(&self, pos: Pos2) {
        self.pointer.store(pos);
    }

    pub fn pointer(&self) -> Pos2 {
        self.pointer.load()
    }

    /// Record the release point and signal the preview loop to stop.
    ///
    /// The loop exits on its next check, so the last preview frame can
    /// outlive this call by up to one interval.
    pub fn end(mut self, release: Pos2) -> FinishedGesture {
        self.cancel.cancel();
        log::debug!("Ended {:?} gesture at {:?}", self.kind, release);

        FinishedGesture {
            kind: self.kind,
            anchor: self.anchor,
            release,
            worker: self.worker.take(),
        }
    }
}

impl Drop for Gesture {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

impl std::fmt::Debug for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gesture")
            .field("kind", &self.kind)
            .field("anchor", &self.anchor)
            .field("pointer", &self.pointer.load())
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}

/// A released gesture, ready to commit
#[derive(Debug)]
pub struct FinishedGesture {
    pub kind: RubberBandKind,
    pub anchor: Pos2,
    pub release: Pos2,
    worker: Option<JoinHandle<PreviewStats>>,
}

impl FinishedGesture {
    pub fn commit(&self, style: &SharedStyle) -> Command {
        self.kind.commit(self.anchor, self.release, style)
    }

    /// Wait for the preview thread to exit. Dropping instead detaches it.
    pub fn join(mut self) -> Option<PreviewStats> {
        let worker = self.worker.take()?;
        match worker.join() {
            Ok(stats) => Some(stats),
            Err(_) => {
                log::error!("{:?} preview thread panicked", self.kind);
                None
            }
        }
    }
}

fn preview_loop(
    kind: RubberBandKind,
    anchor: Pos2,
    pointer: &SharedPointer,
    style: &SharedStyle,
    surface: &dyn PreviewSurface,
    cancel: &CancelFlag,
    interval: Duration,
) -> PreviewStats {
    let mut stats = PreviewStats::default();

    while !cancel.is_cancelled() {
        let id = surface.draw(kind.preview(anchor, pointer.load(), style));
        stats.drawn += 1;

        thread::sleep(interval);

        surface.erase(id);
        stats.erased += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_roundtrip_keeps_sign_and_fraction() {
        let pointer = SharedPointer::new(Pos2::new(-3.5, 1024.25));
        assert_eq!(pointer.load(), Pos2::new(-3.5, 1024.25));
        pointer.store(Pos2::new(7.0, -0.125));
        assert_eq!(pointer.load(), Pos2::new(7.0, -0.125));
    }

    #[test]
    fn test_cancel_flag_is_shared_between_clones() {
        let flag = CancelFlag::new();
        let observer = flag.clone();
        assert!(!observer.is_cancelled());
        flag.cancel();
        assert!(observer.is_cancelled());
    }

    #[test]
    fn test_begin_offsets_initial_pointer() {
        let surface = Arc::new(OverlaySurface::new(None));
        let style = Arc::new(SharedStyle::new(egui::Color32::BLACK, 2));
        let gesture = Gesture::begin(
            RubberBandKind::Line,
            Pos2::new(10.0, 10.0),
            surface,
            style,
            Duration::from_millis(5),
        );
        assert_eq!(gesture.pointer(), Pos2::new(11.0, 11.0));
        gesture.end(Pos2::new(20.0, 20.0)).join();
    }
}
