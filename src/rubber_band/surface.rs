use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::canvas::Shape;

/// Handle to one ephemeral primitive on a preview surface
pub type PrimitiveId = u64;

/// Where the rubber-band preview thread draws its transient shapes.
///
/// Every `draw` is followed by exactly one `erase` of the returned id.
pub trait PreviewSurface: Send + Sync {
    fn draw(&self, shape: Shape) -> PrimitiveId;

    fn erase(&self, id: PrimitiveId);
}

/// The overlay painted above the canvas by the central panel.
///
/// The preview thread adds and removes shapes here; the UI thread reads the
/// live set every frame. A repaint is requested on each change so the
/// animation keeps running while the pointer is still.
pub struct OverlaySurface {
    next_id: AtomicU64,
    shapes: Mutex<Vec<(PrimitiveId, Shape)>>,
    ctx: Option<egui::Context>,
}

impl OverlaySurface {
    pub fn new(ctx: Option<egui::Context>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            shapes: Mutex::new(Vec::new()),
            ctx,
        }
    }

    /// Snapshot of the shapes currently on screen
    pub fn shapes(&self) -> Vec<Shape> {
        self.shapes.lock().iter().map(|(_, shape)| *shape).collect()
    }

    fn repaint(&self) {
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl PreviewSurface for OverlaySurface {
    fn draw(&self, shape: Shape) -> PrimitiveId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.shapes.lock().push((id, shape));
        self.repaint();
        id
    }

    fn erase(&self, id: PrimitiveId) {
        self.shapes.lock().retain(|(existing, _)| *existing != id);
        self.repaint();
    }
}

impl std::fmt::Debug for OverlaySurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlaySurface")
            .field("shapes", &format!("<{} shapes>", self.shapes.lock().len()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, Pos2, Stroke};

    fn line() -> Shape {
        Shape::Line {
            from: Pos2::ZERO,
            to: Pos2::new(5.0, 5.0),
            stroke: Stroke::new(1.0, Color32::BLACK),
        }
    }

    #[test]
    fn test_erase_removes_only_its_own_shape() {
        let surface = OverlaySurface::new(None);
        let first = surface.draw(line());
        let second = surface.draw(line());

        surface.erase(first);
        assert_eq!(surface.shapes().len(), 1);

        surface.erase(first);
        assert_eq!(surface.shapes().len(), 1);

        surface.erase(second);
        assert!(surface.shapes().is_empty());
    }
}
