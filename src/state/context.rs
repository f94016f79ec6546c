use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use egui::{Pos2, Vec2};

use super::{EditorMode, Prompt, PromptOutcome, Session};
use crate::canvas::{Canvas, Element};
use crate::command::{self, Command, CommandContext};
use crate::dialogs::Dialogs;
use crate::error::EditorError;
use crate::rubber_band::{FinishedGesture, Gesture, PreviewSurface, RubberBandKind};

/// The editor as the UI sees it: the session, the presented canvas, the
/// current mode and any pending prompt.
///
/// Every mode change goes through here. Arming and the insert-image flow are
/// only accepted from `Idle`, which keeps at most one gesture alive.
pub struct EditorContext {
    pub session: Session,
    pub canvas: Canvas,
    mode: EditorMode,
    prompt: Option<Prompt>,
    surface: Arc<dyn PreviewSurface>,
    preview_interval: Duration,
    /// Opened once the drawing area has been laid out
    pending_open: Option<PathBuf>,
}

impl EditorContext {
    pub fn new(session: Session, surface: Arc<dyn PreviewSurface>, preview_interval: Duration) -> Self {
        Self {
            session,
            canvas: Canvas::new(),
            mode: EditorMode::Idle,
            prompt: None,
            surface,
            preview_interval,
            pending_open: None,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// A prompt is open, or a placing click will open one. Only one
    /// question is asked at a time.
    pub fn awaiting_answer(&self) -> bool {
        self.prompt.is_some() || matches!(self.mode, EditorMode::InsertingImage)
    }

    pub fn preview_interval(&self) -> Duration {
        self.preview_interval
    }

    pub fn status_label(&self) -> &'static str {
        self.mode.status_label(self.session.is_drawing())
    }

    pub fn cursor(&self) -> egui::CursorIcon {
        self.mode.cursor(self.session.is_drawing())
    }

    /// Run a command against the session and canvas
    pub fn run(&mut self, command: Command, dialogs: &mut dyn Dialogs) -> bool {
        let mut ctx = CommandContext::new(&mut self.session, &mut self.canvas, dialogs);
        command::run(&command, &mut ctx)
    }

    /// Arm a rubber-band gesture; the next canvas click anchors it
    pub fn arm(&mut self, kind: RubberBandKind, dialogs: &mut dyn Dialogs) -> bool {
        if !self.mode.is_idle() {
            self.report(EditorError::GestureInProgress, dialogs);
            return false;
        }
        if kind.requires_image() && self.session.picture().is_none() {
            self.report(EditorError::NoImage, dialogs);
            return false;
        }
        log::debug!("Armed {:?}", kind);
        self.mode = EditorMode::Armed(kind);
        true
    }

    /// Anchoring click of an armed gesture. Ignored in any other mode.
    pub fn begin_gesture(&mut self, anchor: Pos2) -> bool {
        let EditorMode::Armed(kind) = self.mode else {
            return false;
        };
        let gesture = Gesture::begin(
            kind,
            anchor,
            Arc::clone(&self.surface),
            Arc::clone(self.session.line_style()),
            self.preview_interval,
        );
        self.mode = EditorMode::Gesture(gesture);
        true
    }

    pub fn track(&self, pos: Pos2) {
        if let Some(gesture) = self.mode.gesture() {
            gesture.track(pos);
        }
    }

    /// Releasing click: stop the preview, commit the operation and return
    /// to `Idle`.
    ///
    /// The returned gesture still owns the preview thread. Dropping it lets
    /// the thread wind down on its own within one interval.
    pub fn finish_gesture(&mut self, release: Pos2, dialogs: &mut dyn Dialogs) -> Option<FinishedGesture> {
        if !self.mode.is_gesture() {
            return None;
        }
        let EditorMode::Gesture(gesture) = std::mem::take(&mut self.mode) else {
            return None;
        };
        let finished = gesture.end(release);
        let command = finished.commit(self.session.line_style());
        self.run(command, dialogs);
        Some(finished)
    }

    /// Wait for a click that places an inserted picture
    pub fn start_image_insert(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if !self.mode.is_idle() || self.prompt.is_some() {
            self.report(EditorError::GestureInProgress, dialogs);
            return false;
        }
        self.mode = EditorMode::InsertingImage;
        true
    }

    /// The placing click: pick the picture, then ask for its size
    pub fn finish_image_insert(&mut self, at: Pos2, dialogs: &mut dyn Dialogs) {
        if !matches!(self.mode, EditorMode::InsertingImage) {
            return;
        }
        self.mode = EditorMode::Idle;

        let Some(path) = dialogs.pick_image("Select new image") else {
            log::debug!("Image insert cancelled");
            return;
        };
        self.prompt = Some(Prompt::InsertSize { path, at });
    }

    /// Ask for the new width, then the new height
    pub fn start_resize(&mut self, dialogs: &mut dyn Dialogs) -> bool {
        if self.awaiting_answer() {
            self.report(EditorError::GestureInProgress, dialogs);
            return false;
        }
        let Some(picture) = self.session.picture() else {
            self.report(EditorError::NoImage, dialogs);
            return false;
        };
        self.prompt = Some(Prompt::ResizeWidth {
            current_width: picture.width(),
            current_height: picture.height(),
        });
        true
    }

    /// Answer the pending prompt; `None` cancels it
    pub fn submit_prompt(&mut self, value: Option<i64>, dialogs: &mut dyn Dialogs) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        match prompt.submit(value) {
            PromptOutcome::Next(next) => self.prompt = Some(next),
            PromptOutcome::Run(command) => {
                self.run(command, dialogs);
            }
            PromptOutcome::Dismissed => {}
        }
    }

    pub fn toggle_drawing(&mut self) -> bool {
        let drawing = self.session.toggle_drawing();
        log::info!("Drawing {}", if drawing { "on" } else { "off" });
        drawing
    }

    /// Freehand stamp under the pointer while drawing is on
    pub fn draw_at(&mut self, pos: Pos2) {
        if !self.session.is_drawing() || !self.mode.is_idle() {
            return;
        }
        self.canvas.add_element(Element::Dot {
            center: pos,
            radius: self.session.pen_width() as f32,
            color: self.session.drawing_color(),
        });
    }

    /// Open `path` on the first layout, fitted to the real drawing area
    pub fn open_when_laid_out(&mut self, path: PathBuf) {
        self.pending_open = Some(path);
    }

    /// The drawing area was laid out at `size`. When it changed, a loaded
    /// picture is re-presented, which drops freehand drawing and inserted
    /// shapes.
    pub fn handle_canvas_resize(&mut self, size: Vec2, dialogs: &mut dyn Dialogs) {
        let changed = self.session.set_canvas_size(size);
        if let Some(path) = self.pending_open.take() {
            self.run(Command::OpenPath(path), dialogs);
            return;
        }
        if !changed {
            return;
        }
        if let Some(picture) = self.session.picture() {
            log::debug!("Canvas resized to {:?}, re-presenting", size);
            self.canvas.present(Some(picture));
        }
    }

    fn report(&self, error: EditorError, dialogs: &mut dyn Dialogs) {
        log::warn!("{}", error);
        dialogs.error("Error", &error.to_string());
    }
}

impl std::fmt::Debug for EditorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("mode", &self.mode)
            .field("prompt", &self.prompt)
            .field("preview_interval", &self.preview_interval)
            .finish_non_exhaustive()
    }
}
