use std::path::{Path, PathBuf};
use std::sync::Arc;

use egui::{Color32, Vec2};

use super::SharedStyle;
use crate::config::Preferences;
use crate::error::EditorError;
use crate::picture::Picture;

/// Everything the editor knows about the current editing session.
///
/// Only the UI thread writes here. The one exception is the line style,
/// which the rubber-band preview thread reads through a shared handle.
#[derive(Debug)]
pub struct Session {
    picture: Option<Picture>,
    path: Option<PathBuf>,
    canvas_size: Vec2,
    drawing: bool,
    drawing_color: Color32,
    pen_width: u32,
    line_style: Arc<SharedStyle>,
}

impl Session {
    pub fn new(preferences: &Preferences, canvas_size: Vec2) -> Self {
        Self {
            picture: None,
            path: None,
            canvas_size,
            drawing: false,
            drawing_color: preferences.drawing_color(),
            pen_width: preferences.pen_width,
            line_style: Arc::new(SharedStyle::new(
                preferences.line_color(),
                preferences.line_width,
            )),
        }
    }

    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    pub fn require_picture(&self) -> Result<&Picture, EditorError> {
        self.picture.as_ref().ok_or(EditorError::NoImage)
    }

    /// Replace the picture wholesale
    pub fn set_picture(&mut self, picture: Picture) {
        self.picture = Some(picture);
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Returns true when the size actually changed
    pub fn set_canvas_size(&mut self, size: Vec2) -> bool {
        if self.canvas_size == size {
            return false;
        }
        self.canvas_size = size;
        true
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn toggle_drawing(&mut self) -> bool {
        self.drawing = !self.drawing;
        self.drawing
    }

    pub fn drawing_color(&self) -> Color32 {
        self.drawing_color
    }

    pub fn set_drawing_color(&mut self, color: Color32) {
        self.drawing_color = color;
    }

    pub fn pen_width(&self) -> u32 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: u32) {
        self.pen_width = width;
    }

    pub fn line_style(&self) -> &Arc<SharedStyle> {
        &self.line_style
    }

    /// Current settings in their persisted form
    pub fn preferences(&self, preview_interval_ms: u64) -> Preferences {
        Preferences {
            pen_width: self.pen_width,
            line_width: self.line_style.width(),
            drawing_color: self.drawing_color.to_srgba_unmultiplied(),
            line_color: self.line_style.color().to_srgba_unmultiplied(),
            preview_interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_no_picture() {
        let session = Session::new(&Preferences::default(), egui::vec2(1300.0, 721.0));
        assert!(session.picture().is_none());
        assert!(matches!(session.require_picture(), Err(EditorError::NoImage)));
        assert!(!session.is_drawing());
    }

    #[test]
    fn test_preferences_roundtrip() {
        let prefs = Preferences {
            pen_width: 5,
            line_width: 15,
            drawing_color: [1, 2, 3, 255],
            line_color: [200, 100, 50, 255],
            preview_interval_ms: 40,
        };
        let session = Session::new(&prefs, Vec2::ZERO);
        assert_eq!(session.preferences(40), prefs);
    }

    #[test]
    fn test_canvas_size_change_detection() {
        let mut session = Session::new(&Preferences::default(), egui::vec2(10.0, 10.0));
        assert!(!session.set_canvas_size(egui::vec2(10.0, 10.0)));
        assert!(session.set_canvas_size(egui::vec2(20.0, 10.0)));
    }
}
