use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Pen and line widths offered in the menus
pub const WIDTH_CHOICES: [u32; 6] = [1, 2, 3, 5, 10, 15];

/// Command line of the editor binary
#[derive(Parser, Debug, Clone)]
#[command(name = "image-editor", version, about = "A small image editor")]
pub struct Args {
    /// Image to open at startup
    pub path: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1300.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 721.0)]
    pub height: f32,
}

/// Editing preferences restored across runs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub pen_width: u32,
    pub line_width: u32,
    /// Unmultiplied RGBA
    pub drawing_color: [u8; 4],
    pub line_color: [u8; 4],
    /// How long each rubber-band preview frame stays up
    pub preview_interval_ms: u64,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            pen_width: 2,
            line_width: 2,
            drawing_color: [255, 0, 0, 255],
            line_color: [0, 0, 0, 255],
            preview_interval_ms: 100,
        }
    }
}

impl Preferences {
    pub fn drawing_color(&self) -> Color32 {
        to_color(self.drawing_color)
    }

    pub fn line_color(&self) -> Color32 {
        to_color(self.line_color)
    }

    pub fn preview_interval(&self) -> Duration {
        Duration::from_millis(self.preview_interval_ms.max(1))
    }
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_menu_choices() {
        let prefs = Preferences::default();
        assert!(WIDTH_CHOICES.contains(&prefs.pen_width));
        assert!(WIDTH_CHOICES.contains(&prefs.line_width));
        assert_eq!(prefs.drawing_color(), Color32::RED);
        assert_eq!(prefs.preview_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_args_default_window_size() {
        let args = Args::parse_from(["image-editor"]);
        assert_eq!((args.width, args.height), (1300.0, 721.0));
        assert!(args.path.is_none());

        let args = Args::parse_from(["image-editor", "photo.jpg", "--width", "800"]);
        assert_eq!(args.path, Some(PathBuf::from("photo.jpg")));
        assert_eq!(args.width, 800.0);
    }
}
