use egui::CursorIcon;

use crate::rubber_band::{Gesture, RubberBandKind};

/// What the next canvas click means.
///
/// At most one gesture exists at a time: a new one can only be armed from
/// `Idle`, so the previous gesture has always released first.
#[derive(Debug, Default)]
pub enum EditorMode {
    #[default]
    Idle,
    /// Waiting for the anchoring click of a gesture
    Armed(RubberBandKind),
    /// Anchored; the next click releases
    Gesture(Gesture),
    /// Waiting for the click that places an inserted picture
    InsertingImage,
}

impl EditorMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_gesture(&self) -> bool {
        matches!(self, Self::Gesture(_))
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        match self {
            Self::Gesture(gesture) => Some(gesture),
            _ => None,
        }
    }

    /// Menu-bar status text
    pub fn status_label(&self, drawing: bool) -> &'static str {
        match self {
            Self::Armed(kind) => kind.status_label(),
            Self::Gesture(gesture) => gesture.kind().status_label(),
            Self::InsertingImage => "State: Inserting image",
            Self::Idle if drawing => "State: Drawing",
            Self::Idle => "State: None",
        }
    }

    pub fn cursor(&self, drawing: bool) -> CursorIcon {
        match self {
            Self::Armed(_) | Self::Gesture(_) => CursorIcon::Crosshair,
            Self::InsertingImage => CursorIcon::Copy,
            Self::Idle if drawing => CursorIcon::Cell,
            Self::Idle => CursorIcon::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(EditorMode::Idle.status_label(false), "State: None");
        assert_eq!(EditorMode::Idle.status_label(true), "State: Drawing");
        assert_eq!(
            EditorMode::Armed(RubberBandKind::Crop).status_label(true),
            "State: Cropping"
        );
        assert_eq!(
            EditorMode::InsertingImage.status_label(false),
            "State: Inserting image"
        );
    }
}
