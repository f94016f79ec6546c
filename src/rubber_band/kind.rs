use egui::{Color32, Pos2, Stroke};

use crate::canvas::{Element, Shape};
use crate::command::Command;
use crate::state::SharedStyle;

/// Outline used while choosing a crop area
const CROP_STROKE: Stroke = Stroke {
    width: 2.0,
    color: Color32::RED,
};

/// The operations that share the rubber-band gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubberBandKind {
    Crop,
    Line,
    Rectangle,
    Oval,
}

impl RubberBandKind {
    /// Text for the menu-bar status indicator
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Crop => "State: Cropping",
            Self::Line => "State: Inserting line",
            Self::Rectangle => "State: Inserting square",
            Self::Oval => "State: Inserting oval",
        }
    }

    /// Whether committing needs a loaded image
    pub fn requires_image(self) -> bool {
        matches!(self, Self::Crop)
    }

    /// Ephemeral shape from the anchor to the current pointer position
    pub fn preview(self, anchor: Pos2, current: Pos2, style: &SharedStyle) -> Shape {
        match self {
            Self::Crop => Shape::Rectangle {
                from: anchor,
                to: current,
                stroke: CROP_STROKE,
            },
            Self::Line => Shape::Line {
                from: anchor,
                to: current,
                stroke: style.stroke(),
            },
            Self::Rectangle => Shape::Rectangle {
                from: anchor,
                to: current,
                stroke: style.stroke(),
            },
            Self::Oval => Shape::Oval {
                from: anchor,
                to: current,
                stroke: style.stroke(),
            },
        }
    }

    /// The permanent effect of the gesture, with style read at release time
    pub fn commit(self, anchor: Pos2, release: Pos2, style: &SharedStyle) -> Command {
        match self {
            Self::Crop => Command::Crop {
                from: anchor,
                to: release,
            },
            Self::Line | Self::Rectangle | Self::Oval => {
                Command::AddElement(Element::Shape(self.preview(anchor, release, style)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_preview_ignores_line_style() {
        let style = SharedStyle::new(Color32::GREEN, 15);
        let shape = RubberBandKind::Crop.preview(Pos2::ZERO, Pos2::new(3.0, 3.0), &style);
        assert_eq!(shape.stroke(), CROP_STROKE);
    }

    #[test]
    fn test_line_commit_uses_style_at_release() {
        let style = SharedStyle::new(Color32::BLACK, 2);
        let from = Pos2::new(1.0, 2.0);
        let to = Pos2::new(30.0, 40.0);

        style.set_width(10);
        let command = RubberBandKind::Line.commit(from, to, &style);

        assert!(matches!(
            command,
            Command::AddElement(Element::Shape(Shape::Line { stroke, .. })) if stroke.width == 10.0
        ));
    }
}
