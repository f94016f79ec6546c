use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};
use image::RgbaImage;
use uuid::Uuid;

/// Segments used to approximate an oval outline on screen
const OVAL_SEGMENTS: usize = 64;

/// Height of a footer panel in canvas pixels
pub const FOOTER_HEIGHT: f32 = 60.0;

/// Geometry shared by the ephemeral preview and the committed primitive.
/// Coordinates are canvas-local.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line { from: Pos2, to: Pos2, stroke: Stroke },
    Rectangle { from: Pos2, to: Pos2, stroke: Stroke },
    Oval { from: Pos2, to: Pos2, stroke: Stroke },
}

impl Shape {
    pub fn stroke(&self) -> Stroke {
        match self {
            Shape::Line { stroke, .. } | Shape::Rectangle { stroke, .. } | Shape::Oval { stroke, .. } => {
                *stroke
            }
        }
    }

    /// The two defining corners (line end points for a line)
    pub fn corners(&self) -> (Pos2, Pos2) {
        match self {
            Shape::Line { from, to, .. } | Shape::Rectangle { from, to, .. } | Shape::Oval { from, to, .. } => {
                (*from, *to)
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        let (from, to) = self.corners();
        Rect::from_two_pos(from, to)
    }

    /// Paint with the canvas origin at `origin` in screen space
    pub fn paint(&self, painter: &Painter, origin: Vec2) {
        match *self {
            Shape::Line { from, to, stroke } => {
                painter.line_segment([from + origin, to + origin], stroke);
            }
            Shape::Rectangle { stroke, .. } => {
                painter.rect_stroke(self.bounds().translate(origin), 0.0, stroke);
            }
            Shape::Oval { stroke, .. } => {
                let points = oval_points(self.bounds().translate(origin));
                painter.add(egui::Shape::closed_line(points, stroke));
            }
        }
    }
}

fn oval_points(bounds: Rect) -> Vec<Pos2> {
    let center = bounds.center();
    let radius = bounds.size() / 2.0;
    (0..OVAL_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / OVAL_SEGMENTS as f32 * std::f32::consts::TAU;
            center + egui::vec2(angle.cos() * radius.x, angle.sin() * radius.y)
        })
        .collect()
}

/// A primitive painted onto the canvas above the image
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// One dab of the freehand pen
    Dot { center: Pos2, radius: f32, color: Color32 },
    Shape(Shape),
}

impl Element {
    pub fn paint(&self, painter: &Painter, origin: Vec2) {
        match self {
            Element::Dot { center, radius, color } => {
                painter.circle_filled(*center + origin, *radius, *color);
            }
            Element::Shape(shape) => shape.paint(painter, origin),
        }
    }
}

/// A picture composited on top of the canvas, centred on where it was placed
pub struct InsertedPicture {
    pub id: Uuid,
    pub center: Pos2,
    pub image: RgbaImage,
    pub texture: Option<egui::TextureHandle>,
}

impl InsertedPicture {
    pub fn new(center: Pos2, image: RgbaImage) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            image,
            texture: None,
        }
    }

    pub fn rect(&self) -> Rect {
        let size = egui::vec2(self.image.width() as f32, self.image.height() as f32);
        Rect::from_center_size(self.center, size)
    }
}

impl std::fmt::Debug for InsertedPicture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertedPicture")
            .field("id", &self.id)
            .field("center", &self.center)
            .field("size", &self.image.dimensions())
            .finish()
    }
}

/// Editable note panel pinned to the bottom of the image
#[derive(Debug, Clone)]
pub struct Footer {
    pub id: Uuid,
    pub top: f32,
    pub width: f32,
    pub text: String,
    /// Grab keyboard focus the next time it is shown
    pub wants_focus: bool,
}

impl Footer {
    pub fn new(top: f32, width: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            top,
            width,
            text: String::new(),
            wants_focus: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(egui::pos2(0.0, self.top), egui::vec2(self.width, FOOTER_HEIGHT))
    }
}

/// Something embedded in the canvas that survives re-presenting the image
#[derive(Debug)]
pub enum Widget {
    Picture(InsertedPicture),
    Footer(Footer),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_bounds_are_normalized() {
        let shape = Shape::Oval {
            from: Pos2::new(40.0, 30.0),
            to: Pos2::new(10.0, 5.0),
            stroke: Stroke::new(2.0, Color32::BLACK),
        };
        assert_eq!(shape.bounds(), Rect::from_min_max(Pos2::new(10.0, 5.0), Pos2::new(40.0, 30.0)));
    }

    #[test]
    fn test_inserted_picture_is_centred_on_click() {
        let picture = InsertedPicture::new(Pos2::new(100.0, 100.0), RgbaImage::new(40, 40));
        assert_eq!(picture.rect().min, Pos2::new(80.0, 80.0));
    }
}
