pub mod element;
pub mod raster;

use egui::{Context, Rect, TextureHandle, TextureOptions, Vec2};
use image::DynamicImage;

use crate::picture::Picture;
pub use element::{Element, FOOTER_HEIGHT, Footer, InsertedPicture, Shape, Widget};

/// The display surface: the current image plus everything placed on top of it.
///
/// Drawn primitives live until the image is re-presented; embedded widgets
/// (inserted pictures and footers) survive re-presentation and are only
/// removed when the canvas is flattened.
#[derive(Default)]
pub struct Canvas {
    image_size: Option<Vec2>,
    elements: Vec<Element>,
    widgets: Vec<Widget>,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present `picture` (or nothing), wiping drawn primitives
    pub fn present(&mut self, picture: Option<&Picture>) {
        self.image_size = picture.map(Picture::size);
        self.elements.clear();
        self.texture_dirty = true;
    }

    /// Drop every primitive and widget, as after baking them into pixels
    pub fn clear_overlays(&mut self) {
        self.elements.clear();
        self.widgets.clear();
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn add_widget(&mut self, widget: Widget) {
        self.widgets.push(widget);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut [Widget] {
        &mut self.widgets
    }

    pub fn image_size(&self) -> Option<Vec2> {
        self.image_size
    }

    /// Screen rectangle of the canvas inside `area`: the image centred in the
    /// area, or the whole area when no image is shown.
    pub fn layout(&self, area: Rect) -> Rect {
        match self.image_size {
            Some(size) => {
                let center = area.center();
                let min = egui::pos2(
                    (center.x - (size.x / 2.0).floor()).floor(),
                    (center.y - (size.y / 2.0).floor()).floor(),
                );
                Rect::from_min_size(min, size)
            }
            None => area,
        }
    }

    /// Texture for the presented image, re-uploaded after every change
    pub fn texture(&mut self, ctx: &Context, picture: &Picture) -> &TextureHandle {
        let texture = match self.texture.take() {
            Some(texture) if !self.texture_dirty => texture,
            _ => ctx.load_texture(
                "canvas-image",
                picture.to_color_image(),
                TextureOptions::default(),
            ),
        };
        self.texture_dirty = false;
        self.texture.insert(texture)
    }

    /// Composite the picture with every primitive and widget on top
    pub fn flatten(&self, picture: &Picture) -> DynamicImage {
        let mut image = picture.pixels().to_rgba8();
        for element in &self.elements {
            raster::draw_element(&mut image, element);
        }
        for widget in &self.widgets {
            raster::draw_widget(&mut image, widget);
        }
        DynamicImage::ImageRgba8(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, Pos2, Stroke};
    use image::{GenericImageView, RgbImage};

    fn picture(width: u32, height: u32) -> Picture {
        Picture::from_pixels(DynamicImage::ImageRgb8(RgbImage::new(width, height)))
    }

    #[test]
    fn test_layout_centres_the_image() {
        let mut canvas = Canvas::new();
        canvas.present(Some(&picture(100, 50)));

        let area = Rect::from_min_size(Pos2::ZERO, egui::vec2(300.0, 200.0));
        let rect = canvas.layout(area);
        assert_eq!(rect.min, Pos2::new(100.0, 75.0));
    }

    #[test]
    fn test_layout_without_image_uses_whole_area() {
        let canvas = Canvas::new();
        let area = Rect::from_min_size(Pos2::new(0.0, 24.0), egui::vec2(300.0, 200.0));
        assert_eq!(canvas.layout(area), area);
    }

    #[test]
    fn test_present_keeps_widgets_but_drops_drawings() {
        let mut canvas = Canvas::new();
        canvas.add_element(Element::Dot {
            center: Pos2::new(1.0, 1.0),
            radius: 2.0,
            color: Color32::RED,
        });
        canvas.add_widget(Widget::Footer(Footer::new(40.0, 100.0)));

        canvas.present(Some(&picture(100, 100)));
        assert!(canvas.elements().is_empty());
        assert_eq!(canvas.widgets().len(), 1);
    }

    #[test]
    fn test_flatten_bakes_overlays() {
        let mut canvas = Canvas::new();
        let picture = picture(20, 20);
        canvas.present(Some(&picture));
        canvas.add_element(Element::Shape(Shape::Line {
            from: Pos2::new(0.0, 5.0),
            to: Pos2::new(20.0, 5.0),
            stroke: Stroke::new(2.0, Color32::WHITE),
        }));

        let flat = canvas.flatten(&picture);
        assert_eq!(flat.get_pixel(10, 5).0, [255, 255, 255, 255]);
        assert_eq!(flat.get_pixel(10, 15).0, [0, 0, 0, 255]);
    }
}
