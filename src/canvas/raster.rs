// CPU rasterization of canvas primitives, used when flattening for save.

use egui::{Color32, Pos2, Rect};
use image::{Pixel, Rgba, RgbaImage, imageops};

use super::element::{Element, FOOTER_HEIGHT, Footer, InsertedPicture, Shape, Widget};

const FOOTER_BORDER: f32 = 2.0;
const FOOTER_BORDER_COLOR: Color32 = Color32::from_gray(160);

pub fn draw_element(image: &mut RgbaImage, element: &Element) {
    match element {
        Element::Dot { center, radius, color } => fill_circle(image, *center, *radius, *color),
        Element::Shape(shape) => draw_shape(image, shape),
    }
}

pub fn draw_widget(image: &mut RgbaImage, widget: &Widget) {
    match widget {
        Widget::Picture(picture) => draw_picture(image, picture),
        Widget::Footer(footer) => draw_footer(image, footer),
    }
}

pub fn draw_shape(image: &mut RgbaImage, shape: &Shape) {
    let stroke = shape.stroke();
    let half = (stroke.width / 2.0).max(0.5);
    let (from, to) = shape.corners();
    let bounds = shape.bounds();

    match shape {
        Shape::Line { .. } => {
            cover(image, bounds.expand(half), stroke.color, |p| {
                distance_to_segment(p, from, to) <= half
            });
        }
        Shape::Rectangle { .. } => {
            let outer = bounds.expand(half);
            let inner = bounds.shrink(half);
            cover(image, outer, stroke.color, |p| {
                outer.contains(p) && !(inner.is_positive() && inner.contains(p))
            });
        }
        Shape::Oval { .. } => {
            let radius = bounds.size() / 2.0;
            if radius.x < 0.5 || radius.y < 0.5 {
                // Degenerate ovals collapse to a line
                cover(image, bounds.expand(half), stroke.color, |p| {
                    distance_to_segment(p, from, to) <= half
                });
                return;
            }
            let center = bounds.center();
            cover(image, bounds.expand(half), stroke.color, |p| {
                distance_to_ellipse(p, center, radius) <= half
            });
        }
    }
}

pub fn fill_circle(image: &mut RgbaImage, center: Pos2, radius: f32, color: Color32) {
    let bounds = Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));
    cover(image, bounds, color, |p| p.distance(center) <= radius);
}

fn draw_picture(image: &mut RgbaImage, picture: &InsertedPicture) {
    let min = picture.rect().min;
    imageops::overlay(image, &picture.image, min.x.round() as i64, min.y.round() as i64);
}

fn draw_footer(image: &mut RgbaImage, footer: &Footer) {
    let rect = footer.rect();
    let inner = rect.shrink(FOOTER_BORDER);
    cover(image, rect, Color32::WHITE, |p| inner.contains(p));
    cover(image, rect, FOOTER_BORDER_COLOR, |p| !inner.contains(p));
    debug_assert_eq!(rect.height(), FOOTER_HEIGHT);
}

/// Blend `color` into every pixel in `area` whose centre satisfies `inside`
fn cover(image: &mut RgbaImage, area: Rect, color: Color32, inside: impl Fn(Pos2) -> bool) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || !area.is_positive() {
        return;
    }

    let x0 = area.min.x.floor().max(0.0) as u32;
    let y0 = area.min.y.floor().max(0.0) as u32;
    let x1 = (area.max.x.ceil().max(0.0) as u32).min(width);
    let y1 = (area.max.y.ceil().max(0.0) as u32).min(height);

    let paint = Rgba(color.to_srgba_unmultiplied());
    for y in y0..y1 {
        for x in x0..x1 {
            if inside(egui::pos2(x as f32 + 0.5, y as f32 + 0.5)) {
                image.get_pixel_mut(x, y).blend(&paint);
            }
        }
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// First-order distance from `p` to the ellipse outline
fn distance_to_ellipse(p: Pos2, center: Pos2, radius: egui::Vec2) -> f32 {
    let d = p - center;
    let value = (d.x / radius.x).powi(2) + (d.y / radius.y).powi(2) - 1.0;
    let gradient = egui::vec2(2.0 * d.x / radius.x.powi(2), 2.0 * d.y / radius.y.powi(2));
    let gradient_len = gradient.length();
    if gradient_len == 0.0 {
        return radius.x.min(radius.y);
    }
    value.abs() / gradient_len
}
