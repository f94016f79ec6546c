//! Pure image operations. Each takes the current picture and returns a new
//! one; the session swaps the result in wholesale.

pub mod filters;

use egui::{Pos2, Vec2};
use image::imageops::FilterType;

use crate::error::{EditorError, MAX_EDGE};
use crate::picture::{Picture, fit_within};
use filters::Kernel;

/// Entries of the "Filter" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Sharpen,
    Blur,
    BlackWhite,
    Emboss,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [Self::Sharpen, Self::Blur, Self::BlackWhite, Self::Emboss];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sharpen => "Sharpen",
            Self::Blur => "Blur",
            Self::BlackWhite => "Black & white",
            Self::Emboss => "Emboss",
        }
    }
}

/// Flip axis of the "Operation" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipAxis {
    LeftRight,
    TopBottom,
}

/// Crop bounds in image pixels, always normalized so `left <= right` and
/// `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    /// Build from two opposite corners in any order, clamped to `bounds`.
    pub fn from_corners(a: Pos2, b: Pos2, bounds: (u32, u32)) -> Self {
        let clamp_x = |v: f32| (v.round().max(0.0) as u32).min(bounds.0);
        let clamp_y = |v: f32| (v.round().max(0.0) as u32).min(bounds.1);

        let (x1, x2) = (clamp_x(a.x), clamp_x(b.x));
        let (y1, y2) = (clamp_y(a.y), clamp_y(b.y));

        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

pub fn filter(picture: &Picture, kind: FilterKind) -> Picture {
    let pixels = picture.pixels();
    let filtered = match kind {
        FilterKind::BlackWhite => pixels.grayscale(),
        FilterKind::Blur => filters::apply(pixels, &Kernel::blur()),
        FilterKind::Sharpen => filters::apply(pixels, &Kernel::sharpen()),
        FilterKind::Emboss => filters::apply(pixels, &Kernel::emboss()),
    };
    picture.with_pixels(filtered)
}

/// Quarter turn counter-clockwise
pub fn rotate(picture: &Picture) -> Picture {
    picture.with_pixels(picture.pixels().rotate270())
}

pub fn flip(picture: &Picture, axis: FlipAxis) -> Picture {
    let pixels = match axis {
        FlipAxis::LeftRight => picture.pixels().fliph(),
        FlipAxis::TopBottom => picture.pixels().flipv(),
    };
    picture.with_pixels(pixels)
}

/// Crop to the rectangle spanned by two corners given in any order
pub fn crop(picture: &Picture, a: Pos2, b: Pos2) -> Result<Picture, EditorError> {
    let rect = CropRect::from_corners(a, b, (picture.width(), picture.height()));
    if rect.is_empty() {
        return Err(EditorError::EmptySelection);
    }
    let pixels = picture
        .pixels()
        .crop_imm(rect.left, rect.top, rect.width(), rect.height());
    Ok(picture.with_pixels(pixels))
}

/// Resample to exactly `width` by `height`. Each edge must lie in
/// `1..=MAX_EDGE`, so the new buffer is always allocatable.
pub fn resize(picture: &Picture, width: i64, height: i64) -> Result<Picture, EditorError> {
    let edge = 1..=MAX_EDGE;
    if !edge.contains(&width) || !edge.contains(&height) {
        return Err(EditorError::invalid_dimensions(width, height));
    }
    let pixels = picture
        .pixels()
        .resize_exact(width as u32, height as u32, FilterType::CatmullRom);
    Ok(picture.with_pixels(pixels))
}

/// Scale down so the whole picture fits in `area`
pub fn fit_to(picture: &Picture, area: Vec2) -> Picture {
    let (width, height) = fit_within(picture.width(), picture.height(), area);
    if (width, height) == (picture.width(), picture.height()) {
        return picture.clone();
    }
    picture.with_pixels(
        picture
            .pixels()
            .resize_exact(width, height, FilterType::CatmullRom),
    )
}

/// Copy of the pixels with every piece of metadata dropped
pub fn strip_exif(picture: &Picture) -> Picture {
    Picture::from_pixels(picture.pixels().clone())
}
