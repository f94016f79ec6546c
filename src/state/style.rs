use std::sync::atomic::{AtomicU32, Ordering};

use egui::{Color32, Stroke};

/// Line colour and width for inserted lines and shapes.
///
/// Written by the UI thread, read by the rubber-band preview thread on every
/// frame, so each value is a single atomic and the last write wins.
#[derive(Debug)]
pub struct SharedStyle {
    color: AtomicU32,
    width: AtomicU32,
}

impl SharedStyle {
    pub fn new(color: Color32, width: u32) -> Self {
        Self {
            color: AtomicU32::new(pack_color(color)),
            width: AtomicU32::new(width),
        }
    }

    pub fn color(&self) -> Color32 {
        unpack_color(self.color.load(Ordering::Relaxed))
    }

    pub fn set_color(&self, color: Color32) {
        self.color.store(pack_color(color), Ordering::Relaxed);
    }

    pub fn width(&self) -> u32 {
        self.width.load(Ordering::Relaxed)
    }

    pub fn set_width(&self, width: u32) {
        self.width.store(width, Ordering::Relaxed);
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width() as f32, self.color())
    }
}

fn pack_color(color: Color32) -> u32 {
    u32::from_le_bytes(color.to_array())
}

fn unpack_color(packed: u32) -> Color32 {
    let [r, g, b, a] = packed.to_le_bytes();
    Color32::from_rgba_premultiplied(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let style = SharedStyle::new(Color32::BLACK, 2);
        style.set_color(Color32::from_rgb(12, 34, 56));
        style.set_width(10);

        assert_eq!(style.stroke(), Stroke::new(10.0, Color32::from_rgb(12, 34, 56)));
    }
}
