#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use egui::Vec2;
use image::{Rgba, RgbaImage};
use image_editor::EditorContext;
use image_editor::canvas::Shape;
use image_editor::config::Preferences;
use image_editor::dialogs::Dialogs;
use image_editor::rubber_band::{PreviewSurface, PrimitiveId};
use image_editor::state::Session;
use parking_lot::Mutex;
use uuid::Uuid;

pub const INTERVAL: Duration = Duration::from_millis(10);
pub const CANVAS: Vec2 = Vec2::new(1300.0, 721.0);

/// Scripted answers in, everything shown to the user recorded
#[derive(Debug, Default)]
pub struct RecordingDialogs {
    pub images: VecDeque<PathBuf>,
    pub save_paths: VecDeque<PathBuf>,
    pub confirm_answer: bool,
    pub infos: Vec<(String, String)>,
    pub errors: Vec<(String, String)>,
}

impl Dialogs for RecordingDialogs {
    fn pick_image(&mut self, _title: &str) -> Option<PathBuf> {
        self.images.pop_front()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.save_paths.pop_front()
    }

    fn confirm(&mut self, _title: &str, _message: &str) -> bool {
        self.confirm_answer
    }

    fn info(&mut self, title: &str, message: &str) {
        self.infos.push((title.to_owned(), message.to_owned()));
    }

    fn error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_owned(), message.to_owned()));
    }
}

/// Preview surface that counts draws and erases
#[derive(Debug, Default)]
pub struct CountingSurface {
    next_id: AtomicU64,
    pub drawn: AtomicUsize,
    pub erased: AtomicUsize,
    pub live: Mutex<Vec<(PrimitiveId, Shape)>>,
}

impl CountingSurface {
    pub fn drawn(&self) -> usize {
        self.drawn.load(Ordering::SeqCst)
    }

    pub fn erased(&self) -> usize {
        self.erased.load(Ordering::SeqCst)
    }
}

impl PreviewSurface for CountingSurface {
    fn draw(&self, shape: Shape) -> PrimitiveId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.live.lock().push((id, shape));
        self.drawn.fetch_add(1, Ordering::SeqCst);
        id
    }

    fn erase(&self, id: PrimitiveId) {
        self.live.lock().retain(|(existing, _)| *existing != id);
        self.erased.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn editor_with(surface: Arc<CountingSurface>) -> EditorContext {
    let session = Session::new(&Preferences::default(), CANVAS);
    EditorContext::new(session, surface, INTERVAL)
}

pub fn editor() -> EditorContext {
    editor_with(Arc::new(CountingSurface::default()))
}

pub fn temp_path(extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!("image-editor-{}.{}", Uuid::new_v4(), extension))
}

/// 200x100 picture whose pixel (x, y) is (x, y, 0, 255)
pub fn write_fixture() -> PathBuf {
    let image = RgbaImage::from_fn(200, 100, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    let path = temp_path("png");
    image.save(&path).unwrap();
    path
}
