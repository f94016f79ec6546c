mod common;

use std::sync::Arc;
use std::time::Instant;

use common::{CountingSurface, INTERVAL, RecordingDialogs, editor, editor_with, write_fixture};
use egui::{Color32, Pos2};
use image::Rgba;
use image_editor::Command;
use image_editor::canvas::{Element, Shape};
use image_editor::rubber_band::RubberBandKind;

fn open_fixture(editor: &mut image_editor::EditorContext, dialogs: &mut RecordingDialogs) -> std::path::PathBuf {
    let path = write_fixture();
    assert!(editor.run(Command::OpenPath(path.clone()), dialogs));
    path
}

fn crop(editor: &mut image_editor::EditorContext, from: Pos2, to: Pos2) {
    let mut dialogs = RecordingDialogs::default();
    assert!(editor.arm(RubberBandKind::Crop, &mut dialogs));
    assert!(editor.begin_gesture(from));
    editor.track(Pos2::new(30.0, 30.0));
    let finished = editor.finish_gesture(to, &mut dialogs).unwrap();
    finished.join().unwrap();
    assert!(dialogs.errors.is_empty(), "{:?}", dialogs.errors);
}

#[test]
fn test_crop_keeps_the_selected_region() {
    let mut dialogs = RecordingDialogs::default();
    let mut editor = editor();
    open_fixture(&mut editor, &mut dialogs);

    crop(&mut editor, Pos2::new(10.0, 10.0), Pos2::new(50.0, 40.0));

    let picture = editor.session.picture().unwrap();
    assert_eq!((picture.width(), picture.height()), (40, 30));
    let pixels = picture.pixels().to_rgba8();
    assert_eq!(*pixels.get_pixel(0, 0), Rgba([10, 10, 0, 255]));
    assert_eq!(*pixels.get_pixel(39, 29), Rgba([49, 39, 0, 255]));
    assert!(editor.mode().is_idle());
}

#[test]
fn test_crop_corner_order_does_not_matter() {
    let mut dialogs = RecordingDialogs::default();

    let mut forward = editor();
    open_fixture(&mut forward, &mut dialogs);
    crop(&mut forward, Pos2::new(10.0, 10.0), Pos2::new(50.0, 40.0));

    let mut backward = editor();
    open_fixture(&mut backward, &mut dialogs);
    crop(&mut backward, Pos2::new(50.0, 40.0), Pos2::new(10.0, 10.0));

    assert_eq!(forward.session.picture(), backward.session.picture());
}

#[test]
fn test_recrop_after_reopen_is_identical() {
    let mut dialogs = RecordingDialogs::default();
    let mut editor = editor();
    let path = open_fixture(&mut editor, &mut dialogs);
    crop(&mut editor, Pos2::new(5.0, 20.0), Pos2::new(120.0, 90.0));
    let first = editor.session.picture().cloned();

    assert!(editor.run(Command::OpenPath(path), &mut dialogs));
    crop(&mut editor, Pos2::new(5.0, 20.0), Pos2::new(120.0, 90.0));

    assert_eq!(editor.session.picture().cloned(), first);
}

#[test]
fn test_every_preview_frame_is_erased() {
    let surface = Arc::new(CountingSurface::default());
    let mut editor = editor_with(surface.clone());
    let mut dialogs = RecordingDialogs::default();

    assert!(editor.arm(RubberBandKind::Oval, &mut dialogs));
    assert!(editor.begin_gesture(Pos2::new(10.0, 10.0)));
    for step in 0..5 {
        editor.track(Pos2::new(20.0 + step as f32, 30.0));
        std::thread::sleep(INTERVAL);
    }
    let stats = editor
        .finish_gesture(Pos2::new(60.0, 50.0), &mut dialogs)
        .unwrap()
        .join()
        .unwrap();

    assert!(stats.drawn >= 1);
    assert_eq!(stats.drawn, stats.erased);
    assert_eq!(surface.drawn(), surface.erased());
    assert!(surface.live.lock().is_empty());
}

#[test]
fn test_preview_stops_within_an_interval() {
    let mut editor = editor();
    let mut dialogs = RecordingDialogs::default();

    assert!(editor.arm(RubberBandKind::Line, &mut dialogs));
    assert!(editor.begin_gesture(Pos2::new(0.0, 0.0)));
    std::thread::sleep(INTERVAL * 3);

    let finished = editor.finish_gesture(Pos2::new(10.0, 10.0), &mut dialogs).unwrap();
    let started = Instant::now();
    finished.join().unwrap();
    // one interval plus scheduling slack
    assert!(started.elapsed() < INTERVAL * 20);
}

#[test]
fn test_line_uses_style_at_release() {
    let mut editor = editor();
    let mut dialogs = RecordingDialogs::default();

    assert!(editor.arm(RubberBandKind::Line, &mut dialogs));
    assert!(editor.begin_gesture(Pos2::new(1.0, 1.0)));
    let style = editor.session.line_style().clone();
    style.set_width(10);
    style.set_color(Color32::BLUE);
    editor.finish_gesture(Pos2::new(40.0, 1.0), &mut dialogs).unwrap().join();

    match editor.canvas.elements() {
        [Element::Shape(Shape::Line { from, to, stroke })] => {
            assert_eq!((*from, *to), (Pos2::new(1.0, 1.0), Pos2::new(40.0, 1.0)));
            assert_eq!(stroke.width, 10.0);
            assert_eq!(stroke.color, Color32::BLUE);
        }
        other => panic!("unexpected elements: {other:?}"),
    }
}

#[test]
fn test_shapes_do_not_need_a_picture() {
    let mut editor = editor();
    let mut dialogs = RecordingDialogs::default();

    for kind in [RubberBandKind::Line, RubberBandKind::Rectangle, RubberBandKind::Oval] {
        assert!(editor.arm(kind, &mut dialogs));
        assert!(editor.begin_gesture(Pos2::new(5.0, 5.0)));
        editor.finish_gesture(Pos2::new(25.0, 15.0), &mut dialogs).unwrap().join();
    }

    assert_eq!(editor.canvas.elements().len(), 3);
    assert!(dialogs.errors.is_empty());
}

#[test]
fn test_empty_crop_reports_and_keeps_picture() {
    let mut dialogs = RecordingDialogs::default();
    let mut editor = editor();
    open_fixture(&mut editor, &mut dialogs);
    let before = editor.session.picture().cloned();

    assert!(editor.arm(RubberBandKind::Crop, &mut dialogs));
    assert!(editor.begin_gesture(Pos2::new(10.0, 10.0)));
    editor.finish_gesture(Pos2::new(10.0, 60.0), &mut dialogs).unwrap().join();

    assert_eq!(dialogs.errors.len(), 1);
    assert_eq!(editor.session.picture().cloned(), before);
}
