use egui::Ui;

use crate::ImageEditorApp;
use crate::command::Command;
use crate::config::WIDTH_CHOICES;
use crate::ops::{FilterKind, FlipAxis};
use crate::rubber_band::RubberBandKind;

/// Clickable menu entry that closes its menu when used
fn item(ui: &mut Ui, enabled: bool, label: &str) -> bool {
    let clicked = ui.add_enabled(enabled, egui::Button::new(label)).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

fn width_choices(ui: &mut Ui, width: &mut u32) -> bool {
    let mut changed = false;
    for choice in WIDTH_CHOICES {
        changed |= ui.radio_value(width, choice, choice.to_string()).changed();
    }
    changed
}

pub fn menu_bar(app: &mut ImageEditorApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            // Nothing new can be armed until the current gesture releases
            let idle = app.editor.mode().is_idle();
            // A pending prompt must be answered before another is asked
            let asking = app.editor.awaiting_answer();

            ui.menu_button("File", |ui| {
                if item(ui, true, "Open") {
                    app.editor.run(Command::Open, &mut app.dialogs);
                }
                if item(ui, true, "Save") {
                    app.editor.run(Command::Save, &mut app.dialogs);
                }
                if item(ui, true, "Save as...") {
                    app.editor.run(Command::SaveAs, &mut app.dialogs);
                }
                ui.separator();
                if item(ui, true, "Exit") {
                    log::info!("Exit requested");
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Operation", |ui| {
                if item(ui, true, "Rotate 90°") {
                    app.editor.run(Command::Rotate, &mut app.dialogs);
                }
                if item(ui, true, "Flip left-right") {
                    app.editor.run(Command::Flip(FlipAxis::LeftRight), &mut app.dialogs);
                }
                if item(ui, true, "Flip top-bottom") {
                    app.editor.run(Command::Flip(FlipAxis::TopBottom), &mut app.dialogs);
                }
                ui.separator();
                if item(ui, idle, "Crop") {
                    app.editor.arm(RubberBandKind::Crop, &mut app.dialogs);
                }
                if item(ui, !asking, "Resize") && app.editor.start_resize(&mut app.dialogs) {
                    app.prompt_text.clear();
                }
            });

            ui.menu_button("Filter", |ui| {
                for kind in FilterKind::ALL {
                    if item(ui, true, kind.label()) {
                        app.editor.run(Command::Filter(kind), &mut app.dialogs);
                    }
                }
            });

            ui.menu_button("Insert", |ui| {
                if item(ui, idle, "Line") {
                    app.editor.arm(RubberBandKind::Line, &mut app.dialogs);
                }
                if item(ui, idle, "Square") {
                    app.editor.arm(RubberBandKind::Rectangle, &mut app.dialogs);
                }
                if item(ui, idle, "Oval") {
                    app.editor.arm(RubberBandKind::Oval, &mut app.dialogs);
                }
                if item(ui, idle && !asking, "Image") {
                    app.editor.start_image_insert(&mut app.dialogs);
                }
                if item(ui, true, "Footer") {
                    app.editor.run(Command::InsertFooter, &mut app.dialogs);
                }
                ui.separator();

                let style = app.editor.session.line_style().clone();
                let mut color = style.color();
                ui.horizontal(|ui| {
                    ui.label("Line colour:");
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        style.set_color(color);
                    }
                });
                ui.menu_button("Select line width", |ui| {
                    let mut width = style.width();
                    if width_choices(ui, &mut width) {
                        style.set_width(width);
                    }
                });
            });

            ui.menu_button("EXIF data", |ui| {
                if item(ui, true, "View") {
                    app.editor.run(Command::ViewExif, &mut app.dialogs);
                }
                if item(ui, true, "Remove") {
                    app.editor.run(Command::RemoveExif, &mut app.dialogs);
                }
            });

            ui.menu_button("Draw options", |ui| {
                let mut drawing = app.editor.session.is_drawing();
                if ui.checkbox(&mut drawing, "Draw").changed() {
                    app.editor.toggle_drawing();
                    ui.close_menu();
                }

                let mut color = app.editor.session.drawing_color();
                ui.horizontal(|ui| {
                    ui.label("Select colour:");
                    if egui::color_picker::color_edit_button_srgba(
                        ui,
                        &mut color,
                        egui::color_picker::Alpha::Opaque,
                    )
                    .changed()
                    {
                        app.editor.session.set_drawing_color(color);
                    }
                });

                ui.menu_button("Select pen width", |ui| {
                    let mut width = app.editor.session.pen_width();
                    if width_choices(ui, &mut width) {
                        app.editor.session.set_pen_width(width);
                    }
                });

                if item(ui, true, "Remove drawing") {
                    app.editor.run(Command::RemoveDrawing, &mut app.dialogs);
                }
            });

            ui.add_enabled(false, egui::Label::new(app.editor.status_label()));
        });
    });
}
