use egui::{Color32, ColorImage, FontId, Rect, Sense, TextureOptions};

use crate::ImageEditorApp;
use crate::canvas::Widget;
use crate::input::route_event;

const FULL_UV: Rect = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

pub fn central_panel(app: &mut ImageEditorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let area = ui.available_rect_before_wrap();
        app.editor.handle_canvas_resize(area.size(), &mut app.dialogs);

        let canvas_rect = app.editor.canvas.layout(area);
        let response = ui.allocate_rect(canvas_rect, Sense::click());
        if response.hovered() {
            ctx.set_cursor_icon(app.editor.cursor());
        }

        let painter = ui.painter_at(canvas_rect);
        let origin = canvas_rect.min.to_vec2();

        let editor = &mut app.editor;
        if let Some(picture) = editor.session.picture() {
            let texture = editor.canvas.texture(ctx, picture);
            painter.image(texture.id(), canvas_rect, FULL_UV, Color32::WHITE);
        }

        for element in editor.canvas.elements() {
            element.paint(&painter, origin);
        }

        for widget in editor.canvas.widgets_mut() {
            match widget {
                Widget::Picture(inserted) => {
                    let texture = inserted.texture.get_or_insert_with(|| {
                        let size = [inserted.image.width() as usize, inserted.image.height() as usize];
                        ctx.load_texture(
                            format!("inserted-{}", inserted.id),
                            ColorImage::from_rgba_unmultiplied(size, inserted.image.as_raw()),
                            TextureOptions::default(),
                        )
                    });
                    painter.image(texture.id(), inserted.rect().translate(origin), FULL_UV, Color32::WHITE);
                }
                Widget::Footer(footer) => {
                    let rect = footer.rect().translate(origin);
                    let edit = egui::TextEdit::multiline(&mut footer.text)
                        .id_salt(footer.id)
                        .font(FontId::proportional(13.0))
                        .margin(egui::vec2(10.0, 5.0))
                        .frame(true);
                    let footer_response = ui.put(rect, edit);
                    if footer.wants_focus {
                        footer_response.request_focus();
                        footer.wants_focus = false;
                    }
                }
            }
        }

        for shape in app.overlay.shapes() {
            shape.paint(&painter, origin);
        }

        app.input.set_canvas_rect(canvas_rect);
        for event in app.input.process_input(ctx, response.hovered()) {
            route_event(&event, &mut app.editor, &mut app.dialogs);
        }
    });
}
