use crate::ImageEditorApp;

/// Integer prompt window; OK is only enabled once the text parses
pub fn prompt_window(app: &mut ImageEditorApp, ctx: &egui::Context) {
    let Some(prompt) = app.editor.prompt() else {
        return;
    };
    let title = prompt.title();
    let message = prompt.message();

    // Some(None) is a cancel
    let mut answer: Option<Option<i64>> = None;

    egui::Window::new(title)
        .id(egui::Id::new("integer_prompt"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(message);
            let edit = ui.text_edit_singleline(&mut app.prompt_text);
            let parsed = app.prompt_text.trim().parse::<i64>().ok();
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                let ok = ui.add_enabled(parsed.is_some(), egui::Button::new("OK")).clicked();
                if ok || (entered && parsed.is_some()) {
                    answer = Some(parsed);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(None);
                }
            });
        });

    if let Some(value) = answer {
        app.prompt_text.clear();
        app.editor.submit_prompt(value, &mut app.dialogs);
    }
}
