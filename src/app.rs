use std::sync::Arc;

use crate::config::{Args, Preferences};
use crate::dialogs::NativeDialogs;
use crate::input::InputHandler;
use crate::panels::{central_panel, menu_bar, prompt_window};
use crate::rubber_band::OverlaySurface;
use crate::state::{EditorContext, Session};

/// The editor window. Only the preferences are persisted between runs.
pub struct ImageEditorApp {
    pub(crate) editor: EditorContext,
    pub(crate) dialogs: NativeDialogs,
    /// Shared with the rubber-band preview thread
    pub(crate) overlay: Arc<OverlaySurface>,
    pub(crate) input: InputHandler,
    /// Text typed into the pending prompt
    pub(crate) prompt_text: String,
}

impl ImageEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, args: Args) -> Self {
        let preferences: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::debug!("Restored preferences: {:?}", preferences);

        let overlay = Arc::new(OverlaySurface::new(Some(cc.egui_ctx.clone())));
        let session = Session::new(&preferences, egui::vec2(args.width, args.height));
        let editor = EditorContext::new(session, overlay.clone(), preferences.preview_interval());

        let mut app = Self {
            editor,
            dialogs: NativeDialogs,
            overlay,
            input: InputHandler::new(),
            prompt_text: String::new(),
        };

        if let Some(path) = args.path {
            app.editor.open_when_laid_out(path);
        }
        app
    }
}

impl eframe::App for ImageEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let interval_ms = self.editor.preview_interval().as_millis() as u64;
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.session.preferences(interval_ms));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        menu_bar(self, ctx);
        prompt_window(self, ctx);
        central_panel(self, ctx);
    }
}
