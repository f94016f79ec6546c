use crate::canvas::Canvas;
use crate::dialogs::Dialogs;
use crate::picture::Picture;
use crate::state::Session;

/// Context for command execution, providing access to the session, the
/// canvas it is presented on, and the dialogs used to talk to the user.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    pub canvas: &'a mut Canvas,
    pub dialogs: &'a mut dyn Dialogs,
}

impl<'a> CommandContext<'a> {
    pub fn new(session: &'a mut Session, canvas: &'a mut Canvas, dialogs: &'a mut dyn Dialogs) -> Self {
        Self {
            session,
            canvas,
            dialogs,
        }
    }

    /// Swap in a new picture and re-present it
    pub fn replace_picture(&mut self, picture: Picture) {
        log::debug!("Presenting {}x{} picture", picture.width(), picture.height());
        self.session.set_picture(picture);
        self.canvas.present(self.session.picture());
    }
}
