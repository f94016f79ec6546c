mod commands;
mod context;

pub use commands::Command;
pub use context::CommandContext;
pub use crate::error::CommandResult;

/// Run a command, turning failures into the dialog the user sees.
///
/// Commands that need a picture are refused up front with the "no image"
/// message. Any other failure is logged and, unless the command only logs
/// its errors, shown in an error dialog. Returns whether the command
/// succeeded.
pub fn run(command: &Command, ctx: &mut CommandContext<'_>) -> bool {
    if command.requires_image() && ctx.session.picture().is_none() {
        let error = crate::error::EditorError::NoImage;
        log::warn!("Refusing {:?}: {}", command, error);
        ctx.dialogs.error("Error", &error.to_string());
        return false;
    }

    match command.execute(ctx) {
        Ok(()) => {
            log::debug!("Executed {:?}", command);
            true
        }
        Err(error) => {
            log::error!("{:?} failed: {}", command, error);
            if command.reports_errors() {
                ctx.dialogs.error("Error", &error.to_string());
            }
            false
        }
    }
}
