mod context;
mod mode;
mod prompt;
mod session;
mod style;

pub use context::EditorContext;
pub use mode::EditorMode;
pub use prompt::{Prompt, PromptOutcome};
pub use session::Session;
pub use style::SharedStyle;
