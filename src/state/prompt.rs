use std::path::PathBuf;

use egui::Pos2;

use crate::command::Command;

/// An integer question the editor is waiting on
#[derive(Debug, Clone, PartialEq)]
pub enum Prompt {
    ResizeWidth { current_width: u32, current_height: u32 },
    ResizeHeight { width: i64, current_height: u32 },
    InsertSize { path: PathBuf, at: Pos2 },
}

/// What answering a prompt leads to
#[derive(Debug)]
pub enum PromptOutcome {
    /// Ask the follow-up question
    Next(Prompt),
    Run(Command),
    /// The user cancelled; nothing happens
    Dismissed,
}

impl Prompt {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ResizeWidth { .. } => "Enter new width",
            Self::ResizeHeight { .. } => "Enter new height",
            Self::InsertSize { .. } => "Enter image dimensions",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::ResizeWidth { current_width, .. } => {
                format!("Enter the new image width\n(the current width is {current_width}).")
            }
            Self::ResizeHeight { current_height, .. } => {
                format!("Enter the new image height\n(the current height is {current_height}).")
            }
            Self::InsertSize { .. } => "Enter the width/height for the square image.".to_owned(),
        }
    }

    /// `None` means the prompt was cancelled
    pub fn submit(self, value: Option<i64>) -> PromptOutcome {
        let Some(value) = value else {
            log::debug!("{} cancelled", self.title());
            return PromptOutcome::Dismissed;
        };

        match self {
            Self::ResizeWidth { current_height, .. } => PromptOutcome::Next(Self::ResizeHeight {
                width: value,
                current_height,
            }),
            Self::ResizeHeight { width, .. } => PromptOutcome::Run(Command::Resize {
                width,
                height: value,
            }),
            Self::InsertSize { path, at } => PromptOutcome::Run(Command::InsertPicture {
                path,
                size: value,
                at,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_asks_width_then_height() {
        let prompt = Prompt::ResizeWidth {
            current_width: 640,
            current_height: 480,
        };
        assert!(prompt.message().contains("640"));

        let PromptOutcome::Next(height) = prompt.submit(Some(320)) else {
            panic!("expected a height prompt");
        };
        assert!(height.message().contains("480"));

        assert!(matches!(
            height.submit(Some(200)),
            PromptOutcome::Run(Command::Resize {
                width: 320,
                height: 200
            })
        ));
    }

    #[test]
    fn test_cancel_dismisses() {
        let prompt = Prompt::InsertSize {
            path: PathBuf::from("a.png"),
            at: Pos2::ZERO,
        };
        assert!(matches!(prompt.submit(None), PromptOutcome::Dismissed));
    }
}
