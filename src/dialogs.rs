use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking dialogs the commands need. Every picker returns `None` when the
/// user cancels.
pub trait Dialogs {
    fn pick_image(&mut self, title: &str) -> Option<PathBuf>;

    /// Destination for "Save as…"; defaults to a `.png` extension
    fn pick_save_path(&mut self) -> Option<PathBuf>;

    /// OK/Cancel question; true on OK
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    fn info(&mut self, title: &str, message: &str);

    fn error(&mut self, title: &str, message: &str);
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff"];

/// Native dialogs from the platform
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl Dialogs for NativeDialogs {
    fn pick_image(&mut self, title: &str) -> Option<PathBuf> {
        FileDialog::new()
            .set_title(title)
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        let path = FileDialog::new()
            .set_title("Save as")
            .add_filter("Image", &["png"])
            .add_filter("All files", &["*"])
            .set_file_name("untitled.png")
            .save_file()?;
        Some(with_default_extension(path))
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        matches!(result, MessageDialogResult::Ok)
    }

    fn info(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extension() {
        assert_eq!(with_default_extension(PathBuf::from("out")), PathBuf::from("out.png"));
        assert_eq!(with_default_extension(PathBuf::from("out.jpg")), PathBuf::from("out.jpg"));
    }
}
