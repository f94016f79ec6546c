use std::path::PathBuf;

use egui::Pos2;

use super::{CommandContext, CommandResult};
use crate::canvas::{Element, FOOTER_HEIGHT, Footer, InsertedPicture, Widget};
use crate::error::{EditorError, INSERT_SIZE_RANGE};
use crate::ops::{self, FilterKind, FlipAxis};
use crate::picture::Picture;

/// Everything the menus and gestures can ask the editor to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask for a file and open it
    Open,
    OpenPath(PathBuf),
    Save,
    SaveAs,
    Rotate,
    Flip(FlipAxis),
    Filter(FilterKind),
    Resize { width: i64, height: i64 },
    /// Crop to the rectangle spanned by two canvas points, in any order
    Crop { from: Pos2, to: Pos2 },
    AddElement(Element),
    ViewExif,
    RemoveExif,
    /// Re-present the picture, dropping freehand drawing and inserted shapes
    RemoveDrawing,
    InsertFooter,
    InsertPicture { path: PathBuf, size: i64, at: Pos2 },
}

impl Command {
    /// Commands that are refused with the "no image" dialog when nothing is open
    pub fn requires_image(&self) -> bool {
        match self {
            Command::Open
            | Command::OpenPath(_)
            | Command::AddElement(_)
            | Command::RemoveDrawing
            | Command::InsertPicture { .. } => false,
            Command::Save
            | Command::SaveAs
            | Command::Rotate
            | Command::Flip(_)
            | Command::Filter(_)
            | Command::Resize { .. }
            | Command::Crop { .. }
            | Command::ViewExif
            | Command::RemoveExif
            | Command::InsertFooter => true,
        }
    }

    /// Whether a failure is shown to the user or only logged.
    ///
    /// "Remove drawing" is not guarded by the image check and its failure is
    /// only logged; this is long-standing behaviour kept on purpose.
    pub fn reports_errors(&self) -> bool {
        !matches!(self, Command::RemoveDrawing)
    }

    /// Execute the command with the given context
    pub fn execute(&self, ctx: &mut CommandContext<'_>) -> CommandResult {
        match self {
            Command::Open => {
                let Some(path) = ctx.dialogs.pick_image("Open") else {
                    return Ok(());
                };
                open_picture(ctx, path)
            }

            Command::OpenPath(path) => open_picture(ctx, path.clone()),

            Command::Save => {
                if !ctx
                    .dialogs
                    .confirm("Confirm", "Are you sure you wish to overwrite the file?")
                {
                    return Ok(());
                }
                let path = match ctx.session.path() {
                    Some(path) => path.to_path_buf(),
                    None => match ctx.dialogs.pick_save_path() {
                        Some(path) => path,
                        None => return Ok(()),
                    },
                };
                save_flattened(ctx, path)
            }

            Command::SaveAs => {
                let Some(path) = ctx.dialogs.pick_save_path() else {
                    return Ok(());
                };
                save_flattened(ctx, path)
            }

            Command::Rotate => {
                let rotated = ops::rotate(ctx.session.require_picture()?);
                let fitted = ops::fit_to(&rotated, ctx.session.canvas_size());
                ctx.replace_picture(fitted);
                Ok(())
            }

            Command::Flip(axis) => {
                let flipped = ops::flip(ctx.session.require_picture()?, *axis);
                let fitted = ops::fit_to(&flipped, ctx.session.canvas_size());
                ctx.replace_picture(fitted);
                Ok(())
            }

            Command::Filter(kind) => {
                let filtered = ops::filter(ctx.session.require_picture()?, *kind);
                ctx.replace_picture(filtered);
                Ok(())
            }

            Command::Resize { width, height } => {
                let resized = ops::resize(ctx.session.require_picture()?, *width, *height)?;
                ctx.replace_picture(resized);
                Ok(())
            }

            Command::Crop { from, to } => {
                let cropped = ops::crop(ctx.session.require_picture()?, *from, *to)?;
                ctx.replace_picture(cropped);
                Ok(())
            }

            Command::AddElement(element) => {
                ctx.canvas.add_element(*element);
                Ok(())
            }

            Command::ViewExif => {
                let listing = ctx.session.require_picture()?.exif().listing();
                ctx.dialogs.info("EXIF Data", &listing);
                Ok(())
            }

            Command::RemoveExif => {
                let stripped = ops::strip_exif(ctx.session.require_picture()?);
                ctx.replace_picture(stripped);
                ctx.dialogs.info("EXIF Data", "Data removed.");
                Ok(())
            }

            Command::RemoveDrawing => {
                let picture = ctx.session.require_picture()?.clone();
                ctx.replace_picture(picture);
                Ok(())
            }

            Command::InsertFooter => {
                let picture = ctx.session.require_picture()?;
                let top = picture.height() as f32 - FOOTER_HEIGHT;
                let width = picture.width() as f32;
                ctx.canvas.add_widget(Widget::Footer(Footer::new(top, width)));
                Ok(())
            }

            Command::InsertPicture { path, size, at } => {
                if !INSERT_SIZE_RANGE.contains(size) {
                    return Err(EditorError::invalid_insert_size());
                }
                let edge = *size as u32;
                let image = Picture::open(path)?
                    .pixels()
                    .resize_exact(edge, edge, image::imageops::FilterType::CatmullRom)
                    .to_rgba8();
                ctx.canvas
                    .add_widget(Widget::Picture(InsertedPicture::new(*at, image)));
                Ok(())
            }
        }
    }
}

/// Load `path` scaled to fit the canvas; it becomes the save target
fn open_picture(ctx: &mut CommandContext<'_>, path: PathBuf) -> CommandResult {
    let picture = Picture::open(&path)?;
    let fitted = ops::fit_to(&picture, ctx.session.canvas_size());
    log::info!(
        "Opened {} ({}x{}, shown at {}x{})",
        path.display(),
        picture.width(),
        picture.height(),
        fitted.width(),
        fitted.height()
    );
    ctx.session.set_path(path);
    ctx.canvas.clear_overlays();
    ctx.replace_picture(fitted);
    Ok(())
}

/// Bake the canvas into pixels, write them to `path`, and carry on editing
/// the baked result.
fn save_flattened(ctx: &mut CommandContext<'_>, path: PathBuf) -> CommandResult {
    let flattened = Picture::from_pixels(ctx.canvas.flatten(ctx.session.require_picture()?));
    flattened.save(&path)?;
    ctx.canvas.clear_overlays();
    ctx.replace_picture(flattened);
    Ok(())
}
