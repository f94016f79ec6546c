use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::EditorError;

/// One EXIF field rendered for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifEntry {
    pub tag_number: u16,
    /// Tag name when the tag is a known one
    pub name: Option<String>,
    pub value: String,
}

/// EXIF fields travelling with a picture.
///
/// Decoded images carry no metadata of their own, so the fields are read from
/// the source file once and then carried alongside the pixels through every
/// transform until they are explicitly stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExifData {
    entries: Vec<ExifEntry>,
}

impl ExifData {
    pub fn new(entries: Vec<ExifEntry>) -> Self {
        Self { entries }
    }

    /// Read the EXIF fields of the file at `path`.
    ///
    /// A file without an EXIF block yields empty data rather than an error.
    pub fn read(path: &Path) -> Result<Self, EditorError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let exif = match exif::Reader::new().read_from_container(&mut reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => return Ok(Self::default()),
            Err(err) => return Err(err.into()),
        };

        let entries = exif
            .fields()
            .map(|field| ExifEntry {
                tag_number: field.tag.number(),
                name: field.tag.description().map(|_| field.tag.to_string()),
                value: field.display_value().with_unit(&exif).to_string(),
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text shown by the "EXIF data / View" dialog
    pub fn listing(&self) -> String {
        if self.entries.is_empty() {
            return "No data.".to_owned();
        }

        let mut text = String::new();
        for entry in &self.entries {
            match &entry.name {
                Some(name) => text += &format!("{}:\t{}\n", name, entry.value),
                None => text += &format!("Ukn. -> {}: {}\n", entry.tag_number, entry.value),
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_listing() {
        assert_eq!(ExifData::default().listing(), "No data.");
    }

    #[test]
    fn test_listing_known_and_unknown_tags() {
        let data = ExifData::new(vec![
            ExifEntry {
                tag_number: 0x010f,
                name: Some("Make".to_owned()),
                value: "\"Acme\"".to_owned(),
            },
            ExifEntry {
                tag_number: 50000,
                name: None,
                value: "7".to_owned(),
            },
        ]);

        assert_eq!(data.listing(), "Make:\t\"Acme\"\nUkn. -> 50000: 7\n");
    }

    #[test]
    fn test_png_without_exif_reads_empty() {
        let path = std::env::temp_dir().join(format!("{}.png", uuid::Uuid::new_v4()));
        image::RgbImage::new(4, 4).save(&path).unwrap();

        let data = ExifData::read(&path).unwrap();
        assert!(data.is_empty());

        let _ = std::fs::remove_file(path);
    }
}
