use std::fmt;
use std::path::Path;

/// Human readable list used in validation messages.
pub const SUPPORTED_TYPES_LABEL: &str = "PDF, DOCX, PNG, JPG, JPEG";

/// Extraction strategy family for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Image,
    Pdf,
    Docx,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Pdf,
    Docx,
    Jpg,
    Jpeg,
    Png,
}

impl FileExtension {
    /// Parses the extension of a declared file name, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?;
        Self::parse(ext)
    }

    pub fn parse(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Jpg | Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub fn kind(&self) -> FileKind {
        match self {
            Self::Pdf => FileKind::Pdf,
            Self::Docx => FileKind::Docx,
            Self::Jpg | Self::Jpeg | Self::Png => FileKind::Image,
        }
    }
}

/// An upload whose declared name passed the extension gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub filename: String,
    pub extension: FileExtension,
}

impl Document {
    pub fn from_filename(filename: impl Into<String>) -> Option<Self> {
        let filename = filename.into();
        let extension = FileExtension::from_filename(&filename)?;
        Some(Self {
            filename,
            extension,
        })
    }

    pub fn kind(&self) -> FileKind {
        self.extension.kind()
    }
}
