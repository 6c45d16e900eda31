use crate::util::files::MimeType;

/// Display icon and accent color for a document's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MimeIcon {
    pub icon: &'static str,
    pub color: &'static str,
}

pub const MIME_ICON_DEFAULT: MimeIcon = MimeIcon {
    icon: "mdi-text-box",
    color: "grey",
};

/// Icon lookup for a raw mime string; unknown types get the grey default.
pub fn mime_to_icon(mime: &str) -> MimeIcon {
    let Ok(mime) = mime.parse::<MimeType>() else {
        return MIME_ICON_DEFAULT;
    };

    match mime {
        MimeType::Pdf => MimeIcon {
            icon: "mdi-file-pdf-box",
            color: "#dc1d23",
        },
        MimeType::Docx => MimeIcon {
            icon: "mdi-file-word-box",
            color: "#295294",
        },
        MimeType::Xlsx => MimeIcon {
            icon: "mdi-file-table-box",
            color: "#006f39",
        },
        MimeType::Pptx => MimeIcon {
            icon: "mdi-file-presentation-box",
            color: "#ca4223",
        },
        MimeType::Jpeg => MimeIcon {
            icon: "mdi-file-jpg-box",
            color: "#e4ba29",
        },
        MimeType::Png => MimeIcon {
            icon: "mdi-file-png-box",
            color: "#e4ba29",
        },
        MimeType::Markdown => MIME_ICON_DEFAULT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mime_gets_dedicated_icon() {
        let icon = mime_to_icon("application/pdf");
        assert_eq!(icon.icon, "mdi-file-pdf-box");
        assert_eq!(icon.color, "#dc1d23");
    }

    #[test]
    fn test_unknown_mime_falls_back_to_default() {
        assert_eq!(mime_to_icon("application/zip"), MIME_ICON_DEFAULT);
        assert_eq!(mime_to_icon(""), MIME_ICON_DEFAULT);
    }

    #[test]
    fn test_markdown_uses_text_icon() {
        assert_eq!(mime_to_icon("text/markdown"), MIME_ICON_DEFAULT);
    }
}
