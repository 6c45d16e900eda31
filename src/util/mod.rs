pub mod files;
pub mod mime_icons;

pub use files::{bytes_to_base64, MimeType};
pub use mime_icons::{mime_to_icon, MimeIcon, MIME_ICON_DEFAULT};
