use std::path::Path;

use crate::error::InputError;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "heic"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFileKind {
    Text,
    Image,
    Unsupported,
}

/// Classify an uploaded menu by extension. Files without one are read as text.
pub fn classify(path: &Path) -> MenuFileKind {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return MenuFileKind::Text;
    };

    let ext = ext.to_ascii_lowercase();
    if ext == "txt" {
        MenuFileKind::Text
    } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        MenuFileKind::Image
    } else {
        MenuFileKind::Unsupported
    }
}

/// Read a plain-text menu file. Images and other formats are refused.
pub async fn read_menu_file(path: &Path) -> Result<String, InputError> {
    match classify(path) {
        MenuFileKind::Image => Err(InputError::ImageNotSupported),
        MenuFileKind::Unsupported => Err(InputError::UnsupportedFile(path.display().to_string())),
        MenuFileKind::Text => {
            let text = tokio::fs::read_to_string(path).await?;
            tracing::debug!("Read {} bytes of menu text from {}", text.len(), path.display());
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(Path::new("menu.txt")), MenuFileKind::Text);
        assert_eq!(classify(Path::new("MENU.TXT")), MenuFileKind::Text);
        assert_eq!(classify(Path::new("menu")), MenuFileKind::Text);
        assert_eq!(classify(Path::new("photo.JPG")), MenuFileKind::Image);
        assert_eq!(classify(Path::new("menu.pdf")), MenuFileKind::Unsupported);
    }

    #[tokio::test]
    async fn test_image_is_refused_without_reading() {
        let result = read_menu_file(Path::new("does-not-exist.png")).await;
        assert!(matches!(result, Err(InputError::ImageNotSupported)));
    }

    #[tokio::test]
    async fn test_reads_text_file() {
        let path = std::env::temp_dir().join(format!("guard-menu-{}.txt", std::process::id()));
        tokio::fs::write(&path, "Beef Stew $12\n").await.unwrap();

        let text = read_menu_file(&path).await.unwrap();
        assert_eq!(text, "Beef Stew $12\n");

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_text_file_is_io_error() {
        let result = read_menu_file(Path::new("/nonexistent/guard/menu.txt")).await;
        assert!(matches!(result, Err(InputError::Io(_))));
    }
}
