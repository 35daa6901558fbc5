// Sprite sheet loading from disk

use super::{AssetError, SpriteSheet};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Image extensions the loader is built to decode
pub const SHEET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Asset loader responsible for finding and decoding sprite sheets
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader rooted at `base_path`
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for an asset
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(name)
    }

    /// Load asset bytes from disk
    pub fn load_bytes(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.resolve_path(name);

        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
        }

        Ok(std::fs::read(&path)?)
    }

    /// Load and decode a sprite sheet
    ///
    /// The returned sheet is shared by every animation cut from it.
    pub fn load_sprite_sheet(&self, name: &str) -> Result<Arc<SpriteSheet>, AssetError> {
        let bytes = self.load_bytes(name)?;

        let image = image::load_from_memory(&bytes).map_err(|source| AssetError::Decode {
            path: self.resolve_path(name).to_string_lossy().to_string(),
            source,
        })?;

        let sheet = SpriteSheet::from_image(name, image);
        info!(
            "Loaded sprite sheet {} ({}x{})",
            name,
            sheet.width(),
            sheet.height()
        );

        Ok(Arc::new(sheet))
    }

    /// Check whether a file name carries an extension the loader decodes
    pub fn is_supported(name: &str) -> bool {
        Path::new(name)
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_ascii_lowercase();
                SHEET_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Scratch directory unique to one test, removed when dropped
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(test: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "sprite-walker-{}-{}",
                test,
                std::process::id()
            ));
            std::fs::create_dir_all(&dir).unwrap();
            Self(dir)
        }

        fn path(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_loader_path_resolution() {
        let loader = AssetLoader::new("/game/assets");
        let path = loader.resolve_path("character.png");

        assert_eq!(path.to_str().unwrap(), "/game/assets/character.png");
    }

    #[test]
    fn test_missing_sheet_is_not_found() {
        let dir = ScratchDir::new("missing");
        let loader = AssetLoader::new(dir.path());
        let err = loader.load_sprite_sheet("hunter.jpg").unwrap_err();

        assert!(matches!(err, AssetError::NotFound(ref path) if path.ends_with("hunter.jpg")));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let dir = ScratchDir::new("garbage");
        std::fs::write(dir.path().join("character.png"), b"definitely not a png").unwrap();

        let loader = AssetLoader::new(dir.path());
        let err = loader.load_sprite_sheet("character.png").unwrap_err();

        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn test_load_png_sheet() {
        let dir = ScratchDir::new("png");
        let mut image = RgbaImage::new(128, 64);
        image.put_pixel(70, 10, Rgba([255, 0, 0, 255]));
        image.save(dir.path().join("sheet.png")).unwrap();

        let loader = AssetLoader::new(dir.path());
        let sheet = loader.load_sprite_sheet("sheet.png").unwrap();

        assert_eq!(sheet.width(), 128);
        assert_eq!(sheet.height(), 64);
        assert_eq!(sheet.label(), "sheet.png");
        assert_eq!(sheet.pixels().get_pixel(70, 10), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_directory_is_not_a_sheet() {
        let dir = ScratchDir::new("dir");
        std::fs::create_dir_all(dir.path().join("nested.png")).unwrap();

        let loader = AssetLoader::new(dir.path());
        assert!(matches!(
            loader.load_bytes("nested.png"),
            Err(AssetError::NotFound(_))
        ));
    }

    #[test]
    fn test_scratch_files_removed_after_use() {
        let dir = ScratchDir::new("cleanup");
        std::fs::write(dir.path().join("character.png"), b"bytes").unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn test_supported_extensions() {
        assert!(AssetLoader::is_supported("character.png"));
        assert!(AssetLoader::is_supported("hunter.JPG"));
        assert!(AssetLoader::is_supported("hunter.jpeg"));
        assert!(!AssetLoader::is_supported("theme.ogg"));
        assert!(!AssetLoader::is_supported("README"));
    }
}
