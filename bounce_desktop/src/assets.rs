//! Sprite loading
//!
//! Decodes image files into RGBA8 and wraps them as simulation bitmaps.

use anyhow::{bail, Context, Result};
use bounce_core::{Bitmap, Config};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Load one image file as a named bitmap
pub fn load_bitmap(name: &str, path: &Path) -> Result<Bitmap> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load {name} from {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();

    let bitmap = Bitmap::from_rgba(name, width, height, image.into_raw())
        .with_context(|| format!("Invalid image data in {}", path.display()))?;
    log::info!("Loaded {name} ({width}x{height}) from {}", path.display());
    Ok(bitmap)
}

/// Load every sprite of the configured roster, in roster order.
///
/// Sprite names must be unique: the renderer uploads one texture per name.
pub fn load_roster(config: &Config) -> Result<Vec<Arc<Bitmap>>> {
    let mut seen = HashSet::new();
    for sprite in &config.sprites {
        if !seen.insert(sprite.name.as_str()) {
            bail!("Duplicate sprite name '{}' in roster", sprite.name);
        }
    }

    config
        .sprites
        .iter()
        .map(|sprite| load_bitmap(&sprite.name, &config.sprite_path(sprite)).map(Arc::new))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn temp_png(name: &str, image: &ImageBuffer<Rgba<u8>, Vec<u8>>) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("bounce_{}_{name}.png", std::process::id()));
        image.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_bitmap_keeps_alpha() {
        let mut image = ImageBuffer::from_pixel(3, 2, Rgba([200, 10, 10, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let path = temp_png("alpha", &image);

        let bitmap = load_bitmap("Pig", &path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(bitmap.name(), "Pig");
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert!(!bitmap.is_opaque(0, 0));
        assert!(bitmap.is_opaque(2, 1));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_bitmap("Ghost", Path::new("definitely/not/here.webp")).unwrap_err();
        assert!(err.to_string().contains("Failed to load Ghost"));
    }

    #[test]
    fn test_load_roster_rejects_duplicate_names() {
        let mut config = Config::new();
        config.sprites[2].name = config.sprites[0].name.clone();
        let err = load_roster(&config).unwrap_err();
        assert!(err.to_string().contains("Duplicate sprite name 'Pig'"));
    }

    #[test]
    fn test_load_roster_fails_on_first_missing_sprite() {
        let mut config = Config::new();
        config.asset_dir = std::env::temp_dir().join("bounce_no_such_assets");
        let err = load_roster(&config).unwrap_err();
        assert!(format!("{err:#}").contains("pig.png"));
    }
}
