use glam::Vec2;
use std::fmt;

/// Errors raised while building a [`Bitmap`] from raw pixel data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    /// Width or height is zero
    Empty { name: String },
    /// Pixel buffer does not hold `width * height` RGBA texels
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitmapError::Empty { name } => write!(f, "bitmap '{name}' has no pixels"),
            BitmapError::SizeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "bitmap '{name}' expected {expected} bytes of RGBA data, got {actual}"
            ),
        }
    }
}

impl std::error::Error for BitmapError {}

/// Immutable raster image with a per-pixel opacity mask
#[derive(Debug, Clone)]
pub struct Bitmap {
    name: String,
    width: u32,
    height: u32,
    rgba: Vec<u8>,
    opaque: Vec<bool>,
}

impl Bitmap {
    /// Build a bitmap from tightly packed RGBA8 pixels (row-major)
    pub fn from_rgba(
        name: impl Into<String>,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
    ) -> Result<Self, BitmapError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(BitmapError::Empty { name });
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(BitmapError::SizeMismatch {
                name,
                expected,
                actual: rgba.len(),
            });
        }

        // Any non-zero alpha counts as solid
        let opaque = rgba.chunks_exact(4).map(|px| px[3] != 0).collect();

        Ok(Self {
            name,
            width,
            height,
            rgba,
            opaque,
        })
    }

    /// Build a white bitmap whose opacity follows `mask` (row-major)
    pub fn from_mask(
        name: impl Into<String>,
        width: u32,
        height: u32,
        mask: &[bool],
    ) -> Result<Self, BitmapError> {
        let rgba = mask
            .iter()
            .flat_map(|&solid| [255, 255, 255, if solid { 255 } else { 0 }])
            .collect();
        Self::from_rgba(name, width, height, rgba)
    }

    /// Fully opaque rectangle
    pub fn solid(name: impl Into<String>, width: u32, height: u32) -> Result<Self, BitmapError> {
        let mask = vec![true; width as usize * height as usize];
        Self::from_mask(name, width, height, &mask)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Whether the pixel at local coordinates is solid; out of range is transparent
    pub fn is_opaque(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.opaque[y as usize * self.width as usize + x as usize]
    }

    /// Screen-space pixel rectangle covered when drawn at `pos`.
    ///
    /// Coordinates beyond the `i64` range saturate, so far-off objects get a
    /// clipped (possibly empty) rectangle instead of overflowing.
    pub fn footprint(&self, pos: Vec2) -> PixelRect {
        let left = pos.x.floor() as i64;
        let top = pos.y.floor() as i64;
        PixelRect {
            left,
            top,
            right: left.saturating_add(self.width as i64),
            bottom: top.saturating_add(self.height as i64),
        }
    }
}

/// Half-open integer rectangle `[left, right) x [top, bottom)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl PixelRect {
    pub fn intersection(&self, other: &PixelRect) -> Option<PixelRect> {
        let rect = PixelRect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        (rect.left < rect.right && rect.top < rect.bottom).then_some(rect)
    }
}

/// Pixel-accurate overlap test between two bitmaps placed at screen positions
pub fn bitmap_collision(a: &Bitmap, a_pos: Vec2, b: &Bitmap, b_pos: Vec2) -> bool {
    let a_rect = a.footprint(a_pos);
    let b_rect = b.footprint(b_pos);

    let Some(overlap) = a_rect.intersection(&b_rect) else {
        return false;
    };

    for y in overlap.top..overlap.bottom {
        for x in overlap.left..overlap.right {
            if a.is_opaque(x - a_rect.left, y - a_rect.top)
                && b.is_opaque(x - b_rect.left, y - b_rect.top)
            {
                return true;
            }
        }
    }

    false
}
