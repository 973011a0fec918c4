use crate::{Error, Result};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A decoded RGBA8 bitmap.
///
/// Clones share the pixel buffer. Every decode gets a fresh `id`, which the
/// painter uses to decide when a texture upload is needed.
#[derive(Clone)]
pub struct CrosshairImage {
    id: u64,
    width: u32,
    height: u32,
    rgba: Arc<Vec<u8>>,
}

impl std::fmt::Debug for CrosshairImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CrosshairImage {{ id: {}, {}x{} }}",
            self.id, self.width, self.height
        )
    }
}

impl PartialEq for CrosshairImage {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl CrosshairImage {
    /// Decode the file at `path`. PNG and JPEG are supported.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!("decoded {} ({width}x{height})", path.display());
        Ok(Self::from_rgba(width, height, rgba.into_raw()))
    }

    /// Wrap an already decoded buffer, `width * height * 4` bytes long.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), width as usize * height as usize * 4);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            rgba: Arc::new(rgba),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }
}
