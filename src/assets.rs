//! Sprite asset resolution and decoding.
//!
//! Images are decoded into plain RGBA buffers here so the windowing layer
//! only has to upload them; nothing in this module touches the GPU.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::config::{ASSET_DIR_ENV, ASSET_SUBDIR, BULLET_IMAGE, ENEMY_IMAGE, PLAYER_IMAGE};
use crate::entities::{Size, SpriteSizes};

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Cannot find file: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{} is {width}x{height}, larger than a texture can hold", .path.display())]
    TooLarge { path: PathBuf, width: u32, height: u32 },
}

impl AssetError {
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::Unreadable { path, .. }
            | Self::Decode { path, .. }
            | Self::TooLarge { path, .. } => path,
        }
    }

    /// Short category name shown in the startup report.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "FileNotFound",
            Self::Unreadable { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                "PermissionDenied"
            }
            Self::Unreadable { .. } => "IoError",
            Self::Decode { .. } => "DecodeError",
            Self::TooLarge { .. } => "ImageTooLarge",
        }
    }
}

// ── Paths ─────────────────────────────────────────────────────────────────────

/// Absolute locations of the three sprite images.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub root: PathBuf,
    pub player: PathBuf,
    pub enemy: PathBuf,
    pub bullet: PathBuf,
}

impl AssetPaths {
    /// Paths under `<base>/assets/`.
    pub fn under(base: &Path) -> Self {
        let root = absolutize(base);
        let dir = root.join(ASSET_SUBDIR);
        Self {
            player: dir.join(PLAYER_IMAGE),
            enemy: dir.join(ENEMY_IMAGE),
            bullet: dir.join(BULLET_IMAGE),
            root,
        }
    }

    /// Labelled paths in load order.
    pub fn labelled(&self) -> [(&'static str, &Path); 3] {
        [
            ("Player", self.player.as_path()),
            ("Enemy", self.enemy.as_path()),
            ("Bullet", self.bullet.as_path()),
        ]
    }
}

/// Directory that holds `assets/`: the override variable if set, otherwise
/// the directory of the running executable.
pub fn asset_base() -> PathBuf {
    asset_base_from(std::env::var_os(ASSET_DIR_ENV))
}

/// `asset_base` with the override value passed in rather than read from
/// the process environment.
pub fn asset_base_from(override_dir: Option<OsString>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

// ── Images ────────────────────────────────────────────────────────────────────

/// A decoded image as tightly packed RGBA8 rows.
#[derive(Clone, Debug)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    /// Bounding-box size derived from the pixel dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }
}

#[derive(Clone, Debug)]
pub struct SpriteSheet {
    pub player: SpriteImage,
    pub enemy: SpriteImage,
    pub bullet: SpriteImage,
}

impl SpriteSheet {
    pub fn sizes(&self) -> SpriteSizes {
        SpriteSizes {
            player: self.player.size(),
            enemy: self.enemy.size(),
            bullet: self.bullet.size(),
        }
    }
}

/// Load all three sprites.  Existence of every file is checked before any
/// decoding so a missing file is always reported as such.
pub fn load_sprites(paths: &AssetPaths) -> Result<SpriteSheet, AssetError> {
    for (_, path) in paths.labelled() {
        if !path.exists() {
            return Err(AssetError::NotFound { path: path.to_path_buf() });
        }
    }

    Ok(SpriteSheet {
        player: load_sprite(&paths.player)?,
        enemy: load_sprite(&paths.enemy)?,
        bullet: load_sprite(&paths.bullet)?,
    })
}

pub fn load_sprite(path: &Path) -> Result<SpriteImage, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound { path: path.to_path_buf() },
        _ => AssetError::Unreadable { path: path.to_path_buf(), source },
    })?;

    let img = image::load_from_memory(&bytes)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?;

    let (width, height) = (img.width(), img.height());
    // Textures are addressed with u16 dimensions.
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(AssetError::TooLarge { path: path.to_path_buf(), width, height });
    }

    info!("loaded sprite {} ({}x{})", path.display(), width, height);
    Ok(SpriteImage {
        width,
        height,
        rgba: img.to_rgba8().into_raw(),
    })
}
