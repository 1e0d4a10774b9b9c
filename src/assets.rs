//! Text-art sprites and the asset directory they are loaded from.
//!
//! Layout under the asset root:
//!
//! ```text
//! bg/*.txt                 background slides, shown in file-name order
//! enm/live.txt, hit.txt    tank, intact and burning
//! plane/l.txt c.txt r.txt  plane banking left / level / banking right
//! plane/bomb.txt
//! icon/lives.txt, score.txt
//! ```
//!
//! A sprite that fails to load is replaced by an empty placeholder and a
//! warning is logged; the entity still exists, it just draws nothing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::entities::Facing;
use crate::error::AssetError;

/// What a sprite depicts.  Renderers use it to pick a colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Background,
    Tank,
    TankHit,
    Plane,
    Bomb,
    LivesIcon,
    ScoreIcon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Glyph rows; a space is transparent.
    pub rows: Vec<Vec<char>>,
}

impl Sprite {
    /// Parse text art.  Trailing whitespace and trailing blank lines are
    /// dropped; `None` if nothing visible is left.
    pub fn parse(kind: SpriteKind, text: &str) -> Option<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end().chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.iter().all(|row| row.is_empty()) {
            return None;
        }
        Some(Sprite { kind, rows })
    }

    pub fn load(kind: SpriteKind, path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path).map_err(|source| AssetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Sprite::parse(kind, &text).ok_or_else(|| AssetError::Empty {
            path: path.to_path_buf(),
        })
    }

    /// Stand-in for a sprite that could not be loaded.  Draws nothing.
    pub fn placeholder(kind: SpriteKind) -> Self {
        Sprite {
            kind,
            rows: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The visible glyph at (`col`, `row`), or `None` when transparent.
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .filter(|c| *c != ' ')
    }
}

fn load_or_placeholder(kind: SpriteKind, path: PathBuf) -> Sprite {
    match Sprite::load(kind, &path) {
        Ok(sprite) => {
            debug!(path = %path.display(), "sprite loaded");
            sprite
        }
        Err(e) => {
            warn!(error = %e, cause = ?std::error::Error::source(&e), "using placeholder sprite");
            Sprite::placeholder(kind)
        }
    }
}

/// Every `*.txt` under `dir`, sorted by file name.  Unreadable slides are
/// skipped.
fn load_slides(dir: &Path) -> Vec<Sprite> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "no background slides");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();

    paths
        .into_iter()
        .filter_map(|path| match Sprite::load(SpriteKind::Background, &path) {
            Ok(sprite) => Some(sprite),
            Err(e) => {
                warn!(error = %e, "skipping background slide");
                None
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Assets {
    pub slides: Vec<Sprite>,
    pub tank: Sprite,
    pub tank_hit: Sprite,
    pub plane_left: Sprite,
    pub plane_center: Sprite,
    pub plane_right: Sprite,
    pub bomb: Sprite,
    pub lives_icon: Sprite,
    pub score_icon: Sprite,
}

impl Assets {
    pub fn load(root: &Path) -> Self {
        let sprite = |kind, rel: &str| load_or_placeholder(kind, root.join(rel));
        Assets {
            slides: load_slides(&root.join("bg")),
            tank: sprite(SpriteKind::Tank, "enm/live.txt"),
            tank_hit: sprite(SpriteKind::TankHit, "enm/hit.txt"),
            plane_left: sprite(SpriteKind::Plane, "plane/l.txt"),
            plane_center: sprite(SpriteKind::Plane, "plane/c.txt"),
            plane_right: sprite(SpriteKind::Plane, "plane/r.txt"),
            bomb: sprite(SpriteKind::Bomb, "plane/bomb.txt"),
            lives_icon: sprite(SpriteKind::LivesIcon, "icon/lives.txt"),
            score_icon: sprite(SpriteKind::ScoreIcon, "icon/score.txt"),
        }
    }

    /// All placeholders, no slides.  Useful for headless runs and tests.
    pub fn empty() -> Self {
        Assets {
            slides: Vec::new(),
            tank: Sprite::placeholder(SpriteKind::Tank),
            tank_hit: Sprite::placeholder(SpriteKind::TankHit),
            plane_left: Sprite::placeholder(SpriteKind::Plane),
            plane_center: Sprite::placeholder(SpriteKind::Plane),
            plane_right: Sprite::placeholder(SpriteKind::Plane),
            bomb: Sprite::placeholder(SpriteKind::Bomb),
            lives_icon: Sprite::placeholder(SpriteKind::LivesIcon),
            score_icon: Sprite::placeholder(SpriteKind::ScoreIcon),
        }
    }

    pub fn plane(&self, facing: Facing) -> &Sprite {
        match facing {
            Facing::Left => &self.plane_left,
            Facing::Center => &self.plane_center,
            Facing::Right => &self.plane_right,
        }
    }
}
