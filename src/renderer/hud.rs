//! HUD text: the score line and the font it is drawn with
//!
//! A missing or unreadable font never stops the game. The label still carries
//! its text and position, it just has no glyphs to draw.

use std::path::{Path, PathBuf};

use glam::Vec2;

use super::vertex::colors;
use crate::config::DisplayConfig;

/// Raw font file contents
#[derive(Debug, Clone)]
pub struct FontData {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl FontData {
    /// sfnt version tags for TrueType, OpenType/CFF, legacy Apple and collections
    const MAGIC: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

    /// Read a font, logging and returning `None` on any failure
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::warn!("Could not load font file {}: {}", path.display(), e);
                return None;
            }
        };
        Self::from_bytes(path, bytes)
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Option<Self> {
        let path = path.into();
        let recognized = bytes
            .get(..4)
            .is_some_and(|tag| Self::MAGIC.iter().any(|magic| magic == tag));
        if !recognized {
            log::warn!("{} is not a TrueType/OpenType font, drawing without text", path.display());
            return None;
        }
        log::info!("Loaded font {} ({} bytes)", path.display(), bytes.len());
        Some(Self { path, bytes })
    }
}

/// The "Score: N" line centred at the top of the arena
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLabel {
    pub text: String,
    /// Character size in pixels
    pub size: u32,
    /// Centre of the text box
    pub position: Vec2,
    pub color: [f32; 4],
    /// False when no font is available; presenters skip the glyphs
    pub has_glyphs: bool,
}

impl ScoreLabel {
    pub fn new(score: u32, display: &DisplayConfig, arena_width: f32, font: Option<&FontData>) -> Self {
        Self {
            text: format!("Score: {score}"),
            size: display.score_text_size,
            position: Vec2::new(arena_width / 2.0, display.score_text_y),
            color: colors::TEXT,
            has_glyphs: font.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_degrades() {
        assert!(FontData::load("fonts/definitely-missing.ttf").is_none());
    }

    #[test]
    fn test_font_magic_is_checked() {
        let ttf = FontData::from_bytes("a.ttf", vec![0, 1, 0, 0, 42]);
        assert!(ttf.is_some());
        let otf = FontData::from_bytes("a.otf", b"OTTO....".to_vec());
        assert!(otf.is_some());
        assert!(FontData::from_bytes("a.txt", b"hello".to_vec()).is_none());
        assert!(FontData::from_bytes("empty", Vec::new()).is_none());
    }

    #[test]
    fn test_score_label_layout() {
        let display = DisplayConfig::default();
        let label = ScoreLabel::new(7, &display, 800.0, None);
        assert_eq!(label.text, "Score: 7");
        assert_eq!(label.size, 20);
        assert_eq!(label.position, Vec2::new(400.0, 15.0));
        assert!(!label.has_glyphs);

        let font = FontData::from_bytes("a.ttf", vec![0, 1, 0, 0]);
        let label = ScoreLabel::new(0, &display, 800.0, font.as_ref());
        assert!(label.has_glyphs);
    }
}
