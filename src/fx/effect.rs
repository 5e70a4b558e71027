//! Timed visual effect definitions.
//!
//! An `Effect` is one entry of the scheduler's slot pool. It carries its
//! own countdown and, for shakes, its own restore buffer.

use serde::{Deserialize, Serialize};

use crate::ui::{Color, Region};

/// Default pool capacity.
pub const MAX_ACTIVE_EFFECTS: usize = 8;

pub const FLASH_TICKS: u8 = 6;
pub const SHAKE_TICKS: u8 = 6;
pub const DAMAGE_NUMBER_TICKS: u8 = 30;
pub const HIGHLIGHT_TICKS: u8 = 4;

/// Most cells a shake will back up and move.
pub const SHAKE_BACKUP_CELLS: usize = 40;

/// Handle to an effect slot, valid until the effect expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectHandle(pub usize);

impl EffectHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Characters saved by a shake before it starts moving them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShakeBackup {
    /// Area actually captured, clipped to the canvas and the cell bound.
    pub region: Region,
    /// Row-major characters of `region`.
    pub cells: Vec<u8>,
}

impl ShakeBackup {
    /// One row of the saved characters.
    #[must_use]
    pub fn row(&self, row: u16) -> &[u8] {
        let width = usize::from(self.region.width);
        let start = usize::from(row) * width;
        self.cells.get(start..start + width).unwrap_or(&[])
    }

    /// Saved character at screen cell `(x, y)`, if the backup covers it.
    #[must_use]
    pub fn char_at(&self, x: u16, y: u16) -> Option<u8> {
        let Region { x: left, y: top, width, height } = self.region;
        if x < left || y < top || x - left >= width || y - top >= height {
            return None;
        }
        self.row(y - top).get(usize::from(x - left)).copied()
    }
}

/// What an effect does each frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Recolor the region on even ticks.
    Flash { color: Color },

    /// Jitter the region's characters left and right, then restore them.
    /// `backup` is filled on the first tick.
    Shake { backup: Option<ShakeBackup> },

    /// Draw a number at the region origin every tick.
    DamageNumber { value: u8, color: Color },

    /// Mark a hand slot; drawn by the combat view, not here.
    Highlight { card_index: usize },
}

/// Kind without payload, for matching and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTag {
    Flash,
    Shake,
    DamageNumber,
    Highlight,
}

impl EffectKind {
    #[must_use]
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Flash { .. } => EffectTag::Flash,
            Self::Shake { .. } => EffectTag::Shake,
            Self::DamageNumber { .. } => EffectTag::DamageNumber,
            Self::Highlight { .. } => EffectTag::Highlight,
        }
    }

    /// Ticks an effect of this kind lives for.
    #[must_use]
    pub fn duration(&self) -> u8 {
        match self {
            Self::Flash { .. } => FLASH_TICKS,
            Self::Shake { .. } => SHAKE_TICKS,
            Self::DamageNumber { .. } => DAMAGE_NUMBER_TICKS,
            Self::Highlight { .. } => HIGHLIGHT_TICKS,
        }
    }
}

/// An active effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub region: Region,
    /// Ticks left; the slot is freed when this reaches 0.
    pub timer: u8,
}

impl Effect {
    /// A fresh effect with its full duration.
    #[must_use]
    pub fn new(kind: EffectKind, region: Region) -> Self {
        let timer = kind.duration();
        Self { kind, region, timer }
    }

    #[must_use]
    pub fn tag(&self) -> EffectTag {
        self.kind.tag()
    }

    /// Whether this tick's timer value is even (flash on, shake right).
    #[must_use]
    pub fn even_tick(&self) -> bool {
        self.timer % 2 == 0
    }
}
