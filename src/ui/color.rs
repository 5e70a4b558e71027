//! Palette colors.

use serde::{Deserialize, Serialize};

/// A palette index (16-color C64 palette).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(1);
    pub const RED: Self = Self(2);
    pub const CYAN: Self = Self(3);
    pub const PURPLE: Self = Self(4);
    pub const GREEN: Self = Self(5);
    pub const BLUE: Self = Self(6);
    pub const YELLOW: Self = Self(7);
    pub const ORANGE: Self = Self(8);
    pub const BROWN: Self = Self(9);
    pub const LIGHT_RED: Self = Self(10);
    pub const GRAY1: Self = Self(11);
    pub const GRAY2: Self = Self(12);
    pub const LIGHT_GREEN: Self = Self(13);
    pub const LIGHT_BLUE: Self = Self(14);
    pub const GRAY3: Self = Self(15);
}
