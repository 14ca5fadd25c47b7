use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// The four playable card colors. Wildness is carried by the [`Card`]
/// variant, not by a color value.
#[derive(Clone, Copy, Debug, Display, EnumString, EnumCountMacro, EnumIter, PartialEq, Eq)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u32 {
        match self {
            Color::Red => 1,
            Color::Yellow => 2,
            Color::Green => 3,
            Color::Blue => 4,
        }
    }
}

/// The face printed on a colored card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Card {
    Colored(Color, Face),
    Wild,
    WildDrawFour,
}

impl Card {
    /// The color of the card, or `None` for the two wild kinds.
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Colored(color, _) => Some(*color),
            _ => None,
        }
    }

    /// Numeric code of the card's rank: the face value for number cards,
    /// then Skip = 10, Reverse = 11, DrawTwo = 12, Wild = 13,
    /// WildDrawFour = 14. Two cards share a rank iff their codes match.
    pub fn rank_code(&self) -> u32 {
        match self {
            Card::Colored(_, Face::Number(n)) => u32::from(*n),
            Card::Colored(_, Face::Skip) => 10,
            Card::Colored(_, Face::Reverse) => 11,
            Card::Colored(_, Face::DrawTwo) => 12,
            Card::Wild => 13,
            Card::WildDrawFour => 14,
        }
    }

    /// Total-order key used only for hand presentation: colors group
    /// together (wild cards last), ranks ascend within a color.
    pub fn sort_key(&self) -> u32 {
        let color_code = match self.color() {
            Some(color) => color.code(),
            None => 5,
        };
        color_code * 100 + self.rank_code()
    }

    /// Point value counted against a losing hand at round end.
    pub fn points(&self) -> u32 {
        match self {
            Card::Colored(_, Face::Number(n)) => u32::from(*n),
            Card::Colored(_, _) => 20,
            Card::Wild | Card::WildDrawFour => 50,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, face) => {
                write!(f, "{} {}", color, {
                    match face {
                        Face::Number(n) => n.to_string(),
                        Face::Skip => "Skip".to_string(),
                        Face::Reverse => "Reverse".to_string(),
                        Face::DrawTwo => "Draw Two".to_string(),
                    }
                })
            }
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}
