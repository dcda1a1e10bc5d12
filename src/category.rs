use std::convert::TryFrom;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::UNIT_MASS;
use crate::errors::{GasError, Result};
use crate::Scalar;

/// The kind of a reactive particle. Determines its mass and how it reacts when it comes close
/// to another particle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Red,
    Green,
    Blue,
    Purple,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Red,
        Category::Green,
        Category::Blue,
        Category::Purple,
    ];

    /// The categories particles may start with. Purple only ever appears through reactions.
    pub const INITIAL: [Category; 3] = [Category::Red, Category::Green, Category::Blue];

    /// Mass of this category as a multiple of `unit_mass`.
    pub fn mass(self, unit_mass: Scalar) -> Scalar {
        let multiple = match self {
            Category::Red => 1.,
            Category::Green => 2.,
            Category::Blue => 3.,
            Category::Purple => 4.,
        };
        multiple * unit_mass
    }

    /// Position in `Category::ALL`, handy for per-category tallies.
    pub fn index(self) -> usize {
        match self {
            Category::Red => 0,
            Category::Green => 1,
            Category::Blue => 2,
            Category::Purple => 3,
        }
    }

    /// The reaction table. `left` is always the particle with the lower index. Returns the new
    /// categories for `(left, right)`, or `None` if the pair doesn't react.
    ///
    /// The rules are directional: `(Green, Red)` reacts but `(Red, Green)` does not.
    pub fn react(left: Category, right: Category) -> Option<(Category, Category)> {
        use Category::*;
        match (left, right) {
            (Green, Red) => Some((Purple, Purple)),
            (Green, Blue) => Some((Red, Purple)),
            (Red, Blue) => Some((Green, Red)),
            (Purple, Purple) => Some((Blue, Green)),
            _ => None,
        }
    }

    /// Single letter label, as used by matplotlib style colour strings.
    pub fn short_label(self) -> char {
        match self {
            Category::Red => 'r',
            Category::Green => 'g',
            Category::Blue => 'b',
            Category::Purple => 'm',
        }
    }
}

/// Mass of `category` in kg, using the standard unit mass.
pub fn mass_for(category: Category) -> Scalar {
    category.mass(UNIT_MASS)
}

/// Like `mass_for`, but starting from an unvalidated label.
pub fn mass_for_label(label: &str) -> Result<Scalar> {
    label.parse().map(mass_for)
}

impl FromStr for Category {
    type Err = GasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Category::Red),
            "g" | "green" => Ok(Category::Green),
            "b" | "blue" => Ok(Category::Blue),
            "m" | "purple" | "magenta" => Ok(Category::Purple),
            _ => Err(GasError::InvalidCategory {
                label: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = GasError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Red => write!(f, "red"),
            Category::Green => write!(f, "green"),
            Category::Blue => write!(f, "blue"),
            Category::Purple => write!(f, "purple"),
        }
    }
}
