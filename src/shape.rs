//! The closed set of shapes the cloud can morph into.

use crate::error::ShapeParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shape identifier. Used only as a dispatch key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShapeId {
    Tree,
    Diamond,
    Magazine,
    Bell,
    Firework,
    Star,
    Heart,
    Airplane,
    Toothbrush,
    Sock,
}

impl ShapeId {
    /// Every shape, in menu order.
    pub const ALL: [ShapeId; 10] = [
        ShapeId::Tree,
        ShapeId::Diamond,
        ShapeId::Magazine,
        ShapeId::Bell,
        ShapeId::Firework,
        ShapeId::Star,
        ShapeId::Heart,
        ShapeId::Airplane,
        ShapeId::Toothbrush,
        ShapeId::Sock,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Tree => "TREE",
            ShapeId::Diamond => "DIAMOND",
            ShapeId::Magazine => "MAGAZINE",
            ShapeId::Bell => "BELL",
            ShapeId::Firework => "FIREWORK",
            ShapeId::Star => "STAR",
            ShapeId::Heart => "HEART",
            ShapeId::Airplane => "AIRPLANE",
            ShapeId::Toothbrush => "TOOTHBRUSH",
            ShapeId::Sock => "SOCK",
        }
    }

    /// The rare drop. Selecting it is celebrated by the front-end.
    pub fn is_rare(self) -> bool {
        self == ShapeId::Diamond
    }

    /// One-line description handed to the text generator.
    pub fn blessing_context(self) -> &'static str {
        match self {
            ShapeId::Tree => "a traditional Christmas tree",
            ShapeId::Diamond => "a legendary diamond, the ultimate grand prize; rarity and success",
            ShapeId::Magazine => "a commemorative magazine; memories and the journey so far",
            ShapeId::Bell => "a Christmas bell; good news and joy",
            ShapeId::Firework => "fireworks; celebration and a bright future",
            ShapeId::Star => "a shining star; guidance and hope",
            ShapeId::Heart => "a heart; love and warmth",
            ShapeId::Airplane => "an airplane; travel and homecoming",
            ShapeId::Toothbrush => "a toothbrush; small daily comforts and bright smiles",
            ShapeId::Sock => "a Christmas stocking; gifts and surprises",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShapeId::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ShapeParseError(s.to_string()))
    }
}

/// Relative odds of each shape when the user asks for "the next one".
///
/// Weights need not sum to 100; shapes with weight zero can only be chosen
/// directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeWeights {
    pub tree: f32,
    pub diamond: f32,
    pub magazine: f32,
    pub bell: f32,
    pub firework: f32,
    pub star: f32,
    pub heart: f32,
    pub airplane: f32,
    pub toothbrush: f32,
    pub sock: f32,
}

impl Default for ShapeWeights {
    fn default() -> Self {
        Self {
            tree: 30.0,
            diamond: 5.0,
            magazine: 25.0,
            bell: 20.0,
            firework: 20.0,
            star: 0.0,
            heart: 0.0,
            airplane: 0.0,
            toothbrush: 0.0,
            sock: 0.0,
        }
    }
}

impl ShapeWeights {
    /// Configured weight of `shape`, never negative.
    pub fn weight(&self, shape: ShapeId) -> f32 {
        let w = match shape {
            ShapeId::Tree => self.tree,
            ShapeId::Diamond => self.diamond,
            ShapeId::Magazine => self.magazine,
            ShapeId::Bell => self.bell,
            ShapeId::Firework => self.firework,
            ShapeId::Star => self.star,
            ShapeId::Heart => self.heart,
            ShapeId::Airplane => self.airplane,
            ShapeId::Toothbrush => self.toothbrush,
            ShapeId::Sock => self.sock,
        };
        w.max(0.0)
    }

    /// Weighted random shape, never equal to `current`.
    ///
    /// If every other shape has zero weight the first other shape in
    /// [`ShapeId::ALL`] order is returned.
    pub fn pick_next<R: Rng + ?Sized>(&self, current: ShapeId, rng: &mut R) -> ShapeId {
        let candidates = ShapeId::ALL.into_iter().filter(|&s| s != current);
        let total: f32 = candidates.clone().map(|s| self.weight(s)).sum();

        if total > 0.0 {
            let mut roll = rng.gen_range(0.0..total);
            for shape in candidates.clone() {
                let w = self.weight(shape);
                if roll < w {
                    return shape;
                }
                roll -= w;
            }
            // Float rounding can leave a sliver past the last bucket.
            if let Some(last) = candidates.clone().filter(|&s| self.weight(s) > 0.0).last() {
                return last;
            }
        }

        candidates
            .into_iter()
            .next()
            .unwrap_or(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_round_trip_names() {
        for shape in ShapeId::ALL {
            assert_eq!(shape.name().parse::<ShapeId>(), Ok(shape));
        }
        assert_eq!("firework".parse::<ShapeId>(), Ok(ShapeId::Firework));
        assert_eq!(" Tree ".parse::<ShapeId>(), Ok(ShapeId::Tree));
        assert!("PYRAMID".parse::<ShapeId>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ShapeId::Toothbrush).unwrap();
        assert_eq!(json, "\"TOOTHBRUSH\"");
        let back: ShapeId = serde_json::from_str("\"BELL\"").unwrap();
        assert_eq!(back, ShapeId::Bell);
    }

    #[test]
    fn test_pick_next_excludes_current() {
        let weights = ShapeWeights::default();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..500 {
            let next = weights.pick_next(ShapeId::Tree, &mut rng);
            assert_ne!(next, ShapeId::Tree);
            assert!(weights.weight(next) > 0.0);
        }
    }

    #[test]
    fn test_pick_next_all_zero_weights() {
        let weights = ShapeWeights {
            tree: 0.0,
            diamond: 0.0,
            magazine: 0.0,
            bell: 0.0,
            firework: 0.0,
            ..ShapeWeights::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(weights.pick_next(ShapeId::Tree, &mut rng), ShapeId::Diamond);
    }

    #[test]
    fn test_pick_next_single_candidate() {
        let weights = ShapeWeights {
            tree: 0.0,
            diamond: 1.0,
            magazine: 0.0,
            bell: 0.0,
            firework: 0.0,
            ..ShapeWeights::default()
        };
        let mut rng = SmallRng::seed_from_u64(4);
        for _ in 0..50 {
            assert_eq!(weights.pick_next(ShapeId::Bell, &mut rng), ShapeId::Diamond);
        }
    }
}
