//! Creature entity: identity, color, placement, and breeding.

use crate::data::color::Rgb;
use crate::error::SimError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// World position of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Offspring color assignment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMethod {
    /// Offspring inherits one parent's color, chosen uniformly.
    #[default]
    Discrete,
    /// Offspring takes the per-channel rounded mean of both parents.
    Mean,
}

impl std::str::FromStr for ColorMethod {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discrete" => Ok(Self::Discrete),
            "mean" => Ok(Self::Mean),
            other => Err(SimError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// A simulated individual.
///
/// The identifier is assigned at creation and never reused; the mutant
/// flag is fixed for life. A creature without a position has either not
/// been placed yet or has been removed from the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub color: Rgb,
    pub position: Option<Position>,
    pub is_mutant: bool,
}

impl Creature {
    /// Creates an unplaced, non-mutant creature with a fresh identity.
    #[must_use]
    pub fn new(color: Rgb) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            position: None,
            is_mutant: false,
        }
    }

    /// Creates an unplaced, non-mutant creature drawing its identity
    /// from `rng`.
    pub fn new_with_rng<R: Rng + ?Sized>(color: Rgb, rng: &mut R) -> Self {
        Self {
            id: Uuid::from_u128(rng.gen()),
            color,
            position: None,
            is_mutant: false,
        }
    }

    /// Euclidean distance to `other`, or `None` when either creature is
    /// unplaced. Callers must branch on presence; an undefined distance
    /// is not zero.
    #[must_use]
    pub fn distance(&self, other: &Creature) -> Option<f64> {
        match (self.position, other.position) {
            (Some(a), Some(b)) => Some(a.distance_to(&b)),
            _ => None,
        }
    }

    /// Attempts to breed with `other`, yielding an offspring when the
    /// parents' colors are similar enough.
    ///
    /// `min_color_similarity` and `chance_mutant` must lie in `[0, 1]`.
    /// A similarity below the gate is a refusal (`Ok(None)`), not an
    /// error. A mutant offspring receives an independently drawn random
    /// color; otherwise the color follows `color_method`. The offspring
    /// starts unplaced, with an identity independent of both parents.
    pub fn breed_with_rng<R: Rng + ?Sized>(
        &self,
        other: &Creature,
        min_color_similarity: f64,
        chance_mutant: f64,
        color_method: ColorMethod,
        rng: &mut R,
    ) -> Result<Option<Creature>, SimError> {
        for (name, value) in [
            ("min_color_similarity", min_color_similarity),
            ("chance_mutant", chance_mutant),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::unit_interval(name, value));
            }
        }

        if self.color.similarity(&other.color) < min_color_similarity {
            return Ok(None);
        }

        let is_mutant = rng.gen_bool(chance_mutant);
        let color = if is_mutant {
            Rgb::random_with_rng(rng)
        } else {
            match color_method {
                ColorMethod::Discrete => {
                    if rng.gen_bool(0.5) {
                        self.color
                    } else {
                        other.color
                    }
                }
                ColorMethod::Mean => self.color.midpoint(&other.color),
            }
        };

        Ok(Some(Creature {
            id: Uuid::from_u128(rng.gen()),
            color,
            position: None,
            is_mutant,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn placed(color: Rgb, x: f64, y: f64) -> Creature {
        let mut creature = Creature::new(color);
        creature.position = Some(Position { x, y });
        creature
    }

    #[test]
    fn test_new_creature_is_unplaced() {
        let creature = Creature::new(Rgb::new(1, 2, 3).unwrap());
        assert!(creature.position.is_none());
        assert!(!creature.is_mutant);
    }

    #[test]
    fn test_identities_are_unique() {
        let color = Rgb::new(0, 0, 0).unwrap();
        assert_ne!(Creature::new(color).id, Creature::new(color).id);
    }

    #[test]
    fn test_distance_exact() {
        let color = Rgb::new(0, 0, 0).unwrap();
        let a = placed(color, 0.0, 0.0);
        let b = placed(color, 3.0, 4.0);
        assert_eq!(a.distance(&b), Some(5.0));
    }

    #[test]
    fn test_distance_undefined_when_unplaced() {
        let color = Rgb::new(0, 0, 0).unwrap();
        let placed_one = placed(color, 1.0, 1.0);
        let unplaced = Creature::new(color);
        assert_eq!(placed_one.distance(&unplaced), None);
        assert_eq!(unplaced.distance(&placed_one), None);
        assert_eq!(unplaced.distance(&unplaced), None);
    }

    #[test]
    fn test_color_method_from_str() {
        assert_eq!("discrete".parse::<ColorMethod>(), Ok(ColorMethod::Discrete));
        assert_eq!("mean".parse::<ColorMethod>(), Ok(ColorMethod::Mean));
        assert_eq!(
            "rgb_avg".parse::<ColorMethod>(),
            Err(SimError::UnsupportedMethod("rgb_avg".to_string()))
        );
    }

    #[test]
    fn test_breed_rejects_invalid_parameters() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let a = Creature::new(Rgb::new(0, 0, 0).unwrap());
        let b = Creature::new(Rgb::new(0, 0, 0).unwrap());
        let result = a.breed_with_rng(&b, 1.5, 0.0, ColorMethod::Discrete, &mut rng);
        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                name: "min_color_similarity",
                ..
            })
        ));
        let result = a.breed_with_rng(&b, 0.0, -0.2, ColorMethod::Discrete, &mut rng);
        assert!(matches!(
            result,
            Err(SimError::InvalidParameter {
                name: "chance_mutant",
                ..
            })
        ));
    }

    #[test]
    fn test_breed_refuses_dissimilar_colors() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let red = Creature::new(Rgb::new(255, 0, 0).unwrap());
        let blue = Creature::new(Rgb::new(0, 0, 255).unwrap());
        for _ in 0..50 {
            let child = red
                .breed_with_rng(&blue, 1.0, 0.0, ColorMethod::Discrete, &mut rng)
                .unwrap();
            assert!(child.is_none());
        }
    }

    #[test]
    fn test_breed_never_refuses_at_zero_gate() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let red = Creature::new(Rgb::new(255, 0, 0).unwrap());
        let blue = Creature::new(Rgb::new(0, 0, 255).unwrap());
        for _ in 0..50 {
            let child = red
                .breed_with_rng(&blue, 0.0, 0.0, ColorMethod::Discrete, &mut rng)
                .unwrap();
            assert!(child.is_some());
        }
    }

    #[test]
    fn test_breed_discrete_inherits_a_parent_color() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let a = Creature::new(Rgb::new(10, 10, 10).unwrap());
        let b = Creature::new(Rgb::new(200, 200, 200).unwrap());
        for _ in 0..50 {
            let child = a
                .breed_with_rng(&b, 0.0, 0.0, ColorMethod::Discrete, &mut rng)
                .unwrap()
                .unwrap();
            assert!(child.color == a.color || child.color == b.color);
            assert!(!child.is_mutant);
        }
    }

    #[test]
    fn test_breed_mean_takes_midpoint() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let a = Creature::new(Rgb::new(10, 0, 100).unwrap());
        let b = Creature::new(Rgb::new(20, 50, 200).unwrap());
        let child = a
            .breed_with_rng(&b, 0.0, 0.0, ColorMethod::Mean, &mut rng)
            .unwrap()
            .unwrap();
        assert_eq!(child.color, a.color.midpoint(&b.color));
    }

    #[test]
    fn test_breed_certain_mutation_yields_mutant() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let a = Creature::new(Rgb::new(0, 0, 0).unwrap());
        let b = Creature::new(Rgb::new(0, 0, 0).unwrap());
        for _ in 0..50 {
            let child = a
                .breed_with_rng(&b, 0.0, 1.0, ColorMethod::Discrete, &mut rng)
                .unwrap()
                .unwrap();
            assert!(child.is_mutant);
        }
    }

    #[test]
    fn test_creature_serde_round_trip() {
        let creature = placed(Rgb::new(12, 34, 56).unwrap(), 1.5, -2.5);
        let json = serde_json::to_string(&creature).unwrap();
        let back: Creature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, creature);
    }

    #[test]
    fn test_offspring_identity_independent_of_parents() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let a = Creature::new(Rgb::new(0, 0, 0).unwrap());
        let b = Creature::new(Rgb::new(0, 0, 0).unwrap());
        let child = a
            .breed_with_rng(&b, 0.0, 0.0, ColorMethod::Discrete, &mut rng)
            .unwrap()
            .unwrap();
        assert_ne!(child.id, a.id);
        assert_ne!(child.id, b.id);
        assert!(child.position.is_none());
    }
}
