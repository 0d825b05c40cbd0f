//! Frontier policies: which Frontier location gets colored next.
//!
//! [`FrontierPolicy::Random`] draws uniformly. [`FrontierPolicy::Preferred`]
//! draws `samples` candidates uniformly and keeps the one with the highest
//! preference value. Preference values are computed once, when a location
//! enters the Frontier, and never updated.

use rand::{Rng, RngCore};

use super::region::{Body, RegionState};
use crate::grid::Location;
use crate::noise::PerlinNoise;

/// How a preferred policy scores a Frontier location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Preference {
    /// Negative squared distance to a goal location. The goal is re-picked
    /// uniformly over the grid whenever it has been colored.
    #[default]
    Goal,
    /// Fractal Perlin noise sampled at the location.
    Perlin { grid_size: f64, octaves: u32 },
}

/// Strategy for picking the next Frontier location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrontierPolicy {
    /// Uniform over the Frontier.
    #[default]
    Random,
    /// Best of `samples` uniform draws by [`Preference`].
    Preferred { samples: usize, preference: Preference },
}

/// Runtime state behind a [`FrontierPolicy`].
#[derive(Debug, Clone)]
pub(crate) enum PreferenceField {
    Flat,
    Goal { goal: Option<Location> },
    Noise(Box<PerlinNoise>),
}

impl PreferenceField {
    pub(crate) fn for_policy(policy: &FrontierPolicy, rng: &mut dyn RngCore) -> Self {
        match *policy {
            FrontierPolicy::Random => PreferenceField::Flat,
            FrontierPolicy::Preferred { preference, .. } => match preference {
                Preference::Goal => PreferenceField::Goal { goal: None },
                Preference::Perlin { grid_size, octaves } => PreferenceField::Noise(Box::new(
                    PerlinNoise::new(rng)
                        .with_grid_size(grid_size)
                        .with_octaves(octaves),
                )),
            },
        }
    }

    /// Preference of `location` at the moment it enters the Frontier.
    pub(crate) fn evaluate(&mut self, location: Location, body: &Body, rng: &mut dyn RngCore) -> f64 {
        match self {
            PreferenceField::Flat => 0.0,
            PreferenceField::Goal { goal } => {
                let target = match *goal {
                    Some(current) if !body.contains(current) => current,
                    _ => {
                        let size = body.size();
                        let picked = size.location_at(rng.gen_range(0..size.area()));
                        *goal = Some(picked);
                        picked
                    }
                };
                -location.distance_squared(target)
            }
            PreferenceField::Noise(noise) => {
                noise.sample(f64::from(location.x), f64::from(location.y))
            }
        }
    }
}

impl FrontierPolicy {
    /// Dense Frontier index of the next location to color.
    ///
    /// The Frontier must not be empty.
    pub(crate) fn choose(&self, region: &RegionState, rng: &mut dyn RngCore) -> usize {
        let len = region.frontier_len();
        debug_assert!(len > 0);
        match *self {
            FrontierPolicy::Random => rng.gen_range(0..len),
            FrontierPolicy::Preferred { samples, .. } => {
                let mut best = rng.gen_range(0..len);
                let mut best_value = region.preference(region.frontier_at(best));
                for _ in 1..samples {
                    let candidate = rng.gen_range(0..len);
                    let value = region.preference(region.frontier_at(candidate));
                    if value > best_value {
                        best = candidate;
                        best_value = value;
                    }
                }
                best
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flat_field_is_zero() {
        let region = RegionState::new(GridSize::new(4, 4).unwrap());
        let mut rng = StdRng::seed_from_u64(0);
        let mut field = PreferenceField::for_policy(&FrontierPolicy::Random, &mut rng);
        assert_eq!(field.evaluate(Location::new(3, 3), region.body(), &mut rng), 0.0);
    }

    #[test]
    fn test_goal_is_stable_until_colored() {
        let mut region = RegionState::new(GridSize::new(8, 8).unwrap());
        let mut rng = StdRng::seed_from_u64(5);
        let policy = FrontierPolicy::Preferred {
            samples: 4,
            preference: Preference::Goal,
        };
        let mut field = PreferenceField::for_policy(&policy, &mut rng);

        field.evaluate(Location::new(0, 0), region.body(), &mut rng);
        let goal = match field {
            PreferenceField::Goal { goal: Some(goal) } => goal,
            _ => panic!("goal not picked"),
        };
        assert_eq!(field.evaluate(goal, region.body(), &mut rng), 0.0);

        region.discover(goal, 0.0);
        region.take_frontier_at(0);
        region.fill(goal, crate::Color::BLACK);
        // A colored goal is re-picked, which consumes randomness.
        let mut untouched = rng.clone();
        field.evaluate(Location::new(0, 0), region.body(), &mut rng);
        assert_ne!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_preferred_picks_highest_sampled_value() {
        let mut region = RegionState::new(GridSize::new(4, 1).unwrap());
        region.discover(Location::new(0, 0), -5.0);
        region.discover(Location::new(1, 0), 3.0);
        region.discover(Location::new(2, 0), 1.0);
        let policy = FrontierPolicy::Preferred {
            samples: 64,
            preference: Preference::Goal,
        };
        let mut rng = StdRng::seed_from_u64(9);
        // 64 draws over three candidates reach the best one for any seed
        // with overwhelming probability; this seed is fixed.
        let idx = policy.choose(&region, &mut rng);
        assert_eq!(region.frontier_at(idx), Location::new(1, 0));
    }

    #[test]
    fn test_random_choice_in_range() {
        let mut region = RegionState::new(GridSize::new(4, 1).unwrap());
        region.discover(Location::new(0, 0), 0.0);
        region.discover(Location::new(3, 0), 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(FrontierPolicy::Random.choose(&region, &mut rng) < 2);
        }
    }
}
