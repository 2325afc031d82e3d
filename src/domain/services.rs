//! Step transition engine for the lemonade game.
//!
//! This module provides the engine that advances the game through its
//! four-step cycle in response to taps, including the random squeeze
//! count drawn when a lemon is picked from the tree.

use rand::rngs::ThreadRng;
use rand::Rng;

use super::models::{GameState, Step};

/// The engine driving the four-step lemonade cycle.
///
/// Each tap advances the game through the closed cycle
/// pick → squeeze → drink → empty → pick. Picking a lemon draws a
/// fresh random squeeze count in 2..=4 from the engine's random
/// source; squeezing counts that number down and moves on when it
/// reaches zero. The transition function is total: every state has
/// exactly one successor for a tap, and there are no error conditions.
///
/// The random source is injectable so transitions can be made
/// deterministic. Production code uses [`StepEngine::new`], which
/// draws from the thread-local generator; tests use
/// [`StepEngine::with_rng`] with a seeded generator.
///
/// # Examples
///
/// ```
/// use lemonade::domain::{GameState, Step, StepEngine};
///
/// let mut engine = StepEngine::new();
///
/// let state = engine.tap(GameState::default());
/// assert_eq!(state.step, Step::SqueezeLemon);
/// assert!((2..=4).contains(&state.counter));
/// ```
pub struct StepEngine<R = ThreadRng> {
    /// Source of squeeze counts
    rng: R,
}

impl StepEngine<ThreadRng> {
    /// Creates an engine backed by the thread-local random generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for StepEngine<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for StepEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepEngine").finish_non_exhaustive()
    }
}

impl<R: Rng> StepEngine<R> {
    /// Creates an engine with an injected random source.
    ///
    /// # Examples
    ///
    /// ```
    /// use lemonade::domain::{GameState, Step, StepEngine};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut engine = StepEngine::with_rng(StdRng::seed_from_u64(7));
    /// let state = engine.tap(GameState::default());
    /// assert_eq!(state.step, Step::SqueezeLemon);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Advances the game by one tap on the displayed image.
    ///
    /// Transition rules:
    /// - pick: move to squeeze with a fresh random counter in 2..=4
    /// - squeeze: decrement the counter; move to drink when it hits 0
    /// - drink: move to empty glass
    /// - empty glass: move back to pick, counter untouched
    ///
    /// The squeeze decrement saturates at zero, keeping the function
    /// total even for a counter that is already 0.
    ///
    /// # Arguments
    ///
    /// * `state` - State the tap was delivered in
    ///
    /// # Returns
    ///
    /// The successor state.
    pub fn tap(&mut self, state: GameState) -> GameState {
        match state.step {
            Step::PickLemon => GameState {
                step: Step::SqueezeLemon,
                counter: self.rng.gen_range(2..=4),
            },
            Step::SqueezeLemon => {
                let counter = state.counter.saturating_sub(1);
                GameState {
                    step: if counter == 0 {
                        Step::DrinkLemonade
                    } else {
                        Step::SqueezeLemon
                    },
                    counter,
                }
            }
            Step::DrinkLemonade => GameState {
                step: Step::EmptyGlass,
                ..state
            },
            Step::EmptyGlass => GameState {
                step: Step::PickLemon,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_engine(seed: u64) -> StepEngine<StdRng> {
        StepEngine::with_rng(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_new_game_starts_at_tree() {
        let state = GameState::default();
        assert_eq!(state.step, Step::PickLemon);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn test_pick_moves_to_squeeze_with_counter_in_range() {
        for seed in 0..50 {
            let mut engine = seeded_engine(seed);
            let state = engine.tap(GameState::default());
            assert_eq!(state.step, Step::SqueezeLemon);
            assert!(
                (2..=4).contains(&state.counter),
                "counter {} out of range for seed {}",
                state.counter,
                seed
            );
        }
    }

    #[test]
    fn test_counter_is_drawn_fresh_on_every_pick() {
        let mut engine = seeded_engine(42);
        let mut seen: std::collections::HashSet<u32> = std::collections::HashSet::new();

        for _ in 0..200 {
            let state = engine.tap(GameState::default());
            seen.insert(state.counter);
        }

        let expected: std::collections::HashSet<u32> = [2, 3, 4].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_squeeze_counts_down_by_one_per_tap() {
        let mut engine = seeded_engine(1);
        let mut state = GameState {
            step: Step::SqueezeLemon,
            counter: 4,
        };

        for expected in [3, 2] {
            state = engine.tap(state);
            assert_eq!(state.step, Step::SqueezeLemon);
            assert_eq!(state.counter, expected);
        }

        state = engine.tap(state);
        assert_eq!(state.step, Step::DrinkLemonade);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn test_exactly_n_squeezes_reach_drink() {
        for n in 2..=4 {
            let mut engine = seeded_engine(9);
            let mut state = GameState {
                step: Step::SqueezeLemon,
                counter: n,
            };

            for remaining in (0..n).rev() {
                assert_eq!(state.step, Step::SqueezeLemon);
                state = engine.tap(state);
                assert_eq!(state.counter, remaining);
            }

            assert_eq!(state.step, Step::DrinkLemonade);
        }
    }

    #[test]
    fn test_last_squeeze_moves_to_drink() {
        let mut engine = seeded_engine(3);
        let state = engine.tap(GameState {
            step: Step::SqueezeLemon,
            counter: 1,
        });
        assert_eq!(state.step, Step::DrinkLemonade);
    }

    #[test]
    fn test_drink_moves_to_empty_glass() {
        let mut engine = seeded_engine(5);
        let state = engine.tap(GameState {
            step: Step::DrinkLemonade,
            counter: 0,
        });
        assert_eq!(state.step, Step::EmptyGlass);
    }

    #[test]
    fn test_empty_glass_restarts_without_touching_counter() {
        let mut engine = seeded_engine(5);
        let state = engine.tap(GameState {
            step: Step::EmptyGlass,
            counter: 3,
        });
        assert_eq!(state.step, Step::PickLemon);
        assert_eq!(state.counter, 3);
    }

    #[test]
    fn test_squeeze_on_zero_counter_stays_total() {
        // Unreachable through the public cycle, but the function must
        // have a successor for every representable state.
        let mut engine = seeded_engine(11);
        let state = engine.tap(GameState {
            step: Step::SqueezeLemon,
            counter: 0,
        });
        assert_eq!(state.step, Step::DrinkLemonade);
        assert_eq!(state.counter, 0);
    }

    #[test]
    fn test_cycle_is_closed() {
        let mut engine = StepEngine::new();
        let mut state = GameState::default();

        for _ in 0..100 {
            assert_eq!(state.step, Step::PickLemon);

            state = engine.tap(state);
            assert_eq!(state.step, Step::SqueezeLemon);

            let squeezes = state.counter;
            assert!((2..=4).contains(&squeezes));
            for _ in 0..squeezes {
                assert_eq!(state.step, Step::SqueezeLemon);
                state = engine.tap(state);
            }
            assert_eq!(state.step, Step::DrinkLemonade);

            state = engine.tap(state);
            assert_eq!(state.step, Step::EmptyGlass);

            state = engine.tap(state);
        }

        assert_eq!(state.step, Step::PickLemon);
    }

    #[test]
    fn test_seeded_engine_is_reproducible() {
        let mut first = seeded_engine(123);
        let mut second = seeded_engine(123);

        let mut a = GameState::default();
        let mut b = GameState::default();
        for _ in 0..50 {
            a = first.tap(a);
            b = second.tap(b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(Step::PickLemon.number(), 1);
        assert_eq!(Step::SqueezeLemon.number(), 2);
        assert_eq!(Step::DrinkLemonade.number(), 3);
        assert_eq!(Step::EmptyGlass.number(), 4);
    }
}
