//! Secret color sources
//!
//! A round draws its secret from a [`ColorSource`], so play can use real
//! randomness while tests script the exact secret.

use crate::core::{CODE_LENGTH, Code, Color};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Supplies uniformly distributed colors, one draw per call
pub trait ColorSource {
    fn next_color(&mut self) -> Color;

    /// Draw a full code, one independent draw per slot
    fn draw_code(&mut self) -> Code {
        Code::new(std::array::from_fn(|_| self.next_color()))
    }
}

/// Colors drawn from a random number generator
#[derive(Debug, Clone)]
pub struct RandomColors<R> {
    rng: R,
}

impl<R: Rng> RandomColors<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomColors<StdRng> {
    /// Reproducible source: the same seed always yields the same secrets
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> Color {
        Color::ALL[self.rng.random_range(0..Color::COUNT)]
    }
}

/// Replays a fixed list of colors, cycling when it runs out
///
/// # Examples
/// ```
/// use braincode::core::{Code, Color};
/// use braincode::game::{ColorSource, ScriptedColors};
///
/// let secret: Code = "rrgb".parse().unwrap();
/// let mut source = ScriptedColors::from_code(secret);
/// assert_eq!(source.draw_code(), secret);
/// assert_eq!(source.next_color(), Color::Red);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedColors {
    colors: Vec<Color>,
    position: usize,
}

impl ScriptedColors {
    /// # Panics
    /// Panics if `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty(), "scripted color list must not be empty");
        Self {
            colors,
            position: 0,
        }
    }

    /// Source whose first draw is exactly `code`
    #[must_use]
    pub fn from_code(code: Code) -> Self {
        Self::new(code.colors().to_vec())
    }

    /// Source replaying several codes in order
    ///
    /// # Panics
    /// Panics if `codes` is empty.
    #[must_use]
    pub fn from_codes(codes: &[Code]) -> Self {
        let mut colors = Vec::with_capacity(codes.len() * CODE_LENGTH);
        for code in codes {
            colors.extend_from_slice(code.colors());
        }
        Self::new(colors)
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        let color = self.colors[self.position % self.colors.len()];
        self.position += 1;
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_is_reproducible() {
        let mut a = RandomColors::seeded(42);
        let mut b = RandomColors::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.draw_code(), b.draw_code());
        }
    }

    #[test]
    fn random_source_covers_every_color() {
        let mut source = RandomColors::seeded(7);
        let mut seen = [false; Color::COUNT];
        for _ in 0..1000 {
            seen[source.next_color().index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn random_source_allows_duplicates() {
        let mut source = RandomColors::seeded(3);
        let has_duplicate = (0..200).any(|_| {
            let code = source.draw_code();
            let colors = code.colors();
            (0..CODE_LENGTH).any(|i| colors[i + 1..].contains(&colors[i]))
        });
        assert!(has_duplicate);
    }

    #[test]
    fn scripted_source_replays_codes_in_order() {
        let first: Code = "bbbb".parse().unwrap();
        let second: Code = "rgok".parse().unwrap();
        let mut source = ScriptedColors::from_codes(&[first, second]);
        assert_eq!(source.draw_code(), first);
        assert_eq!(source.draw_code(), second);
        assert_eq!(source.draw_code(), first);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn scripted_source_rejects_empty() {
        let _ = ScriptedColors::new(Vec::new());
    }
}
