//! Random color sampling

use rand::Rng;

use crate::color::Color;

/// Sample a color uniformly from the full 24-bit RGB cube using the
/// thread-local generator. Successive calls are independent.
pub fn random_color() -> Color {
    random_color_with(&mut rand::thread_rng())
}

/// Sample a color uniformly from the full 24-bit RGB cube using `rng`.
///
/// ```
/// use color_harmony::random_color_with;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut a = StdRng::seed_from_u64(7);
/// let mut b = StdRng::seed_from_u64(7);
/// assert_eq!(random_color_with(&mut a), random_color_with(&mut b));
/// ```
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_bytes(rng.gen::<[u8; 3]>())
}
