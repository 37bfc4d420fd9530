//! Seeded sample generation
//!
//! All generators take an explicit seed so failures reproduce.

use oxcolor_core::{Rgb, Xyz};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random in-gamut RGB values
pub fn random_rgb(seed: u64, count: usize) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// Random XYZ values inside the box spanned by a typical white
pub fn random_xyz(seed: u64, count: usize) -> Vec<Xyz> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Xyz::new(
                rng.gen_range(0.0..0.95),
                rng.gen_range(0.0..1.0),
                rng.gen_range(0.0..1.09),
            )
        })
        .collect()
}

/// Random RGB values that are clearly chromatic
///
/// Keeps chroma above `min_chroma` so hue comparisons are meaningful.
pub fn random_saturated_rgb(seed: u64, count: usize, min_chroma: f64) -> Vec<Rgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let rgb = Rgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
        let max = rgb.r.max(rgb.g).max(rgb.b);
        let min = rgb.r.min(rgb.g).min(rgb.b);
        if max - min >= min_chroma {
            out.push(rgb);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_samples() {
        assert_eq!(random_rgb(7, 16), random_rgb(7, 16));
        assert_ne!(random_rgb(7, 16), random_rgb(8, 16));
    }

    #[test]
    fn test_saturated_samples_respect_chroma() {
        for rgb in random_saturated_rgb(3, 64, 0.2) {
            let max = rgb.r.max(rgb.g).max(rgb.b);
            let min = rgb.r.min(rgb.g).min(rgb.b);
            assert!(max - min >= 0.2);
        }
    }
}
