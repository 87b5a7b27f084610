//! Synthetic obstacle scenes for tests and benchmarks.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Segment;

/// Invalid scene-generator parameters.
#[derive(Debug)]
pub enum SceneError {
    InvalidParams { reason: String },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::InvalidParams { reason } => {
                write!(f, "invalid scene params: {reason}")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Concentric rectangle-ring scene with exactly `2^k` segments.
///
/// Horizontal spans at integer coordinates, mirrored into all four
/// quadrants; none touches an axis through the origin, so nothing is
/// collinear with the viewpoint and nothing wraps. `k` is capped at 23 to
/// keep coordinates and allocations sane.
pub fn rectangle_rings(k: u32) -> Result<Vec<Segment<f64>>, SceneError> {
    if k >= 24 {
        return Err(SceneError::InvalidParams {
            reason: format!("k = {k} too large (need k < 24)"),
        });
    }

    let n = 1usize << k;
    let mut s = n / 4;
    if s * 4 != n {
        s += 1;
    }

    let mut out = Vec::with_capacity(n);
    'rings: for c in 0..4u32 {
        for i in 0..s {
            if out.len() >= n {
                break 'rings;
            }
            let mx = if c & 0b01 != 0 { -1.0 } else { 1.0 };
            let my = if c & 0b10 != 0 { -1.0 } else { 1.0 };
            let a = Vector2::new(mx * (1 + i) as f64, my * (s - i) as f64);
            let b = Vector2::new(mx * (1 + s) as f64, my * (s - i) as f64);
            out.push(Segment::new(a, b));
        }
    }
    Ok(out)
}

/// Replay token making random scene draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Random-scatter scene configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// Segment midpoints are drawn with norm in `[radius_min, radius_max]`.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Maximum segment length.
    pub max_len: f64,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 12,
            radius_min: 1.0,
            radius_max: 10.0,
            max_len: 3.0,
        }
    }
}

/// Random segments scattered around the viewpoint.
///
/// Exactly `cfg.count` segments; a segment that happens to fall collinear
/// with the origin is kept (the preprocessor drops it downstream).
pub fn scatter(cfg: &ScatterCfg, token: ReplayToken) -> Vec<Segment<f64>> {
    let mut rng = token.to_std_rng();
    let mut out = Vec::with_capacity(cfg.count);
    for _ in 0..cfg.count {
        let t: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let r: f64 = rng.gen_range(cfg.radius_min..=cfg.radius_max);
        let mid = Vector2::new(r * t.cos(), r * t.sin());
        let phi: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
        let half = rng.gen_range(0.0..cfg.max_len) / 2.0;
        let d = Vector2::new(phi.cos(), phi.sin()) * half;
        out.push(Segment::new(mid - d, mid + d));
    }
    out
}
