//! Deterministic lore-coin scatter layout.
//!
//! Coin icons on a sheet are scattered "randomly", but the layout must be
//! stable across re-renders and only change when the coin count changes.
//! The generator is therefore seeded from the owning actor's id and the
//! current count: FNV-1a over the id string, mixed with the count and a
//! golden-ratio constant, feeding a Mulberry32 stream.
//!
//! The exact generator is part of the observable contract — two clients
//! rendering the same actor must place the coins identically — so this
//! module implements it directly rather than going through a `rand` Rng.

use crate::config::CoinConfig;
use serde::{Deserialize, Serialize};

/// Placement of a single coin sprite inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinPlacement {
    /// Left offset in pixels.
    pub x: i32,
    /// Top offset in pixels.
    pub y: i32,
    /// Rotation away from upright, in degrees.
    pub rotation_deg: i32,
    /// Sprite edge length in pixels.
    pub size: u32,
}

/// 32-bit FNV-1a hash of a string.
#[must_use]
pub fn hash_key(key: &str) -> u32 {
    let mut h: u32 = 2_166_136_261;
    for byte in key.bytes() {
        h ^= u32::from(byte);
        h = h.wrapping_mul(16_777_619);
    }
    h
}

/// Mulberry32 pseudo-random stream.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a stream from a 32-bit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = (self.state ^ (self.state >> 15)).wrapping_mul(self.state | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Random integer in the inclusive range [min, max]. Returns `min` when
    /// the range is empty (zero-size container edge case).
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        if max < min {
            return min;
        }
        let span = f64::from(max) - f64::from(min) + 1.0;
        (self.next_f64() * span).floor() as i32 + min
    }
}

/// Scatter `count` coins inside a `width` × `height` container.
///
/// Same owner key, count, and container size produce the same layout; a
/// changed count reseeds the stream and reshuffles every coin.
#[must_use]
pub fn scatter(
    owner_key: &str,
    count: u32,
    width: u32,
    height: u32,
    config: &CoinConfig,
) -> Vec<CoinPlacement> {
    if count == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = ((f64::from(height) * config.height_scale).floor() as u32)
        .clamp(config.min_size, config.max_size);
    let margin = (size / 5).max(2);

    #[allow(clippy::cast_possible_wrap)]
    let (w, h, size_i, margin_i) = (
        width as i32,
        height as i32,
        size as i32,
        margin as i32,
    );
    let max_left = (w - size_i - margin_i).max(0);
    let max_top = (h - size_i - margin_i).max(0);

    let seed = hash_key(owner_key) ^ count ^ 0x9E37_79B9;
    let mut rng = Mulberry32::new(seed);

    (0..count)
        .map(|_| CoinPlacement {
            x: rng.next_int(margin_i, max_left),
            y: rng.next_int(margin_i, max_top),
            rotation_deg: rng.next_int(-config.max_tilt_deg, config.max_tilt_deg),
            size,
        })
        .collect()
}
