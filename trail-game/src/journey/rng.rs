//! Domain-separated RNG streams derived from the user seed.
use hmac::{Hmac, Mac};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sha2::Sha256;

/// Bundle of deterministic RNG streams, one per random system.
#[derive(Debug, Clone)]
pub struct RngBundle {
    encounter: CountingRng<SmallRng>,
    crossing: CountingRng<SmallRng>,
    hunt: CountingRng<SmallRng>,
}

impl RngBundle {
    /// Construct the bundle from a user-visible seed.
    #[must_use]
    pub fn from_user_seed(seed: u64) -> Self {
        Self {
            encounter: CountingRng::new(derive_stream_seed(seed, b"encounter")),
            crossing: CountingRng::new(derive_stream_seed(seed, b"crossing")),
            hunt: CountingRng::new(derive_stream_seed(seed, b"hunt")),
        }
    }

    /// Streams for a journey restored from a save at `tick`.
    ///
    /// Draw positions are not saved, so a restored journey gets fresh streams
    /// keyed on both the seed and how far the wagon had come.
    #[must_use]
    pub fn resumed(seed: u64, tick: u32) -> Self {
        if tick == 0 {
            return Self::from_user_seed(seed);
        }
        Self::from_user_seed(derive_stream_seed(seed, &tick.to_le_bytes()))
    }

    pub fn encounter(&mut self) -> &mut CountingRng<SmallRng> {
        &mut self.encounter
    }

    pub fn crossing(&mut self) -> &mut CountingRng<SmallRng> {
        &mut self.crossing
    }

    pub fn hunt(&mut self) -> &mut CountingRng<SmallRng> {
        &mut self.hunt
    }

    /// Total draws across all streams.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.encounter
            .draws()
            .saturating_add(self.crossing.draws())
            .saturating_add(self.hunt.draws())
    }
}

/// Counting wrapper for RNG streams providing instrumentation.
#[derive(Debug, Clone)]
pub struct CountingRng<R> {
    rng: R,
    draws: u64,
}

impl CountingRng<SmallRng> {
    fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl<R: rand::RngCore> CountingRng<R> {
    /// Number of draw calls performed against this stream.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}

impl<R: rand::RngCore> rand::RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws = self.draws.saturating_add(1);
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws = self.draws.saturating_add(1);
        self.rng.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws = self.draws.saturating_add(1);
        self.rng.try_fill_bytes(dest)
    }
}

fn derive_stream_seed(user_seed: u64, domain_tag: &[u8]) -> u64 {
    // HMAC accepts keys of any length.
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(&user_seed.to_le_bytes()) else {
        return user_seed;
    };
    mac.update(domain_tag);
    let digest = mac.finalize().into_bytes();
    let mut seed_bytes = [0u8; 8];
    seed_bytes.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(seed_bytes)
}
