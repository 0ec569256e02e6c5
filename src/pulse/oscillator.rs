use std::f32::consts::TAU;

/// Swing applied around the base emission intensity.
pub const EMISSION_AMPLITUDE: f32 = 0.5;

/// Rest scale of a pulsing lattice point.
pub const SCALE_BASE: f32 = 1.0;

/// Swing applied around [`SCALE_BASE`].
pub const SCALE_AMPLITUDE: f32 = 0.2;

/// Sine sampler: `base + amplitude * sin(t * frequency)`.
///
/// Holds no state between ticks, so sampling the same `t` twice always
/// yields the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub base: f32,
    pub amplitude: f32,
    pub frequency: f32,
}

impl Oscillator {
    pub const fn new(base: f32, amplitude: f32, frequency: f32) -> Self {
        Self {
            base,
            amplitude,
            frequency,
        }
    }

    /// Oscillator driving a material's emission multiplier
    pub const fn emission(base_intensity: f32, frequency: f32) -> Self {
        Self::new(base_intensity, EMISSION_AMPLITUDE, frequency)
    }

    /// Oscillator driving the uniform scale of lattice points
    pub const fn scale(speed: f32) -> Self {
        Self::new(SCALE_BASE, SCALE_AMPLITUDE, speed)
    }

    /// Value at elapsed time `t` (seconds)
    #[inline]
    pub fn sample(&self, t: f32) -> f32 {
        self.base + self.amplitude * (t * self.frequency).sin()
    }

    /// Closed interval every sample falls into
    pub fn range(&self) -> (f32, f32) {
        let swing = self.amplitude.abs();
        (self.base - swing, self.base + swing)
    }

    /// Time between repeats, `None` for a flat (zero-frequency) oscillator
    pub fn period(&self) -> Option<f32> {
        if self.frequency == 0.0 {
            None
        } else {
            Some(TAU / self.frequency.abs())
        }
    }
}
