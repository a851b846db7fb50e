//! The two tunable material scalars and the clamped store that owns them.

use crate::constants::*;
use std::fmt;

/// A material parameter that the input mappers are allowed to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    Bump,
    Displacement,
}

impl Param {
    pub const ALL: [Param; 2] = [Param::Bump, Param::Displacement];
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Bump => f.write_str("bump"),
            Param::Displacement => f.write_str("displacement"),
        }
    }
}

/// Inclusive value range of a parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// NaN collapses to `min` so a bad input can never poison the store.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Map `t` in 0..=1 linearly onto the range.
    #[inline]
    pub fn denormalize(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }

    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterState {
    pub bump_intensity: f32,
    pub displacement_intensity: f32,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            bump_intensity: BUMP_INITIAL,
            displacement_intensity: DISPLACEMENT_INITIAL,
        }
    }
}

/// Owns the [`ParameterState`] and enforces its ranges on every write.
#[derive(Clone, Debug)]
pub struct ParameterStore {
    state: ParameterState,
    bump_range: ParamRange,
    displacement_range: ParamRange,
    revision: u64,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(
            ParameterState::default(),
            ParamRange::new(BUMP_MIN, BUMP_MAX),
            ParamRange::new(DISPLACEMENT_MIN, DISPLACEMENT_MAX),
        )
    }
}

impl ParameterStore {
    pub fn new(
        initial: ParameterState,
        bump_range: ParamRange,
        displacement_range: ParamRange,
    ) -> Self {
        let mut store = Self {
            state: initial,
            bump_range,
            displacement_range,
            revision: 0,
        };
        store.state.bump_intensity = bump_range.clamp(initial.bump_intensity);
        store.state.displacement_intensity =
            displacement_range.clamp(initial.displacement_intensity);
        store
    }

    pub fn range(&self, param: Param) -> ParamRange {
        match param {
            Param::Bump => self.bump_range,
            Param::Displacement => self.displacement_range,
        }
    }

    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Bump => self.state.bump_intensity,
            Param::Displacement => self.state.displacement_intensity,
        }
    }

    /// Clamp `value` into the parameter's range and store it. Returns the
    /// value actually stored.
    pub fn set(&mut self, param: Param, value: f32) -> f32 {
        let clamped = self.range(param).clamp(value);
        match param {
            Param::Bump => self.state.bump_intensity = clamped,
            Param::Displacement => self.state.displacement_intensity = clamped,
        }
        self.revision = self.revision.wrapping_add(1);
        log::debug!("[params] {} = {:.3}", param, clamped);
        clamped
    }

    /// Add `delta` to the current value, clamped.
    pub fn adjust(&mut self, param: Param, delta: f32) -> f32 {
        let current = self.get(param);
        self.set(param, current + delta)
    }

    pub fn state(&self) -> ParameterState {
        self.state
    }

    /// Number of writes so far; lets observers notice changes cheaply.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Short readout used by the on-screen label, e.g. `B:1.00/D:0.30`.
    pub fn label(&self) -> String {
        format!(
            "B:{:.2}/D:{:.2}",
            self.state.bump_intensity, self.state.displacement_intensity
        )
    }
}
