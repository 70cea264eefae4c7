// Copyright 2025 the Passepartout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
///
/// All curves satisfy `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
/// [`Easing::Overshoot`] may leave `[0, 1]` in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// Cubic ease-out: fast start, gentle arrival.
    CubicOut,
    /// Cubic ease-in-out: gentle start and arrival.
    CubicInOut,
    /// Passes the target and settles back. Larger `tension` overshoots more.
    Overshoot {
        /// Overshoot strength. `0.0` degenerates to a cubic ease-out.
        tension: f64,
    },
}

impl Easing {
    /// Overshoot with the default tension of `2.0`.
    pub const OVERSHOOT: Self = Self::Overshoot { tension: 2.0 };

    /// Eases `progress`, clamped to `[0, 1]` first.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        match self {
            Self::CubicOut => {
                let u = t - 1.0;
                u * u * u + 1.0
            }
            Self::CubicInOut => {
                let u = t * 2.0;
                if u < 1.0 {
                    0.5 * u * u * u
                } else {
                    let v = u - 2.0;
                    0.5 * (v * v * v + 2.0)
                }
            }
            Self::Overshoot { tension } => {
                let u = t - 1.0;
                u * u * ((tension + 1.0) * u + tension) + 1.0
            }
        }
    }

    /// Eased share of `change` at `progress`.
    #[must_use]
    pub fn interpolate(self, progress: f64, change: f64) -> f64 {
        change * self.apply(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::Easing;

    const ALL: [Easing; 3] = [
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::OVERSHOOT,
    ];

    #[test]
    fn endpoints_are_fixed() {
        for e in ALL {
            assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
        }
    }

    #[test]
    fn progress_is_clamped() {
        for e in ALL {
            assert_eq!(e.apply(-3.0), e.apply(0.0), "{e:?} below range");
            assert_eq!(e.apply(7.0), e.apply(1.0), "{e:?} above range");
            assert_eq!(e.apply(f64::NAN), e.apply(0.0), "{e:?} NaN");
        }
    }

    #[test]
    fn cubic_out_front_loads_motion() {
        // 1 - 0.5^3
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn cubic_in_out_is_symmetric() {
        let e = Easing::CubicInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((e.apply(0.25) - 0.0625).abs() < 1e-12);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn overshoot_passes_target() {
        let peak = (1..100)
            .map(|i| Easing::OVERSHOOT.apply(f64::from(i) / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak {peak} should exceed 1");
    }

    #[test]
    fn interpolate_scales_change() {
        assert!((Easing::CubicInOut.interpolate(0.25, -40.0) + 2.5).abs() < 1e-12);
        assert!((Easing::CubicOut.interpolate(1.0, 7.0) - 7.0).abs() < 1e-12);
    }
}
