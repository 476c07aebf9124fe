use crate::data_types::AxisMode;
use crate::math::{antisymlog, symlog};

/// Affine map from display space (raw values, or their `symlog`) to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleDomain {
    /// Display-space extent.
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl ScaleDomain {
    fn map(&self, t: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (t - d0) / (d1 - d0) * (r1 - r0)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AxisScale {
    Linear(ScaleDomain),
    SymLog(ScaleDomain),
    /// Stand-in used while the axis has no usable range: pixels equal values.
    Identity,
}

impl AxisScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::Linear(ScaleDomain { domain, range })
    }

    /// `domain` is given in value space and stored transformed.
    pub fn new_symlog(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::SymLog(ScaleDomain {
            domain: (symlog(domain.0), symlog(domain.1)),
            range,
        })
    }

    pub fn for_mode(mode: AxisMode, domain: (f64, f64), range: (f64, f64)) -> Self {
        match mode {
            AxisMode::Linear => Self::new_linear(domain, range),
            AxisMode::Log => Self::new_symlog(domain, range),
        }
    }

    /// Value space to display space.
    pub fn to_display(&self, value: f64) -> f64 {
        match self {
            Self::SymLog(_) => symlog(value),
            Self::Linear(_) | Self::Identity => value,
        }
    }

    /// Display space to value space.
    pub fn from_display(&self, t: f64) -> f64 {
        match self {
            Self::SymLog(_) => antisymlog(t),
            Self::Linear(_) | Self::Identity => t,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let res = match self {
            Self::Linear(s) | Self::SymLog(s) => s.map(self.to_display(value)),
            Self::Identity => value,
        };
        if res.is_nan() || res.is_infinite() {
            0.0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        match self {
            Self::Linear(s) | Self::SymLog(s) => self.from_display(s.invert(pixel)),
            Self::Identity => pixel,
        }
    }

    /// Display units covered by one pixel.
    pub fn units_per_pixel(&self) -> f64 {
        match self {
            Self::Linear(s) | Self::SymLog(s) => {
                let pixels = (s.range.1 - s.range.0).abs();
                if pixels == 0.0 {
                    0.0
                } else {
                    (s.domain.1 - s.domain.0).abs() / pixels
                }
            }
            Self::Identity => 1.0,
        }
    }
}
