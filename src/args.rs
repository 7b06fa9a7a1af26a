use serde::{Deserialize, Serialize};

/// Arguments handed to the acceleration engine.
///
/// The record does not depend on the selected variant: every field is
/// always filled in, and the engine decides which ones it reads. The
/// serialized field names are shared with the engine and must stay as
/// they are.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccelArgs {
    pub accel: f64,
    pub rate: f64,
    #[serde(rename = "powerScale")]
    pub power_scale: f64,
    #[serde(rename = "gainCap")]
    pub gain_cap: f64,
    #[serde(rename = "scaleCap")]
    pub scale_cap: f64,
    pub limit: f64,
    pub exponent: f64,
    #[serde(rename = "powerExponent")]
    pub power_exponent: f64,
    pub offset: f64,
    pub legacy_offset: f64,
    pub midpoint: f64,
    pub weight: f64
}

impl Default for AccelArgs {
    fn default() -> Self {
        AccelArgs {
            accel: 0.,
            rate: 1.,
            power_scale: 1.,
            gain_cap: 0.,
            scale_cap: 0.,
            limit: 2.,
            exponent: 2.,
            power_exponent: 2.,
            offset: 0.,
            legacy_offset: 0.,
            midpoint: 10.,
            weight: 1.
        }
    }
}
