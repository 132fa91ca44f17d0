use super::GRAVITATIONAL_CONST;

/// Scaling applied to the raw accumulated field.
#[derive(Debug, Clone)]
pub struct GravityConfig {
    /// Gravitational constant in m^3 kg^-1 s^-2.
    pub gravitational_const: f64,
    /// If `true`, convert from SI to the component unit (mGal for gz).
    /// If `false`, results stay in m/s^2.
    pub convert_units: bool,
}

impl GravityConfig {
    pub fn new() -> Self {
        Self {
            gravitational_const: GRAVITATIONAL_CONST,
            convert_units: true,
        }
    }
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self::new()
    }
}
