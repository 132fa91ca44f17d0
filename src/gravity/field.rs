use crate::error::InvalidArgument;
use crate::gravity::kernel::{EdgeKernel, kernel_gz};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported field components.
///
/// Each variant maps to its own edge kernel and unit conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Downward component of gravitational acceleration (mGal).
    #[serde(rename = "gz")]
    Gz,
}

impl Field {
    pub const ALL: [Field; 1] = [Field::Gz];

    pub fn name(self) -> &'static str {
        match self {
            Field::Gz => "gz",
        }
    }

    pub fn kernel(self) -> EdgeKernel {
        match self {
            Field::Gz => kernel_gz,
        }
    }

    /// Factor converting SI acceleration (m/s^2) to the unit reported for this component.
    pub fn unit_factor(self) -> f64 {
        match self {
            Field::Gz => 1e5, // m/s^2 -> mGal
        }
    }
}

impl FromStr for Field {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| InvalidArgument(format!("Gravitational field {s} not recognized")))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("gz".parse::<Field>().unwrap(), Field::Gz);
        let err = "gx".parse::<Field>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid argument: Gravitational field gx not recognized");
        assert!("GZ".parse::<Field>().is_err());
        assert!("".parse::<Field>().is_err());
    }

    #[test]
    fn test_names_round_trip() {
        for f in Field::ALL {
            assert_eq!(f.to_string().parse::<Field>().unwrap(), f);
        }
    }

    #[test]
    fn test_kernel_and_units() {
        let k = Field::Gz.kernel();
        assert_eq!(k(1., 2., 0., 0., 1., 2.), 0.);
        assert_eq!(Field::Gz.unit_factor(), 1e5);
    }

    #[test]
    fn test_serde_name() {
        assert_eq!(serde_json::to_string(&Field::Gz).unwrap(), "\"gz\"");
    }
}
