//! Compounding conventions.

/// How interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compounding {
    /// Simple interest: `1 + r·t`
    Simple,
    /// Compounded interest: `(1 + r/m)^(m·t)` with `m` periods per year
    Compounded,
    /// Continuously compounded: `e^(r·t)`
    Continuous,
}

impl std::fmt::Display for Compounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Compounding::Simple => "simple",
            Compounding::Compounded => "compounded",
            Compounding::Continuous => "continuous",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Compounding {
    type Err = crate::errors::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Compounding::Simple),
            "compounded" => Ok(Compounding::Compounded),
            "continuous" => Ok(Compounding::Continuous),
            _ => Err(crate::errors::Error::InvalidArgument(format!(
                "unknown compounding '{s}'"
            ))),
        }
    }
}
