//! `Frequency`: how many times per year interest is compounded or paid.

use ql_core::errors::Error;

/// Compounding / payment frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frequency {
    /// No frequency; only meaningful with simple or continuous compounding.
    NoFrequency,
    /// Once (at maturity only).
    Once,
    /// Annual (once per year).
    Annual,
    /// Semi-annual (twice per year).
    Semiannual,
    /// Quarterly (four times per year).
    Quarterly,
    /// Monthly (twelve times per year).
    Monthly,
    /// Weekly (fifty-two times per year).
    Weekly,
    /// Daily.
    Daily,
}

impl Frequency {
    /// Number of periods per year. Returns `None` for `NoFrequency`.
    pub fn periods_per_year(&self) -> Option<u32> {
        match self {
            Frequency::NoFrequency => None,
            Frequency::Once => Some(0),
            Frequency::Annual => Some(1),
            Frequency::Semiannual => Some(2),
            Frequency::Quarterly => Some(4),
            Frequency::Monthly => Some(12),
            Frequency::Weekly => Some(52),
            Frequency::Daily => Some(365),
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::NoFrequency => "No-Frequency",
            Frequency::Once => "Once",
            Frequency::Annual => "Annual",
            Frequency::Semiannual => "Semiannual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Frequency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "nofrequency" => Ok(Frequency::NoFrequency),
            "once" => Ok(Frequency::Once),
            "annual" => Ok(Frequency::Annual),
            "semiannual" => Ok(Frequency::Semiannual),
            "quarterly" => Ok(Frequency::Quarterly),
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "daily" => Ok(Frequency::Daily),
            _ => Err(Error::InvalidArgument(format!("unknown frequency '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods() {
        assert_eq!(Frequency::Quarterly.periods_per_year(), Some(4));
        assert_eq!(Frequency::Once.periods_per_year(), Some(0));
        assert_eq!(Frequency::NoFrequency.periods_per_year(), None);
    }

    #[test]
    fn parse() {
        assert_eq!("Quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert!("fortnightly".parse::<Frequency>().is_err());
    }
}
