// Factory Method: map a closed set of countries onto currencies.
// Adding a Country variant will not compile until the factory handles it.

use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Country {
    UnitedStates,
    Spain,
    Greece,
    Canada,
    UnitedKingdom,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::UnitedStates,
        Country::Spain,
        Country::Greece,
        Country::Canada,
        Country::UnitedKingdom,
    ];
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Country::UnitedStates => "United States",
            Country::Spain => "Spain",
            Country::Greece => "Greece",
            Country::Canada => "Canada",
            Country::UnitedKingdom => "United Kingdom",
        };
        f.write_str(name)
    }
}

impl FromStr for Country {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "unitedstates" | "usa" | "us" => Ok(Country::UnitedStates),
            "spain" => Ok(Country::Spain),
            "greece" => Ok(Country::Greece),
            "canada" => Ok(Country::Canada),
            "unitedkingdom" | "uk" => Ok(Country::UnitedKingdom),
            _ => Err(PatternError::UnknownCountry(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
}

pub struct CurrencyFactory;

impl CurrencyFactory {
    /// `None` means the country has no currency code on record.
    pub fn currency_for_country(country: Country) -> Option<Currency> {
        match country {
            Country::Greece | Country::Spain => Some(Currency { code: "EUR" }),
            Country::UnitedStates => Some(Currency { code: "USD" }),
            Country::Canada => Some(Currency { code: "CAD" }),
            Country::UnitedKingdom => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_codes() {
        let code = |c| CurrencyFactory::currency_for_country(c).map(|cur| cur.code);

        assert_eq!(code(Country::Greece), Some("EUR"));
        assert_eq!(code(Country::Spain), Some("EUR"));
        assert_eq!(code(Country::UnitedStates), Some("USD"));
        assert_eq!(code(Country::Canada), Some("CAD"));
        assert_eq!(code(Country::UnitedKingdom), None);
    }

    #[test]
    fn test_parse_country() {
        assert_eq!("Greece".parse::<Country>().unwrap(), Country::Greece);
        assert_eq!("USA".parse::<Country>().unwrap(), Country::UnitedStates);
        assert_eq!("united kingdom".parse::<Country>().unwrap(), Country::UnitedKingdom);
        assert!(matches!(
            "Poland".parse::<Country>(),
            Err(PatternError::UnknownCountry(name)) if name == "Poland"
        ));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for country in Country::ALL {
            assert_eq!(country.to_string().parse::<Country>().unwrap(), country);
        }
    }
}
