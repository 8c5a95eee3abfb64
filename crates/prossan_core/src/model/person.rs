//! Value types and derivations shared by child and adult records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub const GENDER_OPTIONS: [&str; 2] = ["Masculino", "Feminino"];
pub const AUTHORIZATION_OPTIONS: [&str; 2] = ["Sim", "Não"];

const BIRTHDATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%d/%m/%Y"];

/// Postal address, persisted as `[street, district, city, state]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "(String, String, String, String)",
    into = "(String, String, String, String)"
)]
pub struct Address {
    pub street: String,
    pub district: String,
    pub city: String,
    pub state: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        district: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            district: district.into(),
            city: city.into(),
            state: state.into(),
        }
    }
}

impl From<(String, String, String, String)> for Address {
    fn from((street, district, city, state): (String, String, String, String)) -> Self {
        Self {
            street,
            district,
            city,
            state,
        }
    }
}

impl From<Address> for (String, String, String, String) {
    fn from(value: Address) -> Self {
        (value.street, value.district, value.city, value.state)
    }
}

/// Housing situation, persisted as `[type, monthly_payment]`.
///
/// The payment stays the text typed into the form; it is not parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct Housing {
    pub kind: String,
    pub monthly_payment: String,
}

impl Housing {
    pub fn new(kind: impl Into<String>, monthly_payment: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            monthly_payment: monthly_payment.into(),
        }
    }
}

impl From<(String, String)> for Housing {
    fn from((kind, monthly_payment): (String, String)) -> Self {
        Self {
            kind,
            monthly_payment,
        }
    }
}

impl From<Housing> for (String, String) {
    fn from(value: Housing) -> Self {
        (value.kind, value.monthly_payment)
    }
}

/// Returns `name` up to (excluding) its first space, or all of it.
pub fn first_name_of(name: &str) -> &str {
    name.split_once(' ').map_or(name, |(head, _)| head)
}

/// Interprets a free-text birthdate typed into a form.
///
/// Dashes are read as slashes; month-first is tried before day-first.
/// Blank or unrecognised text yields `None`.
pub fn parse_birthdate(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = trimmed.replace('-', "/");
    BIRTHDATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&normalized, format).ok())
}

/// Completed years between `birthdate` and `today`; `None` if born after `today`.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birthdate > today {
        return None;
    }
    let had_birthday =
        (today.month(), today.day()) >= (birthdate.month(), birthdate.day());
    let years = today.year() - birthdate.year() - i32::from(!had_birthday);
    u32::try_from(years).ok()
}

#[cfg(test)]
mod tests {
    use super::{age_on, first_name_of, parse_birthdate, Address, Housing};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn first_name_stops_at_first_space() {
        assert_eq!(first_name_of("Maria da Silva"), "Maria");
        assert_eq!(first_name_of("Joana"), "Joana");
        assert_eq!(first_name_of(""), "");
        assert_eq!(first_name_of(" leading"), "");
    }

    #[test]
    fn birthdate_prefers_month_first_then_day_first() {
        assert_eq!(parse_birthdate("02/03/2010"), Some(date(2010, 2, 3)));
        assert_eq!(parse_birthdate("25/12/2012"), Some(date(2012, 12, 25)));
        assert_eq!(parse_birthdate("25-12-2012"), Some(date(2012, 12, 25)));
    }

    #[test]
    fn birthdate_rejects_blank_and_garbage() {
        assert_eq!(parse_birthdate(""), None);
        assert_eq!(parse_birthdate("   "), None);
        assert_eq!(parse_birthdate("ontem"), None);
    }

    #[test]
    fn age_counts_completed_years() {
        let birth = date(2010, 6, 15);
        assert_eq!(age_on(birth, date(2020, 6, 14)), Some(9));
        assert_eq!(age_on(birth, date(2020, 6, 15)), Some(10));
        assert_eq!(age_on(birth, date(2009, 1, 1)), None);
    }

    #[test]
    fn address_and_housing_persist_as_fixed_arrays() {
        let address = Address::new("Rua A", "Centro", "Pouso Alegre", "MG");
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json, serde_json::json!(["Rua A", "Centro", "Pouso Alegre", "MG"]));

        let housing: Housing = serde_json::from_value(serde_json::json!(["Alugada", "450.00"])).unwrap();
        assert_eq!(housing, Housing::new("Alugada", "450.00"));

        let short = serde_json::from_value::<Address>(serde_json::json!(["Rua A", "Centro"]));
        assert!(short.is_err());
        let long = serde_json::from_value::<Housing>(serde_json::json!(["a", "b", "c"]));
        assert!(long.is_err());
    }
}
