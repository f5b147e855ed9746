//! Small parsing and formatting helpers shared by the commands.

use crate::{
    core::due_status::format_km,
    entities::car,
    errors::{Error, Result},
};
use chrono::NaiveDate;

/// Today's date in the bot's local time zone.
#[must_use]
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parses a user-typed date, defaulting to `default` when absent.
///
/// Accepts ISO (`2024-03-15`) and Brazilian (`15/03/2024`) forms.
pub fn parse_date(input: Option<&str>, default: NaiveDate) -> Result<NaiveDate> {
    let Some(raw) = input.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map_err(|_| Error::InvalidInput {
            message: format!("invalid date '{raw}', use AAAA-MM-DD or DD/MM/AAAA"),
        })
}

/// Formats an amount in reais, e.g. `R$ 250.00`.
#[must_use]
pub fn format_brl(amount: f64) -> String {
    format!("R$ {amount:.2}")
}

/// Formats a date the Brazilian way, e.g. `15/03/2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a non-negative odometer reading, e.g. `12.345 km`.
#[must_use]
pub fn format_mileage(km: i64) -> String {
    format!("{} km", format_km(km.unsigned_abs()))
}

/// One-line description of a car: label, odometer and the optional details.
#[must_use]
pub fn describe_car(car: &car::Model) -> String {
    let mut line = format!("**{}** - {}", car.label(), format_mileage(car.mileage));
    let details: Vec<&str> = [&car.license_plate, &car.color, &car.engine_type]
        .into_iter()
        .filter_map(Option::as_deref)
        .collect();
    if !details.is_empty() {
        line.push_str(" (");
        line.push_str(&details.join(", "));
        line.push(')');
    }
    line
}

/// Validates a number typed into a command: finite and not negative.
pub fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidInput {
            message: format!("{field} must be a non-negative number"),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let fallback = date(2000, 1, 1);
        assert_eq!(
            parse_date(Some("2024-03-15"), fallback).unwrap(),
            date(2024, 3, 15)
        );
        assert_eq!(
            parse_date(Some(" 15/03/2024 "), fallback).unwrap(),
            date(2024, 3, 15)
        );
        assert_eq!(parse_date(None, fallback).unwrap(), fallback);
        assert_eq!(parse_date(Some(""), fallback).unwrap(), fallback);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let result = parse_date(Some("31/02/2024"), date(2000, 1, 1));
        assert!(matches!(result, Err(Error::InvalidInput { .. })));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_brl(250.5), "R$ 250.50");
        assert_eq!(format_date(date(2024, 2, 29)), "29/02/2024");
    }

    #[test]
    fn test_describe_car() {
        let mut car = car::Model {
            id: 3,
            owner_id: "1".to_string(),
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2015,
            license_plate: Some("ABC1D23".to_string()),
            color: None,
            engine_type: Some("flex".to_string()),
            mileage: 12_345,
            created_at: chrono::Utc::now(),
        };
        assert_eq!(
            describe_car(&car),
            "**#3 Fiat Uno 2015** - 12.345 km (ABC1D23, flex)"
        );

        car.license_plate = None;
        car.engine_type = None;
        assert_eq!(describe_car(&car), "**#3 Fiat Uno 2015** - 12.345 km");
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("custo", 0.0).unwrap(), 0.0);
        assert!(non_negative("custo", -0.01).is_err());
        assert!(non_negative("custo", f64::NAN).is_err());
    }
}
