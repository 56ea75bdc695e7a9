//! Typed literal values for conditions.

use busbar_sf_client::security::soql;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

use crate::error::{Error, ErrorKind, Result};

/// A value on the right-hand side of a comparison or in a value list.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Rendered single-quoted and escaped.
    String(String),
    Integer(i64),
    /// Must be finite at render time.
    Number(f64),
    Boolean(bool),
    /// Rendered bare as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Rendered bare in UTC, e.g. `2024-03-01T08:00:00Z`.
    DateTime(DateTime<Utc>),
    /// A relative date literal such as `TODAY` or `LAST_N_DAYS:30`, rendered bare.
    DateLiteral(String),
    Null,
}

/// Relative date literals that take no argument.
const DATE_LITERALS: &[&str] = &[
    "YESTERDAY",
    "TODAY",
    "TOMORROW",
    "LAST_WEEK",
    "THIS_WEEK",
    "NEXT_WEEK",
    "LAST_MONTH",
    "THIS_MONTH",
    "NEXT_MONTH",
    "LAST_90_DAYS",
    "NEXT_90_DAYS",
    "LAST_QUARTER",
    "THIS_QUARTER",
    "NEXT_QUARTER",
    "LAST_YEAR",
    "THIS_YEAR",
    "NEXT_YEAR",
    "LAST_FISCAL_QUARTER",
    "THIS_FISCAL_QUARTER",
    "NEXT_FISCAL_QUARTER",
    "LAST_FISCAL_YEAR",
    "THIS_FISCAL_YEAR",
    "NEXT_FISCAL_YEAR",
];

/// Relative date literals that require a `:n` argument.
const DATE_LITERALS_WITH_N: &[&str] = &[
    "LAST_N_DAYS",
    "NEXT_N_DAYS",
    "N_DAYS_AGO",
    "LAST_N_WEEKS",
    "NEXT_N_WEEKS",
    "N_WEEKS_AGO",
    "LAST_N_MONTHS",
    "NEXT_N_MONTHS",
    "N_MONTHS_AGO",
    "LAST_N_QUARTERS",
    "NEXT_N_QUARTERS",
    "N_QUARTERS_AGO",
    "LAST_N_YEARS",
    "NEXT_N_YEARS",
    "N_YEARS_AGO",
    "LAST_N_FISCAL_QUARTERS",
    "NEXT_N_FISCAL_QUARTERS",
    "N_FISCAL_QUARTERS_AGO",
    "LAST_N_FISCAL_YEARS",
    "NEXT_N_FISCAL_YEARS",
    "N_FISCAL_YEARS_AGO",
];

impl Literal {
    /// A relative date literal (`YESTERDAY`, `THIS_FISCAL_QUARTER`, `NEXT_N_WEEKS:2`, ...).
    ///
    /// The name must be one of Salesforce's date literals. The `_N_` forms
    /// require `:n` with a non-negative integer; the others take no argument.
    pub fn date_literal(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        let valid = match value.split_once(':') {
            Some((name, n)) => {
                DATE_LITERALS_WITH_N.contains(&name)
                    && !n.is_empty()
                    && n.chars().all(|c| c.is_ascii_digit())
            }
            None => DATE_LITERALS.contains(&value.as_str()),
        };
        if !valid {
            return Err(Error::new(ErrorKind::LiteralType(format!(
                "'{value}' is not a date literal"
            ))));
        }
        Ok(Literal::DateLiteral(value))
    }

    pub fn today() -> Self {
        Literal::DateLiteral("TODAY".to_string())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Literal::String(_))
    }

    pub fn render(&self) -> Result<String> {
        Ok(match self {
            Literal::String(s) => format!("'{}'", soql::escape_string(s)),
            Literal::Integer(n) => n.to_string(),
            Literal::Number(n) if n.is_finite() => n.to_string(),
            Literal::Number(n) => {
                return Err(Error::new(ErrorKind::LiteralType(format!(
                    "non-finite number {n}"
                ))))
            }
            Literal::Boolean(b) => b.to_string(),
            Literal::Date(d) => d.format("%Y-%m-%d").to_string(),
            Literal::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            Literal::DateLiteral(s) => s.clone(),
            Literal::Null => "null".to_string(),
        })
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<&String> for Literal {
    fn from(value: &String) -> Self {
        Literal::String(value.clone())
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value.into())
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::Integer(value.into())
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Number(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Literal::Date(value)
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(value: DateTime<Utc>) -> Self {
        Literal::DateTime(value)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Literal::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for Literal {
    type Error = Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(Literal::Null),
            Value::Bool(b) => Ok(Literal::Boolean(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Literal::Integer(i)),
                None => n.as_f64().map(Literal::Number).ok_or_else(|| {
                    Error::new(ErrorKind::LiteralType(format!("number {n} out of range")))
                }),
            },
            Value::String(s) => Ok(Literal::String(s)),
            Value::Array(_) => Err(Error::new(ErrorKind::LiteralType(
                "arrays are not literals; use a list operator".into(),
            ))),
            Value::Object(_) => Err(Error::new(ErrorKind::LiteralType(
                "objects are not literals".into(),
            ))),
        }
    }
}
