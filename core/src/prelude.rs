use crate::catalog::ALL;
use serde::{Deserialize, Serialize};

/// Filter applied to every record of a fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub max_range_km: i64,
    pub types: Vec<String>,
}

impl FilterCriteria {
    pub fn new(max_range_km: i64, types: Vec<String>) -> Self {
        Self {
            max_range_km,
            types,
        }
    }

    /// Parses a comma separated type list such as `"F16, f35"`.
    ///
    /// Whitespace is stripped, designators are uppercased and an empty list
    /// falls back to the `ALL` sentinel.
    pub fn from_type_list(max_range_km: i64, list: &str) -> Self {
        let mut types: Vec<String> = list
            .split(',')
            .map(|entry| {
                entry
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect::<String>()
                    .to_uppercase()
            })
            .filter(|entry| !entry.is_empty())
            .collect();

        if types.is_empty() {
            types.push(ALL.identifier.to_string());
        }

        Self::new(max_range_km, types)
    }

    /// Builds criteria from raw configuration text, e.g. `("30", "F16,F35")`.
    pub fn parse(max_range_km: &str, list: &str) -> CoreResult<Self> {
        let range = max_range_km.trim().parse::<i64>().map_err(|_| {
            CoreError::InvalidCriteria(format!("max range '{}' is not an integer", max_range_km))
        })?;
        Ok(Self::from_type_list(range, list))
    }

    pub fn accepts_all(&self) -> bool {
        self.types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(ALL.identifier))
    }

    pub fn accepts_type(&self, identifier: &str) -> bool {
        self.accepts_all()
            || self
                .types
                .iter()
                .any(|t| t.to_uppercase() == identifier.to_uppercase())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(30, vec![ALL.identifier.to_string()])
    }
}

/// Errors raised while validating values handed to the core.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("invalid coordinate: latitude {lat}, longitude {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_list_is_normalized() {
        let criteria = FilterCriteria::from_type_list(30, " f16, F35 ,,a400 ");
        assert_eq!(criteria.types, vec!["F16", "F35", "A400"]);
        assert!(!criteria.accepts_all());
    }

    #[test]
    fn empty_type_list_falls_back_to_all() {
        let criteria = FilterCriteria::from_type_list(10, "  ");
        assert_eq!(criteria.types, vec!["ALL"]);
        assert!(criteria.accepts_all());
        assert!(criteria.accepts_type("ANYTHING"));
    }

    #[test]
    fn parse_rejects_non_numeric_range() {
        let err = FilterCriteria::parse("thirty", "ALL").unwrap_err();
        assert!(matches!(err, CoreError::InvalidCriteria(_)));

        let criteria = FilterCriteria::parse(" 45 ", "c130").unwrap();
        assert_eq!(criteria.max_range_km, 45);
        assert_eq!(criteria.types, vec!["C130"]);
    }

    #[test]
    fn type_check_ignores_case() {
        let criteria = FilterCriteria::new(10, vec!["F16".into()]);
        assert!(criteria.accepts_type("f16"));
        assert!(!criteria.accepts_type("B77L"));
    }
}
