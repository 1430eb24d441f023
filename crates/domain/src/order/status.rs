//! Order status: where an order is in the kitchen lifecycle.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lifecycle state of an [`Order`](super::Order).
///
/// `Cooking` is the initial state and `Completion` the terminal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Cooking,
    Meal,
    Completion,
}

impl OrderStatus {
    /// Whether no further transition is permitted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completion)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cooking => "COOKING",
            Self::Meal => "MEAL",
            Self::Completion => "COMPLETION",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COOKING" => Ok(Self::Cooking),
            "MEAL" => Ok(Self::Meal),
            "COMPLETION" => Ok(Self::Completion),
            other => Err(ValidationError::UnknownOrderStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_cooking() {
        assert_eq!(OrderStatus::default(), OrderStatus::Cooking);
    }

    #[test]
    fn should_only_treat_completion_as_terminal() {
        assert!(!OrderStatus::Cooking.is_terminal());
        assert!(!OrderStatus::Meal.is_terminal());
        assert!(OrderStatus::Completion.is_terminal());
    }

    #[test]
    fn should_parse_what_it_displays() {
        for status in [OrderStatus::Cooking, OrderStatus::Meal, OrderStatus::Completion] {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn should_reject_unknown_status() {
        assert_eq!(
            "SERVED".parse::<OrderStatus>(),
            Err(ValidationError::UnknownOrderStatus("SERVED".to_string()))
        );
    }

    #[test]
    fn should_serialize_in_upper_case() {
        let json = serde_json::to_string(&OrderStatus::Meal).unwrap();
        assert_eq!(json, "\"MEAL\"");
    }
}
