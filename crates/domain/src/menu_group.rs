//! Menu group: a named category used to classify menus.

use serde::{Deserialize, Serialize};

use crate::error::{ServeryError, ValidationError};
use crate::id::MenuGroupId;

/// A label such as "Set meals" or "Drinks".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub name: String,
}

impl MenuGroup {
    /// Create a new menu group with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ServeryError> {
        let group = Self {
            id: MenuGroupId::new(),
            name: name.into(),
        };
        group.validate()?;
        Ok(group)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), ServeryError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_menu_group_when_name_provided() {
        let group = MenuGroup::new("Set meals").unwrap();
        assert_eq!(group.name, "Set meals");
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        assert!(matches!(
            MenuGroup::new(""),
            Err(ServeryError::Validation(ValidationError::EmptyName))
        ));
    }
}
