//! Order table: a dining table that orders are placed against.

use serde::{Deserialize, Serialize};

use crate::error::{ConflictError, ServeryError, ValidationError};
use crate::id::{OrderTableId, TableGroupId};

/// A dining table.
///
/// An *empty* table seats nobody and may be grouped with other empty tables.
/// While a table belongs to a group its `empty` flag is locked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTable {
    pub id: OrderTableId,
    pub table_group_id: Option<TableGroupId>,
    pub number_of_guests: u32,
    pub empty: bool,
}

impl OrderTable {
    /// Create a standalone table.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NumberOfGuestsNotPositive`] when
    /// `number_of_guests` is negative, or
    /// [`ValidationError::NumberOfGuestsTooLarge`] above `u32::MAX`.
    pub fn new(number_of_guests: i64, empty: bool) -> Result<Self, ServeryError> {
        Ok(Self {
            id: OrderTableId::new(),
            table_group_id: None,
            number_of_guests: guests(number_of_guests)?,
            empty,
        })
    }

    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    /// # Errors
    ///
    /// Returns [`ConflictError::TableGroupExists`] when the table belongs to
    /// a table group.
    pub fn ensure_ungrouped(&self) -> Result<(), ServeryError> {
        if self.is_grouped() {
            return Err(ConflictError::TableGroupExists(self.id).into());
        }
        Ok(())
    }

    /// Orders may only be placed at an occupied table.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::OrderTableIsEmpty`] when the table is empty.
    pub fn ensure_not_empty(&self) -> Result<(), ServeryError> {
        if self.empty {
            return Err(ConflictError::OrderTableIsEmpty(self.id).into());
        }
        Ok(())
    }

    /// Only empty, ungrouped tables may join a group.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::OrderTableNotEmpty`] when the table is
    /// occupied or already grouped.
    pub fn ensure_groupable(&self) -> Result<(), ServeryError> {
        if !self.empty || self.is_grouped() {
            return Err(ConflictError::OrderTableNotEmpty(self.id).into());
        }
        Ok(())
    }

    /// Overwrite the empty flag.
    ///
    /// Order status checks belong to the caller; this only enforces the group lock.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::TableGroupExists`] when the table is grouped.
    pub fn change_empty(&mut self, empty: bool) -> Result<(), ServeryError> {
        self.ensure_ungrouped()?;
        self.empty = empty;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ValidationError::NumberOfGuestsNotPositive`] when
    /// `number_of_guests` is negative,
    /// [`ValidationError::NumberOfGuestsTooLarge`] above `u32::MAX`, or
    /// [`ConflictError::OrderTableIsEmpty`] when nobody is seated at the table.
    pub fn change_number_of_guests(&mut self, number_of_guests: i64) -> Result<(), ServeryError> {
        let number_of_guests = guests(number_of_guests)?;
        self.ensure_not_empty()?;
        self.number_of_guests = number_of_guests;
        Ok(())
    }

    pub(crate) fn join_group(&mut self, table_group_id: TableGroupId) {
        self.table_group_id = Some(table_group_id);
        self.empty = false;
    }

    pub(crate) fn leave_group(&mut self) {
        self.table_group_id = None;
    }
}

fn guests(value: i64) -> Result<u32, ValidationError> {
    if value < 0 {
        return Err(ValidationError::NumberOfGuestsNotPositive);
    }
    u32::try_from(value).map_err(|_| ValidationError::NumberOfGuestsTooLarge(value))
}
