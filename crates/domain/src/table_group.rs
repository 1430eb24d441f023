//! Table group: several empty tables joined to seat one party.
//!
//! The group does not own its tables; it only records membership. Joining
//! flips every member to non-empty, leaving clears the group reference only.

use serde::{Deserialize, Serialize};

use crate::error::{ServeryError, ValidationError};
use crate::id::{OrderTableId, TableGroupId};
use crate::order_table::OrderTable;
use crate::time::Timestamp;

/// Smallest number of tables a group can be made of.
pub const MIN_TABLES: usize = 2;

/// A set of tables seated together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGroup {
    pub id: TableGroupId,
    pub created_at: Timestamp,
    pub order_table_ids: Vec<OrderTableId>,
}

impl TableGroup {
    /// # Errors
    ///
    /// Returns [`ValidationError::OrderTableCountNotEnough`] when fewer than
    /// [`MIN_TABLES`] tables are requested.
    pub fn ensure_enough_tables(count: usize) -> Result<(), ServeryError> {
        if count < MIN_TABLES {
            return Err(ValidationError::OrderTableCountNotEnough.into());
        }
        Ok(())
    }

    /// Group `tables`, marking each of them as occupied members.
    ///
    /// Every table is checked before any is modified, so on error `tables`
    /// is left untouched. Member order follows the slice order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OrderTableCountNotEnough`] for fewer than
    /// two tables, or [`ConflictError::OrderTableNotEmpty`](crate::error::ConflictError::OrderTableNotEmpty)
    /// if any table is occupied or already grouped.
    pub fn group(tables: &mut [OrderTable], created_at: Timestamp) -> Result<Self, ServeryError> {
        Self::ensure_enough_tables(tables.len())?;
        for table in tables.iter() {
            table.ensure_groupable()?;
        }

        let id = TableGroupId::new();
        for table in tables.iter_mut() {
            table.join_group(id);
        }

        Ok(Self {
            id,
            created_at,
            order_table_ids: tables.iter().map(|table| table.id).collect(),
        })
    }

    /// Release the members of this group. Empty flags stay as they are.
    pub fn ungroup(&self, tables: &mut [OrderTable]) {
        for table in tables
            .iter_mut()
            .filter(|table| table.table_group_id == Some(self.id))
        {
            table.leave_group();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConflictError;

    fn empty_table() -> OrderTable {
        OrderTable::new(0, true).unwrap()
    }

    #[test]
    fn should_group_two_empty_tables() {
        let mut tables = vec![empty_table(), empty_table()];
        let ids: Vec<_> = tables.iter().map(|t| t.id).collect();

        let group = TableGroup::group(&mut tables, crate::time::now()).unwrap();

        assert_eq!(group.order_table_ids, ids);
        for table in &tables {
            assert_eq!(table.table_group_id, Some(group.id));
            assert!(!table.empty);
        }
    }

    #[test]
    fn should_reject_single_table() {
        let mut tables = vec![empty_table()];
        let result = TableGroup::group(&mut tables, crate::time::now());
        assert!(matches!(
            result,
            Err(ServeryError::Validation(
                ValidationError::OrderTableCountNotEnough
            ))
        ));
    }

    #[test]
    fn should_leave_every_table_untouched_when_one_is_occupied() {
        let occupied = OrderTable::new(3, false).unwrap();
        let mut tables = vec![empty_table(), occupied.clone(), empty_table()];
        let before = tables.clone();

        let result = TableGroup::group(&mut tables, crate::time::now());

        assert!(matches!(
            result,
            Err(ServeryError::Conflict(ConflictError::OrderTableNotEmpty(id))) if id == occupied.id
        ));
        assert_eq!(tables, before);
    }

    #[test]
    fn should_reject_table_that_is_already_grouped() {
        let mut first = vec![empty_table(), empty_table()];
        TableGroup::group(&mut first, crate::time::now()).unwrap();

        let mut second = vec![first[0].clone(), empty_table()];
        assert!(TableGroup::group(&mut second, crate::time::now()).is_err());
    }

    #[test]
    fn should_clear_group_reference_and_keep_empty_flag_on_ungroup() {
        let mut tables = vec![empty_table(), empty_table()];
        let group = TableGroup::group(&mut tables, crate::time::now()).unwrap();

        group.ungroup(&mut tables);

        for table in &tables {
            assert!(table.table_group_id.is_none());
            assert!(!table.empty);
        }
    }

    #[test]
    fn should_ignore_tables_of_other_groups_on_ungroup() {
        let mut ours = vec![empty_table(), empty_table()];
        let group = TableGroup::group(&mut ours, crate::time::now()).unwrap();
        let mut theirs = vec![empty_table(), empty_table()];
        let other = TableGroup::group(&mut theirs, crate::time::now()).unwrap();

        group.ungroup(&mut theirs);

        assert!(theirs.iter().all(|t| t.table_group_id == Some(other.id)));
    }
}
