//! Menu group service.

use servery_domain::error::{NotFoundError, ServeryError};
use servery_domain::id::MenuGroupId;
use servery_domain::menu_group::MenuGroup;

use crate::ports::MenuGroupRepository;

/// Application service for menu group registration.
pub struct MenuGroupService<R> {
    repo: R,
}

impl<R: MenuGroupRepository> MenuGroupService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a menu group.
    ///
    /// # Errors
    ///
    /// Returns [`ServeryError::Validation`] if the name is empty, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, menu_group), fields(menu_group_name = %menu_group.name))]
    pub async fn create_menu_group(&self, menu_group: MenuGroup) -> Result<MenuGroup, ServeryError> {
        menu_group.validate()?;
        self.repo.create(menu_group).await
    }

    /// Look up a menu group by id.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError::MenuGroup`] when no menu group with `id` exists.
    pub async fn get_menu_group(&self, id: MenuGroupId) -> Result<MenuGroup, ServeryError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::MenuGroup(id).into())
    }

    /// List all menu groups.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_menu_groups(&self) -> Result<Vec<MenuGroup>, ServeryError> {
        self.repo.get_all().await
    }
}
