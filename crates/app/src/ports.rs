//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod catalog;
pub mod order_completion;
pub mod order_repo;
pub mod storage;
pub mod table_repo;

pub use catalog::Catalog;
pub use order_completion::OrderCompletion;
pub use order_repo::OrderRepository;
pub use storage::{MenuGroupRepository, MenuRepository, ProductRepository};
pub use table_repo::{OrderTableRepository, TableGroupRepository};
