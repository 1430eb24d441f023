//! # servery-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProductRepository`, `MenuGroupRepository`, `MenuRepository`: catalog storage
//!   - `OrderTableRepository`, `TableGroupRepository`: table storage
//!   - `OrderRepository`: order storage
//!   - `Catalog`: existence and price lookups used across modules
//!   - `OrderCompletion`: "are all orders on this table done?" lookup
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProductService`, `MenuGroupService`, `MenuService`: catalog management
//!   - `OrderService`: order creation and status lifecycle
//!   - `TableService`: occupancy and guest count
//!   - `TableGroupService`: grouping and ungrouping tables
//! - Run every validation before the first write so a rejected request never
//!   leaves partial state behind
//!
//! ## Dependency rule
//! Depends on `servery-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
