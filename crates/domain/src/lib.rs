//! # servery-domain
//!
//! Pure domain model for the servery restaurant point-of-sale system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps, [`money::Money`]
//! - Define the **catalog** (products, menu groups, menus and the menu pricing rule)
//! - Define **order tables** (occupancy, guest count, group membership)
//! - Define **table groups** (atomic aggregation of empty tables)
//! - Define **orders** (line items and the status lifecycle)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod money;
pub mod quantity;
pub mod time;

pub mod menu;
pub mod menu_group;
pub mod order;
pub mod order_table;
pub mod product;
pub mod table_group;
