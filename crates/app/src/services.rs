//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod menu_group_service;
pub mod menu_service;
pub mod order_service;
pub mod product_service;
pub mod table_group_service;
pub mod table_service;
