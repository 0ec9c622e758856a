//! State management module
//!
//! This module handles all application state, including:
//! - Shared data structures (data.rs)
//! - The shopping cart (cart.rs)
//! - Category selection and the plant grid (catalog.rs)
//! - The plant detail modal (modal.rs)
//! - The donation form (donation.rs)

pub mod cart;
pub mod catalog;
pub mod data;
pub mod donation;
pub mod modal;
