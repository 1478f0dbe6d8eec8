//! Core, DOM-free primitives and helpers for the page.
pub mod animation;
pub mod catalog;
pub mod config;
pub mod drawer;
pub mod filter;
pub mod forms;
pub mod likes;
pub mod modal;
pub mod outcome;
pub mod schedule;
pub mod store;
pub mod theme;
