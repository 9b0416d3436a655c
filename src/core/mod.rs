//! Core client logic, independent of any particular component.
//!
//! This module provides:
//! - [`gate`] - Route gate state machines ([`TokenGate`], [`guest_gate`])
//! - [`auth`] - Session resolution strategies for the shared provider
//! - [`session`] - Session token persistence
//! - [`storage`] - Durable key-value storage seam
//! - [`navigation`] - History-based navigation
//! - [`api`] - Backend REST API wrapper

pub mod api;
pub mod auth;
pub mod error;
pub mod gate;
pub mod navigation;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use gate::{GateOutcome, TokenGate, guest_gate};
pub use navigation::{HistoryNavigator, Navigate, NavigateOptions, use_navigator};
pub use storage::{KeyValueStore, LocalStorage};
