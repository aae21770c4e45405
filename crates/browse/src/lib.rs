//! Debounced browse engine for the Bhubaneswar travel guide.
//!
//! This crate turns filter and pagination mutations into outbound
//! queries against an `AttractionSource`, with:
//!
//! - [`BrowseController`] -- single owner of the filter/pagination state,
//!   debounced search dispatch, and stale-response suppression.
//! - [`ViewBus`] -- publish/subscribe hub for [`ViewState`] snapshots.
//! - [`SessionStore`] -- file-backed persistence for the last-viewed page
//!   and the dark-mode preference.

pub mod bus;
pub mod controller;
pub mod session;
pub mod view;

pub use bus::ViewBus;
pub use controller::{BrowseController, BrowseOptions};
pub use session::{SessionState, SessionStore};
pub use view::{ViewState, ViewStatus, MSG_FETCH_FAILED, MSG_NO_RESULTS};
