//! Service layer for business logic
//!
//! Services sit between the web handlers and the data sources. Each one is
//! constructed once at startup around shared `Arc` handles and cloned into
//! `AppState`, so handlers never reach for global state.
//!
//! - [`ProfileService`], [`SkillsService`], [`ProjectsService`]: read-only views
//!   over the static data store
//! - [`TalksService`]: talk listing plus question submission into the log
//! - [`RateLimiter`]: per-client fixed-window request budget

pub mod profile;
pub mod projects;
pub mod query;
pub mod rate_limiter;
pub mod skills;
pub mod talks;

pub use profile::ProfileService;
pub use projects::ProjectsService;
pub use rate_limiter::{RateDecision, RateLimiter};
pub use skills::SkillsService;
pub use talks::TalksService;
