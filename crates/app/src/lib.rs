//! `folio-app` -- session orchestration for the portfolio gallery client.
//!
//! Ties the pure state container from `folio-core` to the HTTP gateway
//! from `folio-client`: load-on-activate with a stale-response guard,
//! optimistic add/remove with best-effort background persistence, and the
//! delete-then-reconcile protocol. Also owns the locally persisted
//! display settings.

pub mod gateway;
pub mod session;
pub mod settings;

pub use gateway::PortfolioGateway;
pub use session::{LoadTicket, PortfolioSession, SessionError, SessionPhase};
pub use settings::Settings;
