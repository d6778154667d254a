//! dialcoach - AI sales-call practice engine.
//!
//! Simulates a human prospect on a realtime voice call so salespeople can
//! practice cold calls, inbound leads, and scheduled meetings. The crate
//! has three parts:
//!
//! - [`prompt`]: deterministic compilation of per-call settings into the
//!   system prompt that drives the simulated prospect.
//! - [`session`]: the realtime call state machine - credential mint, media
//!   transport, SDP negotiation, and streaming transcript merge.
//! - The HTTP service ([`config`], [`state`], [`handlers`], [`routes`]):
//!   mints ephemeral session credentials so the provider API key stays
//!   server-side.

pub mod config;
pub mod handlers;
pub mod prompt;
pub mod routes;
pub mod session;
pub mod state;

pub use config::AppConfig;
pub use prompt::{compile, SimulationSettings};
pub use session::{RealtimeSession, SessionError, SessionStatus};
pub use state::AppState;
