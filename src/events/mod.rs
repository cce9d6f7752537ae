//! Event and message types exchanged across systems.
//!
//! Events are triggered and handled immediately by observers; messages are
//! queued in `Messages<T>` and drained by host-side systems later in the
//! tick.
//!
//! Submodules:
//! - [`collision`] – contact-begin and trigger-entry notifications
//! - [`input`] – pressed/released edges for gameplay actions
//! - [`spawn`] – spawn, destroy and impulse requests to the host services
pub mod collision;
pub mod input;
pub mod spawn;
