//! Request handlers, one module per service area.
//!
//! Each submodule contains handlers for one service area. Handlers are thin
//! wrappers that delegate to `AppCore`; the authenticated caller arrives as
//! an `Extension<UserPrincipal>` set by the auth middleware.

pub mod blockchain;
pub mod chat;
pub mod users;
pub mod whoami;
