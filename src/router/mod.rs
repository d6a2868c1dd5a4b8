//! Ordered route dispatch.
//!
//! A [`Router`] holds an ordered sequence of route entries. Dispatch scans the
//! entries strictly in registration order and invokes the handler of the first
//! entry whose pattern and method constraint both match. Order is significant:
//! an earlier, broader pattern shadows a later, more specific one.

mod pattern;
mod route;
mod table;

// Re-export public items
pub use pattern::{PathParams, Pattern, Segment};
pub use route::{HandlerFn, HandlerFuture, MethodFilter, Route};
pub use table::{Dispatch, Router};
