//! Global listener module
//!
//! Screen-wide event subscriptions scoped to a guard's lifetime.

mod listener_registry;

pub use listener_registry::{GlobalEvent, ListenerGuard, ListenerId, ListenerRegistry};
