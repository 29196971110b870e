use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::crossterm::event::KeyCode;

/// Screen-wide input delivered to every subscribed listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalEvent {
    /// Left mouse press anywhere on screen
    Click { column: u16, row: u16 },
    /// Key released (or pressed, on terminals that cannot report releases)
    KeyUp(KeyCode),
}

/// Unique identifier for a registered listener
///
/// IDs are never reused within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

type Callback = Rc<RefCell<dyn FnMut(&GlobalEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<ListenerId, Callback>,
}

/// Single-threaded registry of screen-wide listeners
///
/// Clones share the same registry. Listeners stay registered for as long as the
/// [`ListenerGuard`] returned by [`subscribe`](Self::subscribe) is alive.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it is removed when the returned guard is dropped or released
    pub fn subscribe(&self, callback: impl FnMut(&GlobalEvent) + 'static) -> ListenerGuard {
        let mut registry = self.inner.borrow_mut();
        registry.next_id += 1;
        let id = ListenerId(registry.next_id);
        registry
            .listeners
            .insert(id, Rc::new(RefCell::new(callback)));

        #[cfg(debug_assertions)]
        log::debug!("Subscribed {} ({} active)", id, registry.listeners.len());

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
            released: false,
        }
    }

    /// Deliver an event to every listener, in subscription order
    ///
    /// Listeners may release guards (their own or others') while the event is being
    /// delivered; a listener released mid-dispatch is not called afterwards.
    pub fn dispatch(&self, event: &GlobalEvent) {
        let snapshot: Vec<(ListenerId, Callback)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            // A listener that dispatches from inside its own callback is not re-entered
            if let Ok(mut listener) = callback.try_borrow_mut() {
                (&mut *listener)(event);
            }
        }
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps one listener registered; deregisters it on drop
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
    released: bool,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Deregister now. Calling it again, or after the registry is gone, does nothing.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(registry) = self.registry.upgrade() {
            // Drop the callback after the borrow ends; its captures may own other guards
            let removed = registry.borrow_mut().listeners.remove(&self.id);

            #[cfg(debug_assertions)]
            log::debug!(
                "Released {} ({} active)",
                self.id,
                registry.borrow().listeners.len()
            );

            drop(removed);
        }
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "listener_registry_tests.rs"]
mod listener_registry_tests;
