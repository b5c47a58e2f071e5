// SPDX-License-Identifier: MPL-2.0
//! Drag sessions and window-level pointer listener registrations.
//!
//! A drag session exists from a press on the frame until the matching release
//! anywhere in the window. While it exists it holds a [`ListenerGuard`], and the
//! component only subscribes to window-wide pointer events while a guard for
//! its id is registered. Dropping the session (release, unmount, or dropping the
//! whole component state) drops the guard and deregisters the listeners.

use iced::touch;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Identifies one comparison component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SliderId(u64);

impl SliderId {
    /// Allocates a process-unique id.
    #[must_use]
    pub fn unique() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Input device that drives a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// Registry of components that currently listen to window-wide pointer events.
///
/// Cloning shares the registry. Several components may register at the same
/// time; each only ever removes its own id.
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    active: Arc<Mutex<BTreeSet<SliderId>>>,
}

impl PointerListeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers window-wide listeners for `id` until the guard is dropped.
    #[must_use]
    pub fn attach(&self, id: SliderId) -> ListenerGuard {
        self.lock().insert(id);
        ListenerGuard {
            id,
            active: Arc::clone(&self.active),
        }
    }

    /// Whether `id` currently holds a registration.
    #[must_use]
    pub fn is_attached(&self, id: SliderId) -> bool {
        self.lock().contains(&id)
    }

    /// Number of components currently holding a registration.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeSet<SliderId>> {
        // The set stays consistent even if a holder panicked mid-operation.
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Keeps a component's window-wide listeners registered while alive.
#[derive(Debug)]
pub struct ListenerGuard {
    id: SliderId,
    active: Arc<Mutex<BTreeSet<SliderId>>>,
}

impl ListenerGuard {
    #[must_use]
    pub fn id(&self) -> SliderId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

/// An active press-drag-release gesture.
#[derive(Debug)]
pub struct DragSession {
    pointer: Pointer,
    _listeners: ListenerGuard,
}

impl DragSession {
    /// Starts a session for `pointer`, taking ownership of the listener registration.
    #[must_use]
    pub fn begin(pointer: Pointer, listeners: ListenerGuard) -> Self {
        Self {
            pointer,
            _listeners: listeners,
        }
    }

    /// Whether a move from `pointer` belongs to this session.
    ///
    /// Touch sessions follow the finger that started them; other fingers are ignored.
    #[must_use]
    pub fn tracks(&self, pointer: Pointer) -> bool {
        self.pointer == pointer
    }
}

/// Two-state drag machine: `Idle ⇄ Dragging`.
#[derive(Debug, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragPhase::Dragging(_))
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragPhase::Idle => None,
            DragPhase::Dragging(session) => Some(session),
        }
    }
}
