//! Records what a [`CommandGate`] emitted, in order.

use std::cell::RefCell;
use std::rc::Rc;

use slidekit_foundation::{Anchor, CommandGate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    Haptic,
    Commit,
}

/// Shared log behind the callbacks of gates built by [`gate`](Self::gate).
#[derive(Clone, Default)]
pub struct GateRecorder {
    events: Rc<RefCell<Vec<GateEvent>>>,
}

impl GateRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> CommandGate {
        self.gate_with(|| {})
    }

    /// Gate that also runs `after_commit` once the commit has been recorded.
    pub fn gate_with(&self, mut after_commit: impl FnMut() + 'static) -> CommandGate {
        let haptics = Rc::clone(&self.events);
        let commits = Rc::clone(&self.events);
        CommandGate::new(
            move || haptics.borrow_mut().push(GateEvent::Haptic),
            move || {
                commits.borrow_mut().push(GateEvent::Commit);
                after_commit();
            },
        )
    }

    /// Gate whose policy rejects every transition to End.
    pub fn vetoing_gate(&self) -> CommandGate {
        self.gate().with_policy(|target: Anchor| target != Anchor::End)
    }

    pub fn events(&self) -> Vec<GateEvent> {
        self.events.borrow().clone()
    }

    pub fn commits(&self) -> usize {
        self.count(GateEvent::Commit)
    }

    pub fn haptics(&self) -> usize {
        self.count(GateEvent::Haptic)
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn count(&self, kind: GateEvent) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| **event == kind)
            .count()
    }
}

impl std::fmt::Debug for GateRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateRecorder")
            .field("events", &self.events.borrow())
            .finish()
    }
}
