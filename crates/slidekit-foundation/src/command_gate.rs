//! Exactly-once commit side effects.
//!
//! Whether a transition may happen ([`TransitionPolicy`]) is kept apart from
//! what follows once it did ([`CommandGate::commit`]).

use crate::anchors::Anchor;

/// Fire-and-forget haptic sink.
pub trait HapticFeedback {
    fn pulse(&mut self);
}

impl<F: FnMut()> HapticFeedback for F {
    fn pulse(&mut self) {
        self()
    }
}

/// Veto hook consulted before a release settles at a new anchor.
pub trait TransitionPolicy {
    fn confirm(&mut self, target: Anchor) -> bool;
}

impl<F: FnMut(Anchor) -> bool> TransitionPolicy for F {
    fn confirm(&mut self, target: Anchor) -> bool {
        self(target)
    }
}

/// Policy that permits every transition.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl TransitionPolicy for AllowAll {
    fn confirm(&mut self, _target: Anchor) -> bool {
        true
    }
}

/// Owns the haptic sink, the commit callback and the re-arm bookkeeping.
///
/// After a commit the gate stays disarmed until the thumb settles at
/// [`Anchor::Start`] again or is dragged away from [`Anchor::End`].
pub struct CommandGate {
    haptics: Box<dyn HapticFeedback>,
    on_commit: Box<dyn FnMut()>,
    policy: Box<dyn TransitionPolicy>,
    armed: bool,
    commits: u64,
}

impl CommandGate {
    pub fn new(haptics: impl HapticFeedback + 'static, on_commit: impl FnMut() + 'static) -> Self {
        Self {
            haptics: Box::new(haptics),
            on_commit: Box::new(on_commit),
            policy: Box::new(AllowAll),
            armed: true,
            commits: 0,
        }
    }

    pub fn with_policy(mut self, policy: impl TransitionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn confirm(&mut self, target: Anchor) -> bool {
        let allowed = self.policy.confirm(target);
        if !allowed {
            log::debug!("transition to {target:?} vetoed");
        }
        allowed
    }

    /// Pulses haptics then notifies the host, if armed. Returns whether it fired.
    pub fn commit(&mut self) -> bool {
        if !self.armed {
            log::trace!("commit suppressed; thumb has not left End since the last commit");
            return false;
        }
        self.armed = false;
        self.commits += 1;
        log::debug!("commit #{}", self.commits);
        self.haptics.pulse();
        (self.on_commit)();
        true
    }

    pub(crate) fn arm(&mut self) {
        self.armed = true;
    }

    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn commit_count(&self) -> u64 {
        self.commits
    }
}

impl std::fmt::Debug for CommandGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandGate")
            .field("armed", &self.armed)
            .field("commits", &self.commits)
            .finish_non_exhaustive()
    }
}
