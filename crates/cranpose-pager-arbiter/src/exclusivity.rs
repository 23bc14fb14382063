//! Shared motion gate for sibling arbiters.
//!
//! Every arbiter that can see the same physical touch stream (pages of one
//! pager, nested zoomable views) is constructed with a clone of the same
//! [`MotionGate`]. The arbiter that claims the gate on `Down` owns the
//! gesture until `Up`/`Cancel`; all others drop events while the gate is held.
//!
//! The gate is a single-threaded handle. Touch delivery is serialized on the
//! UI thread, so claim order is the order in which down handlers run.

use std::cell::Cell;
use std::rc::Rc;

/// Identity of one arbiter registered with a [`MotionGate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArbiterId(u64);

#[derive(Default)]
struct MotionGateInner {
    holder: Cell<Option<ArbiterId>>,
    next_id: Cell<u64>,
}

/// Arbitration token shared by sibling arbiters.
///
/// Cloning yields another handle to the same gate.
#[derive(Clone, Default)]
pub struct MotionGate {
    inner: Rc<MotionGateInner>,
}

impl MotionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh identity for an arbiter using this gate.
    pub fn register(&self) -> ArbiterId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        ArbiterId(id)
    }

    /// Claims the gate for `id`.
    ///
    /// Succeeds when the gate is free or already held by `id`; fails only when
    /// another arbiter holds it.
    pub fn try_claim(&self, id: ArbiterId) -> bool {
        match self.inner.holder.get() {
            Some(holder) if holder != id => false,
            _ => {
                self.inner.holder.set(Some(id));
                log::debug!("motion gate claimed by {id:?}");
                true
            }
        }
    }

    /// Releases the gate if `id` holds it. Returns whether it was released.
    pub fn release(&self, id: ArbiterId) -> bool {
        match self.inner.holder.get() {
            Some(holder) if holder == id => {
                self.inner.holder.set(None);
                log::debug!("motion gate released by {id:?}");
                true
            }
            Some(holder) => {
                log::warn!("{id:?} tried to release a motion gate held by {holder:?}");
                false
            }
            None => false,
        }
    }

    /// True when some other arbiter holds the gate.
    pub fn is_held_by_other(&self, id: ArbiterId) -> bool {
        self.inner.holder.get().is_some_and(|holder| holder != id)
    }

    pub fn is_held_by(&self, id: ArbiterId) -> bool {
        self.inner.holder.get() == Some(id)
    }

    pub fn is_held(&self) -> bool {
        self.inner.holder.get().is_some()
    }

    pub fn holder(&self) -> Option<ArbiterId> {
        self.inner.holder.get()
    }
}

impl std::fmt::Debug for MotionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionGate")
            .field("holder", &self.inner.holder.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_ids_are_distinct() {
        let gate = MotionGate::new();
        let first = gate.register();
        let second = gate.register();
        assert_ne!(first, second);
    }

    #[test]
    fn first_claimant_wins() {
        let gate = MotionGate::new();
        let a = gate.register();
        let b = gate.register();

        assert!(gate.try_claim(a));
        assert!(!gate.try_claim(b));
        assert!(gate.is_held_by(a));
        assert!(gate.is_held_by_other(b));
        assert!(!gate.is_held_by_other(a));
    }

    #[test]
    fn reclaim_by_holder_succeeds() {
        let gate = MotionGate::new();
        let a = gate.register();
        assert!(gate.try_claim(a));
        assert!(gate.try_claim(a));
        assert_eq!(gate.holder(), Some(a));
    }

    #[test]
    fn release_by_non_holder_is_ignored() {
        let gate = MotionGate::new();
        let a = gate.register();
        let b = gate.register();
        gate.try_claim(a);

        assert!(!gate.release(b));
        assert!(gate.is_held_by(a));
        assert!(gate.release(a));
        assert!(!gate.is_held());
    }

    #[test]
    fn clones_share_state() {
        let gate = MotionGate::new();
        let other = gate.clone();
        let a = gate.register();
        let b = other.register();
        assert_ne!(a, b);

        gate.try_claim(a);
        assert!(other.is_held_by_other(b));
        assert!(!other.try_claim(b));
    }
}
