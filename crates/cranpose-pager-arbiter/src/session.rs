//! Per-gesture bookkeeping.

use crate::multi_pointer::PointerPolicy;

/// One-way paging decision taken once per gesture.
///
/// `Committed` and `Vetoed` are terminal for the gesture: the classifier only
/// runs while `Undecided`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PagingDecision {
    /// Motion is still ambiguous; outer shares are only accumulated.
    #[default]
    Undecided,
    /// Horizontal motion belongs to the pager.
    Committed,
    /// Vertical motion won; the pager is never driven this gesture.
    Vetoed,
}

/// State of one touch sequence, from `Down` to `Up`/`Cancel`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureSession {
    pub(crate) decision: PagingDecision,
    pub(crate) accumulated_horizontal: f32,
    pub(crate) accumulated_vertical: f32,
    pub(crate) outer_displacement: i32,
    /// Sub-pixel part of committed outer shares not yet sent to the pager.
    pub(crate) pending_outer: f32,
    pub(crate) pointer_policy: PointerPolicy,
}

impl GestureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decision(&self) -> PagingDecision {
        self.decision
    }

    pub fn is_undecided(&self) -> bool {
        self.decision == PagingDecision::Undecided
    }

    pub fn is_paging_committed(&self) -> bool {
        self.decision == PagingDecision::Committed
    }

    pub fn is_paging_vetoed(&self) -> bool {
        self.decision == PagingDecision::Vetoed
    }

    pub fn accumulated_horizontal(&self) -> f32 {
        self.accumulated_horizontal
    }

    pub fn accumulated_vertical(&self) -> f32 {
        self.accumulated_vertical
    }

    /// Pixels the pager actually moved during this gesture.
    pub fn outer_displacement(&self) -> i32 {
        self.outer_displacement
    }

    /// True once the pager has been moved by this gesture.
    pub fn has_driven_outer(&self) -> bool {
        self.outer_displacement != 0
    }

    pub fn pointer_policy(&self) -> &PointerPolicy {
        &self.pointer_policy
    }

    pub(crate) fn record_outer_consumed(&mut self, consumed: i32) {
        self.outer_displacement += consumed;
    }

    /// Adds `outer` to the pending share and takes out its whole pixels,
    /// truncated toward zero.
    pub(crate) fn take_whole_outer_pixels(&mut self, outer: f32) -> i32 {
        let pending = self.pending_outer + outer;
        let whole = pending.trunc();
        self.pending_outer = pending - whole;
        whole as i32
    }
}
