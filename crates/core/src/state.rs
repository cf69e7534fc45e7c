//! Timeline selection state.
//!
//! [`Showcase`] owns the only mutable value on the page, the active tab.
//! Callers mutate it with [`Showcase::select_phase`] and then call
//! [`Showcase::render`] again; the output is a pure function of the state.

use serde::Serialize;
use showcase_protocol::{Gradient, RenderCommand};

use crate::content::{ROADMAP, RoadmapPhase};
use crate::error::ShowcaseError;
use crate::gradient::gradient_for_index;
use crate::views;

/// A position in [`ROADMAP`]. Always in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PhaseIndex(usize);

impl PhaseIndex {
    pub const COUNT: usize = ROADMAP.len();

    pub fn new(index: usize) -> Result<Self, ShowcaseError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(ShowcaseError::PhaseOutOfRange {
                index,
                len: Self::COUNT,
            })
        }
    }

    /// Every valid index, in timeline order.
    pub fn all() -> impl DoubleEndedIterator<Item = PhaseIndex> + ExactSizeIterator {
        (0..Self::COUNT).map(Self)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn phase(self) -> &'static RoadmapPhase {
        &ROADMAP[self.0]
    }

    /// The following tab, wrapping to the first.
    pub fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// The preceding tab, wrapping to the last.
    pub fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

impl TryFrom<usize> for PhaseIndex {
    type Error = ShowcaseError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<PhaseIndex> for usize {
    fn from(index: PhaseIndex) -> Self {
        index.0
    }
}

/// A timeline phase decorated for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub index: PhaseIndex,
    pub phase: &'static RoadmapPhase,
    pub gradient: Gradient,
    pub active: bool,
}

/// One instance of the interactive showcase view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showcase {
    active: PhaseIndex,
}

impl Showcase {
    pub fn new() -> Self {
        Self::initial()
    }

    /// Fresh view on the first tab. Usable in `static` initializers.
    pub const fn initial() -> Self {
        Self {
            active: PhaseIndex(0),
        }
    }

    pub fn active(&self) -> PhaseIndex {
        self.active
    }

    pub fn active_phase(&self) -> &'static RoadmapPhase {
        self.active.phase()
    }

    /// Make `index` the active tab. Returns whether the selection changed.
    pub fn select_phase(&mut self, index: PhaseIndex) -> bool {
        if self.active == index {
            return false;
        }
        tracing::debug!(
            from = self.active.get(),
            to = index.get(),
            phase = index.phase().phase,
            "phase selected"
        );
        self.active = index;
        true
    }

    /// The tab controls, in order, each paired with the index it selects.
    pub fn tabs(&self) -> impl Iterator<Item = (PhaseIndex, &'static str)> {
        PhaseIndex::all().map(|i| (i, i.phase().phase))
    }

    /// Timeline entries with gradient and active flag, recomputed per call.
    pub fn timeline(&self) -> Vec<TimelineEntry> {
        PhaseIndex::all()
            .map(|index| TimelineEntry {
                index,
                phase: index.phase(),
                gradient: gradient_for_index(index.get()),
                active: index == self.active,
            })
            .collect()
    }

    /// Render the full view for the current state.
    pub fn render(&self) -> Vec<RenderCommand> {
        let commands = views::render_showcase(self);
        tracing::trace!(
            active = self.active.get(),
            commands = commands.len(),
            "rendered showcase"
        );
        commands
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::initial()
    }
}
