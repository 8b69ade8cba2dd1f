// SPDX-License-Identifier: MPL-2.0
//! Carousel state machine.
//!
//! Two phases: `Idle` and `Transitioning`. A transition starts only from
//! `Idle` towards a different slide, and ends only when the follow-up for
//! that same transition (identified by its ticket) arrives. At most one
//! transition is ever in flight.

use super::SlideNumber;

/// Identifies one in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionTicket(u64);

impl TransitionTicket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Current phase of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transitioning {
        ticket: TransitionTicket,
        from: SlideNumber,
        to: SlideNumber,
    },
}

/// Why a navigation request did not start a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// Another transition is still in flight.
    Busy,
    /// The target is already the current slide.
    AlreadyCurrent,
}

/// Current slide, slide count and phase.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    current: SlideNumber,
    total: usize,
    phase: Phase,
    issued: u64,
}

impl CarouselState {
    /// Creates an idle state positioned on `initial`.
    ///
    /// `initial` must already be valid for `total`.
    #[must_use]
    pub fn new(total: usize, initial: SlideNumber) -> Self {
        debug_assert!(initial.get() <= total);
        Self {
            current: initial,
            total,
            phase: Phase::Idle,
            issued: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> SlideNumber {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Moves to `target` and enters `Transitioning`.
    ///
    /// # Errors
    ///
    /// Refuses while a transition is in flight or when `target` is current;
    /// the state is left untouched in both cases.
    pub fn begin(&mut self, target: SlideNumber) -> Result<TransitionTicket, Refusal> {
        if self.is_transitioning() {
            return Err(Refusal::Busy);
        }
        if target == self.current {
            return Err(Refusal::AlreadyCurrent);
        }

        self.issued += 1;
        let ticket = TransitionTicket(self.issued);
        self.phase = Phase::Transitioning {
            ticket,
            from: self.current,
            to: target,
        };
        self.current = target;
        Ok(ticket)
    }

    /// Returns to `Idle` if `ticket` belongs to the in-flight transition.
    pub fn finish(&mut self, ticket: TransitionTicket) -> bool {
        match self.phase {
            Phase::Transitioning { ticket: active, .. } if active == ticket => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Fraction of the deck reached, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.current.get() as f32 / self.total as f32 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn slide(n: usize) -> SlideNumber {
        SlideNumber::new(n, 5).unwrap()
    }

    #[test]
    fn new_state_is_idle() {
        let state = CarouselState::new(5, SlideNumber::FIRST);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.current(), SlideNumber::FIRST);
        assert_eq!(state.total(), 5);
    }

    #[test]
    fn begin_moves_current_and_locks() {
        let mut state = CarouselState::new(5, SlideNumber::FIRST);
        let ticket = state.begin(slide(3)).unwrap();

        assert_eq!(state.current(), slide(3));
        assert_eq!(
            state.phase(),
            Phase::Transitioning {
                ticket,
                from: SlideNumber::FIRST,
                to: slide(3)
            }
        );
    }

    #[test]
    fn begin_refuses_while_transitioning() {
        let mut state = CarouselState::new(5, SlideNumber::FIRST);
        state.begin(slide(2)).unwrap();

        assert_eq!(state.begin(slide(4)), Err(Refusal::Busy));
        assert_eq!(state.current(), slide(2));
    }

    #[test]
    fn begin_refuses_current_slide() {
        let mut state = CarouselState::new(5, slide(2));
        assert_eq!(state.begin(slide(2)), Err(Refusal::AlreadyCurrent));
        assert!(!state.is_transitioning());
    }

    #[test]
    fn finish_requires_matching_ticket() {
        let mut state = CarouselState::new(5, SlideNumber::FIRST);
        let first = state.begin(slide(2)).unwrap();
        assert!(state.finish(first));

        let second = state.begin(slide(3)).unwrap();
        assert_ne!(first, second);
        assert!(!state.finish(first));
        assert!(state.is_transitioning());
        assert!(state.finish(second));
        assert!(!state.finish(second));
    }

    #[test]
    fn progress_tracks_current_over_total() {
        let mut state = CarouselState::new(4, SlideNumber::FIRST);
        assert_abs_diff_eq!(state.progress_percent(), 25.0);
        state.begin(SlideNumber::new(4, 4).unwrap()).unwrap();
        assert_abs_diff_eq!(state.progress_percent(), 100.0);
    }
}
