//! Keyframes for one section handoff and the ticket that completes it

use super::direction::Direction;
use crate::anim::{Props, Tween, Visibility};
use crate::config::TransitionConfig;

/// What the engine must play to move from one section to another
///
/// Outgoing and incoming tweens start together and share `tween`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionPlan {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// End state of the outgoing section
    pub outgoing: Props,
    /// Start state of the incoming section
    pub incoming_from: Props,
    /// End state of the incoming section
    pub incoming_to: Props,
    pub tween: Tween,
}

impl TransitionPlan {
    pub fn new(from: usize, to: usize, direction: Direction, config: &TransitionConfig) -> Self {
        let offset = config.y_offset * direction.sign();
        Self {
            from,
            to,
            direction,
            outgoing: Props::new()
                .opacity(0.0)
                .y(-offset)
                .visibility(Visibility::Hidden),
            incoming_from: Props::new()
                .opacity(0.0)
                .y(offset)
                .visibility(Visibility::Visible),
            incoming_to: Props::shown(),
            tween: Tween::new(config.duration).ease(config.ease.clone()),
        }
    }
}

/// Completion handle for the one transition in flight
///
/// Not `Clone`: only the engine's completion callback holds it, and
/// `Navigator::finish` consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    pub(super) serial: u64,
    pub(super) target: usize,
}

impl TransitionTicket {
    pub fn target(&self) -> usize {
        self.target
    }
}

/// An accepted navigation request
#[derive(Debug)]
pub struct Transition {
    pub plan: TransitionPlan,
    pub ticket: TransitionTicket,
}
