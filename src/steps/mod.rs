//! Preparation stages for one corn dog.
//!
//! Each stage is one variant of a closed set implementing [`PrepStep`], a
//! uniform lifecycle the session drives one stage at a time: `enter` once,
//! `update` every tick while waiting, `process` when the actor-input
//! channel delivers a raw value, `exit` once on success or abort. At most
//! one stage holds the channel at any moment.

mod batter;
mod filling;
mod finishing;
mod frying;

pub use batter::{BatterStep, DISPENSER_STOPS};
pub use filling::FillingStep;
pub use finishing::FinishingStep;
pub use frying::FryingStep;

use crate::config::GameConfig;
use crate::models::{CustomerOrder, Filling, ItemRecord, SauceKind};

/// Raw actor input delivered to a stage through the channel.
#[derive(Debug, Clone, PartialEq)]
pub enum StepInput {
    FillingPicks(Filling, Filling),
    BatterFill { percent: f64 },
    FryTime { seconds: f64 },
    Finishing { sugar: bool, sauces: Vec<SauceKind> },
}

/// What the actor should be shown while a stage waits for input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRequest {
    FillingPicks,
    BatterFill,
    FryTimer,
    Finishing,
}

/// Result of handing an input to a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Input recognized; the item record was updated and the stage is done.
    Accepted,
    /// Input shape not recognized; nothing changed, do not advance.
    Rejected,
    /// The stage had already completed; the late input was ignored.
    AlreadyComplete,
}

/// The single actor-input channel the stages share.
///
/// A stage holds the channel only between `enter` and `exit`. A
/// subscription left behind after `exit` would leak into the next cycle and
/// starve every later stage, so release is unconditional on the exit path.
#[derive(Debug, Default)]
pub struct InputChannel {
    subscription: Option<(&'static str, InputRequest)>,
}

impl InputChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the channel for a stage, recording which prompt to present.
    /// Fails when a previous holder never let go.
    pub fn subscribe(&mut self, step: &'static str, request: InputRequest) -> bool {
        if self.subscription.is_some() {
            return false;
        }
        self.subscription = Some((step, request));
        true
    }

    /// Release the channel if `step` is the current holder.
    pub fn unsubscribe(&mut self, step: &'static str) {
        if matches!(self.subscription, Some((holder, _)) if holder == step) {
            self.subscription = None;
        }
    }

    pub fn holder(&self) -> Option<&'static str> {
        self.subscription.map(|(holder, _)| holder)
    }

    pub fn requested(&self) -> Option<InputRequest> {
        self.subscription.map(|(_, request)| request)
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_none()
    }
}

/// Mutable state a stage may touch while processing input.
///
/// The item record is exclusively owned by the session; a stage only ever
/// sees it through this context, while it is the sole active stage.
pub struct StepContext<'a> {
    pub item: &'a mut ItemRecord,
    pub order: &'a CustomerOrder,
    pub config: &'a GameConfig,
    /// Running quality meter; starts at 100 for the cycle.
    pub quality: &'a mut f64,
}

impl StepContext<'_> {
    /// Knock the running quality meter down, flooring at zero.
    pub fn penalize(&mut self, penalty: f64) {
        *self.quality = (*self.quality - penalty).max(0.0);
    }
}

/// Uniform lifecycle for a preparation stage.
///
/// `enter` and `exit` are each called exactly once per activation, in that
/// order. Re-entering without an intervening `exit` is a precondition
/// violation the stages do not defend against. `process` after completion
/// must leave the item record untouched.
pub trait PrepStep {
    fn name(&self) -> &'static str;

    /// Subscribe to the actor-input channel and request this stage's
    /// prompt. If the channel is still held by someone else the stage
    /// stays inert and never completes.
    fn enter(&mut self, channel: &mut InputChannel);

    /// Per-tick work while active. Never blocks; stages with nothing to do
    /// each tick keep the default no-op.
    fn update(&mut self) {}

    fn process(&mut self, input: &StepInput, ctx: &mut StepContext<'_>) -> ProcessOutcome;

    /// Release the channel. Must be safe even when the stage never
    /// completed, so an aborted cycle leaves nothing subscribed.
    fn exit(&mut self, channel: &mut InputChannel);

    fn is_complete(&self) -> bool;
}

/// The standard corn dog sequence, in preparation order.
pub fn standard_sequence() -> Vec<Box<dyn PrepStep>> {
    vec![
        Box::new(FillingStep::new()),
        Box::new(BatterStep::new()),
        Box::new(FryingStep::new()),
        Box::new(FinishingStep::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_is_exclusive() {
        let mut channel = InputChannel::new();
        assert!(channel.subscribe("first", InputRequest::FillingPicks));
        assert!(!channel.subscribe("second", InputRequest::BatterFill));
        assert_eq!(channel.holder(), Some("first"));
        assert_eq!(channel.requested(), Some(InputRequest::FillingPicks));
    }

    #[test]
    fn test_unsubscribe_ignores_non_holder() {
        let mut channel = InputChannel::new();
        channel.subscribe("first", InputRequest::FillingPicks);

        channel.unsubscribe("second");
        assert!(!channel.is_open());

        channel.unsubscribe("first");
        assert!(channel.is_open());
    }

    #[test]
    fn test_standard_sequence_order() {
        let steps = standard_sequence();
        let names: Vec<&str> = steps.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                FillingStep::NAME,
                BatterStep::NAME,
                FryingStep::NAME,
                FinishingStep::NAME
            ]
        );
    }
}
