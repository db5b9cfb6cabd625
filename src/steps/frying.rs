use crate::scoring::{doneness_for_time, doneness_penalty};
use crate::steps::{InputChannel, InputRequest, PrepStep, ProcessOutcome, StepContext, StepInput};

/// Third stage: the corn dog sits in the oil until the actor pulls it out.
///
/// The elapsed fry time arrives as data with the pull-out input; the
/// per-tick counter only feeds the sizzle animation hint.
#[derive(Debug, Default)]
pub struct FryingStep {
    subscribed: bool,
    complete: bool,
    ticks_in_oil: u32,
}

impl FryingStep {
    pub const NAME: &'static str = "fry";

    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks spent waiting in the oil so far.
    pub fn ticks_in_oil(&self) -> u32 {
        self.ticks_in_oil
    }
}

impl PrepStep for FryingStep {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn enter(&mut self, channel: &mut InputChannel) {
        self.subscribed = channel.subscribe(Self::NAME, InputRequest::FryTimer);
    }

    fn update(&mut self) {
        if self.subscribed && !self.complete {
            self.ticks_in_oil += 1;
        }
    }

    fn process(&mut self, input: &StepInput, ctx: &mut StepContext<'_>) -> ProcessOutcome {
        if self.complete {
            return ProcessOutcome::AlreadyComplete;
        }
        if !self.subscribed {
            return ProcessOutcome::Rejected;
        }
        let StepInput::FryTime { seconds } = input else {
            return ProcessOutcome::Rejected;
        };
        if !seconds.is_finite() || *seconds < 0.0 {
            return ProcessOutcome::Rejected;
        }

        let doneness = doneness_for_time(*seconds, ctx.config);
        ctx.item.doneness = Some(doneness);
        let (penalty, _mistake) = doneness_penalty(doneness, ctx.config);
        ctx.penalize(penalty);

        self.complete = true;
        ProcessOutcome::Accepted
    }

    fn exit(&mut self, channel: &mut InputChannel) {
        channel.unsubscribe(Self::NAME);
        self.subscribed = false;
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}
