use crate::scoring::batter_penalty;
use crate::steps::{InputChannel, InputRequest, PrepStep, ProcessOutcome, StepContext, StepInput};

/// Percentages the batter dispenser lever snaps to.
pub const DISPENSER_STOPS: [f64; 4] = [25.0, 55.0, 85.0, 100.0];

/// Second stage: the actor dips the skewer and fills to a dispenser stop.
#[derive(Debug, Default)]
pub struct BatterStep {
    subscribed: bool,
    complete: bool,
}

impl BatterStep {
    pub const NAME: &'static str = "dip_batter";

    pub fn new() -> Self {
        Self::default()
    }
}

impl PrepStep for BatterStep {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn enter(&mut self, channel: &mut InputChannel) {
        self.subscribed = channel.subscribe(Self::NAME, InputRequest::BatterFill);
    }

    fn process(&mut self, input: &StepInput, ctx: &mut StepContext<'_>) -> ProcessOutcome {
        if self.complete {
            return ProcessOutcome::AlreadyComplete;
        }
        if !self.subscribed {
            return ProcessOutcome::Rejected;
        }
        let StepInput::BatterFill { percent } = input else {
            return ProcessOutcome::Rejected;
        };
        if !percent.is_finite() || *percent < 0.0 || *percent > ctx.config.batter_max_percent {
            return ProcessOutcome::Rejected;
        }

        ctx.item.batter_percent = *percent;
        let penalty = batter_penalty(*percent, ctx.config);
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
