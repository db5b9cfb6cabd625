use crate::scoring::picks_match_order;
use crate::steps::{InputChannel, InputRequest, PrepStep, ProcessOutcome, StepContext, StepInput};

/// First stage: the actor picks what goes on each skewer half.
#[derive(Debug, Default)]
pub struct FillingStep {
    subscribed: bool,
    complete: bool,
}

impl FillingStep {
    pub const NAME: &'static str = "choose_filling";

    pub fn new() -> Self {
        Self::default()
    }
}

impl PrepStep for FillingStep {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn enter(&mut self, channel: &mut InputChannel) {
        self.subscribed = channel.subscribe(Self::NAME, InputRequest::FillingPicks);
    }

    fn process(&mut self, input: &StepInput, ctx: &mut StepContext<'_>) -> ProcessOutcome {
        if self.complete {
            return ProcessOutcome::AlreadyComplete;
        }
        if !self.subscribed {
            return ProcessOutcome::Rejected;
        }
        let StepInput::FillingPicks(a, b) = input else {
            return ProcessOutcome::Rejected;
        };

        ctx.item.set_picks(*a, *b);
        if !picks_match_order(*a, *b, ctx.order) {
            let penalty = ctx.config.wrong_filling_penalty;
            ctx.penalize(penalty);
        }

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
