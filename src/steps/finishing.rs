use crate::steps::{InputChannel, InputRequest, PrepStep, ProcessOutcome, StepContext, StepInput};

/// Last stage: sugar coating and sauces before the corn dog is handed over.
#[derive(Debug, Default)]
pub struct FinishingStep {
    subscribed: bool,
    complete: bool,
}

impl FinishingStep {
    pub const NAME: &'static str = "finish";

    pub fn new() -> Self {
        Self::default()
    }
}

impl PrepStep for FinishingStep {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn enter(&mut self, channel: &mut InputChannel) {
        self.subscribed = channel.subscribe(Self::NAME, InputRequest::Finishing);
    }

    fn process(&mut self, input: &StepInput, ctx: &mut StepContext<'_>) -> ProcessOutcome {
        if self.complete {
            return ProcessOutcome::AlreadyComplete;
        }
        if !self.subscribed {
            return ProcessOutcome::Rejected;
        }
        let StepInput::Finishing { sugar, sauces } = input else {
            return ProcessOutcome::Rejected;
        };

        ctx.item.sugar_coated = *sugar;
        for sauce in sauces {
            ctx.item.add_sauce(*sauce);
        }

        if *sugar != ctx.order.wants_sugar {
            let penalty = ctx.config.wrong_topping_penalty;
            ctx.penalize(penalty);
        }
        let sauce_misses = ctx
            .order
            .sauces
            .iter()
            .filter(|s| !ctx.item.has_sauce(**s))
            .count()
            + ctx
                .item
                .sauces
                .iter()
                .filter(|s| !ctx.order.requires_sauce(**s))
                .count();
        if sauce_misses > 0 {
            let penalty = ctx.config.wrong_sauce_penalty * sauce_misses as f64;
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
