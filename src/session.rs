use crate::config::GameConfig;
use crate::models::{CustomerOrder, ItemRecord};
use crate::steps::{
    InputChannel, InputRequest, PrepStep, ProcessOutcome, StepContext, StepInput, standard_sequence,
};

/// Drives the standard stage sequence for one corn dog.
///
/// The session owns the item record for the whole cycle; stages only touch
/// it through `process` while they are the sole active stage. Nothing here
/// blocks: waiting for actor input is just the active stage staying entered
/// across ticks.
pub struct PrepSession<'a> {
    steps: Vec<Box<dyn PrepStep>>,
    current: usize,
    channel: InputChannel,
    item: ItemRecord,
    quality: f64,
    order: &'a CustomerOrder,
    config: &'a GameConfig,
    aborted: bool,
}

impl<'a> PrepSession<'a> {
    pub fn new(order: &'a CustomerOrder, config: &'a GameConfig) -> Self {
        let mut steps = standard_sequence();
        let mut channel = InputChannel::new();
        steps[0].enter(&mut channel);
        Self {
            steps,
            current: 0,
            channel,
            item: ItemRecord::new(),
            quality: 100.0,
            order,
            config,
            aborted: false,
        }
    }

    /// One simulation tick for the active stage.
    pub fn tick(&mut self) {
        if !self.is_finished() {
            self.steps[self.current].update();
        }
    }

    /// What the actor should currently be prompted for, if anything.
    pub fn requested_input(&self) -> Option<InputRequest> {
        if self.is_finished() {
            None
        } else {
            self.channel.requested()
        }
    }

    /// Hand a completed raw input to the active stage. On acceptance the
    /// stage is exited and the next one entered.
    pub fn deliver(&mut self, input: &StepInput) -> ProcessOutcome {
        if self.is_finished() {
            return ProcessOutcome::Rejected;
        }

        let step = &mut self.steps[self.current];
        let mut ctx = StepContext {
            item: &mut self.item,
            order: self.order,
            config: self.config,
            quality: &mut self.quality,
        };
        let outcome = step.process(input, &mut ctx);

        if outcome == ProcessOutcome::Accepted && step.is_complete() {
            step.exit(&mut self.channel);
            self.current += 1;
            if self.current < self.steps.len() {
                self.steps[self.current].enter(&mut self.channel);
            }
        }

        outcome
    }

    /// Abort the cycle early. The active stage is exited so the channel is
    /// released even though it never completed.
    pub fn abort(&mut self) {
        if !self.is_finished() {
            self.steps[self.current].exit(&mut self.channel);
            self.aborted = true;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.aborted || self.current >= self.steps.len()
    }

    pub fn was_aborted(&self) -> bool {
        self.aborted
    }

    /// Name of the active stage, if one is active.
    pub fn current_step(&self) -> Option<&'static str> {
        if self.is_finished() {
            None
        } else {
            Some(self.steps[self.current].name())
        }
    }

    /// Running quality meter, 0..=100.
    pub fn quality_meter(&self) -> f64 {
        self.quality
    }

    pub fn channel(&self) -> &InputChannel {
        &self.channel
    }

    pub fn item(&self) -> &ItemRecord {
        &self.item
    }

    /// Tear the session down, yielding the item and the final meter value.
    pub fn finish(self) -> (ItemRecord, f64) {
        (self.item, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doneness, Filling, SauceKind};
    use crate::steps::{BatterStep, FillingStep, FinishingStep, FryingStep};

    fn order() -> CustomerOrder {
        CustomerOrder::new(
            Filling::Sausage,
            Filling::Cheese,
            true,
            vec![SauceKind::Ketchup],
        )
    }

    #[test]
    fn test_stages_run_in_order() {
        let order = order();
        let config = GameConfig::default();
        let mut session = PrepSession::new(&order, &config);

        assert_eq!(session.current_step(), Some(FillingStep::NAME));
        session.deliver(&StepInput::FillingPicks(Filling::Sausage, Filling::Cheese));
        assert_eq!(session.current_step(), Some(BatterStep::NAME));
        session.deliver(&StepInput::BatterFill { percent: 85.0 });
        assert_eq!(session.current_step(), Some(FryingStep::NAME));
        session.deliver(&StepInput::FryTime { seconds: 60.0 });
        assert_eq!(session.current_step(), Some(FinishingStep::NAME));
        session.deliver(&StepInput::Finishing {
            sugar: true,
            sauces: vec![SauceKind::Ketchup],
        });

        assert!(session.is_finished());
        assert!(session.channel().is_open());

        let (item, quality) = session.finish();
        assert_eq!(item.doneness, Some(Doneness::Perfect));
        assert_eq!(quality, 100.0);
    }

    #[test]
    fn test_rejected_input_does_not_advance() {
        let order = order();
        let config = GameConfig::default();
        let mut session = PrepSession::new(&order, &config);

        let outcome = session.deliver(&StepInput::FryTime { seconds: 60.0 });
        assert_eq!(outcome, ProcessOutcome::Rejected);
        assert_eq!(session.current_step(), Some(FillingStep::NAME));
        assert!(session.item().picks.is_none());
    }

    #[test]
    fn test_abort_releases_the_channel() {
        let order = order();
        let config = GameConfig::default();
        let mut session = PrepSession::new(&order, &config);

        session.deliver(&StepInput::FillingPicks(Filling::Sausage, Filling::Cheese));
        assert!(!session.channel().is_open());

        session.abort();
        assert!(session.was_aborted());
        assert!(session.is_finished());
        assert!(session.channel().is_open());

        // A dead session swallows further input.
        let outcome = session.deliver(&StepInput::BatterFill { percent: 85.0 });
        assert_eq!(outcome, ProcessOutcome::Rejected);
    }

    #[test]
    fn test_requested_input_tracks_active_stage() {
        let order = order();
        let config = GameConfig::default();
        let mut session = PrepSession::new(&order, &config);

        assert_eq!(session.requested_input(), Some(InputRequest::FillingPicks));
        session.deliver(&StepInput::FillingPicks(Filling::Cheese, Filling::Sausage));
        assert_eq!(session.requested_input(), Some(InputRequest::BatterFill));
    }

    #[test]
    fn test_ticks_are_harmless_while_waiting() {
        let order = order();
        let config = GameConfig::default();
        let mut session = PrepSession::new(&order, &config);

        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.current_step(), Some(FillingStep::NAME));
        assert_eq!(session.quality_meter(), 100.0);
    }
}
