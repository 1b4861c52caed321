use crate::constant::*;
use crate::matcher::api::*;
use crate::matcher::model::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Matches tokens to options, in order, producing a stream of [`MatchEvent`]s.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'t> {
    table: &'t OptionTable,
    state: MatchState,
    first: bool,
    events: Vec<MatchEvent>,
}

impl<'t> TokenMatcher<'t> {
    pub(crate) fn new(table: &'t OptionTable) -> Self {
        Self {
            table,
            state: MatchState::Idle,
            first: true,
            events: Vec::default(),
        }
    }

    pub(crate) fn feed(&mut self, token: &str) {
        // 1. A 'long' option, such as:
        //  --initial
        // 2. A 'short' option, or a cluster of boolean short options, such as:
        //  -i
        //  -iv
        // 3. A value for the pending option, or the verb.
        if let Some(name) = token.strip_prefix("--") {
            self.check_pending();
            self.match_option(name);
        } else if let Some(cluster) = token.strip_prefix('-') {
            self.check_pending();
            self.match_option_short(cluster);
        } else {
            self.match_value(token);
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Fed '{token}', state: {:?}.", self.state);
        }

        self.first = false;
    }

    pub(crate) fn close(mut self) -> Vec<MatchEvent> {
        self.check_pending();
        self.events
    }

    fn check_pending(&mut self) {
        let previous = std::mem::replace(&mut self.state, MatchState::Idle);

        if let MatchState::AwaitingValue(index) = previous {
            let name = self.table.config(index).name().to_string();
            self.error(MatchError::MissingValue(name));
        }
    }

    fn match_option(&mut self, name: &str) {
        match self.table.find_long(name) {
            Some(index) => self.matched(index),
            None => self.error(MatchError::UnknownOption(name.to_string())),
        }
    }

    fn match_option_short(&mut self, cluster: &str) {
        let table = self.table;
        let multiple = cluster.chars().count() > 1;

        for single in cluster.chars() {
            match table.find_short(single) {
                Some(index) if !multiple => self.matched(index),
                Some(index) => {
                    let config = table.config(index);

                    // Only boolean options may be combined under a single '-'.
                    if config.switch() {
                        self.assign(index, SWITCH_VALUE);
                    } else {
                        self.error(MatchError::MultipleSwitch(config.name().to_string()));
                    }
                }
                None => self.error(MatchError::UnknownOption(cluster.to_string())),
            }
        }
    }

    fn match_value(&mut self, token: &str) {
        match self.state {
            MatchState::AwaitingValue(index) => {
                self.state = MatchState::Idle;
                self.assign(index, token);
            }
            MatchState::Idle => match self.table.verb() {
                Some(verb) if self.first => self.assign(verb, token),
                _ => self.error(MatchError::ValueWithoutOption(token.to_string())),
            },
        }
    }

    fn matched(&mut self, index: usize) {
        if self.table.config(index).switch() {
            self.assign(index, SWITCH_VALUE);
        } else {
            self.state = MatchState::AwaitingValue(index);
        }
    }

    fn assign(&mut self, option: usize, value: &str) {
        self.events.push(MatchEvent::Assign {
            option,
            value: value.to_string(),
        });
    }

    fn error(&mut self, error: MatchError) {
        self.events.push(MatchEvent::Error(error));
    }
}
