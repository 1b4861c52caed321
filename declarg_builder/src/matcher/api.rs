use std::collections::HashMap;

/// The matcher's view of an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionConfig {
    name: String,
    short: Option<char>,
    switch: bool,
    verb: bool,
}

impl OptionConfig {
    pub(crate) fn new(
        name: impl Into<String>,
        short: Option<char>,
        switch: bool,
        verb: bool,
    ) -> Self {
        Self {
            name: name.into(),
            short,
            switch,
            verb,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn short(&self) -> Option<char> {
        self.short
    }

    pub(crate) fn switch(&self) -> bool {
        self.switch
    }

    pub(crate) fn verb(&self) -> bool {
        self.verb
    }
}

/// Case-insensitive lookup of options by long and short name.
///
/// Options are referred to by their index in the declaration order.
#[derive(Debug)]
pub(crate) struct OptionTable {
    configs: Vec<OptionConfig>,
    long: HashMap<String, usize>,
    short: HashMap<char, usize>,
    verb: Option<usize>,
}

impl OptionTable {
    pub(crate) fn new(configs: Vec<OptionConfig>) -> Self {
        let mut long = HashMap::default();
        let mut short = HashMap::default();
        let mut verb = None;

        for (index, config) in configs.iter().enumerate() {
            if !config.name().is_empty() {
                long.entry(config.name().to_lowercase()).or_insert(index);
            }

            if let Some(s) = config.short() {
                short.entry(fold(s)).or_insert(index);
            }

            if config.verb() && verb.is_none() {
                verb.replace(index);
            }
        }

        Self {
            configs,
            long,
            short,
            verb,
        }
    }

    pub(crate) fn config(&self, index: usize) -> &OptionConfig {
        &self.configs[index]
    }

    pub(crate) fn find_long(&self, name: &str) -> Option<usize> {
        self.long.get(&name.to_lowercase()).copied()
    }

    pub(crate) fn find_short(&self, short: char) -> Option<usize> {
        self.short.get(&fold(short)).copied()
    }

    pub(crate) fn verb(&self) -> Option<usize> {
        self.verb
    }
}

pub(crate) fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
