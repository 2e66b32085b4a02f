use crate::infrastructure::discovery::record::DeviceRecord;

/// Equality predicate over one device attribute. A record without the key
/// never matches.
#[derive(Debug, Clone)]
pub struct MatchRule {
    key: String,
    value: String,
}

impl MatchRule {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn matches(&self, record: &DeviceRecord) -> bool {
        record.get(&self.key) == Some(self.value.as_str())
    }
}

/// How a rule set combines its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Every rule must pass.
    And,
    /// At least one rule must pass.
    Or,
}

/// Ordered collection of rules evaluated under one strategy.
#[derive(Debug, Clone)]
pub struct MatchSet {
    strategy: MatchStrategy,
    rules: Vec<MatchRule>,
}

impl MatchSet {
    pub fn new(strategy: MatchStrategy) -> Self {
        Self {
            strategy,
            rules: Vec::new(),
        }
    }

    pub fn add_rule(&mut self, rule: MatchRule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    pub fn matches(&self, record: &DeviceRecord) -> bool {
        match self.strategy {
            MatchStrategy::And => self.rules.iter().all(|rule| rule.matches(record)),
            MatchStrategy::Or => self.rules.iter().any(|rule| rule.matches(record)),
        }
    }

    /// Filter records, preserving enumeration order.
    pub fn filter<'a>(&self, records: &'a [DeviceRecord]) -> Vec<&'a DeviceRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
