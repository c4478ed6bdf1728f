//! Activity log of intents sent and restaurant replies.
use std::collections::VecDeque;

/// Origin of an activity entry, used for styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivityKind {
    /// Intent sent up by the widget.
    Intent,
    /// Data assigned down by the restaurant.
    Reply,
    /// Rejected intent or ignored key.
    Warning,
}

#[derive(Clone, Debug)]
pub struct ActivityEntry {
    pub text: String,
    pub kind: ActivityKind,
}

impl ActivityEntry {
    pub fn new(text: impl Into<String>, kind: ActivityKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Circular buffer of activity entries shown under the widget.
#[derive(Clone, Debug)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: ActivityEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn intent(&mut self, text: impl Into<String>) {
        self.push(ActivityEntry::new(text, ActivityKind::Intent));
    }

    pub fn reply(&mut self, text: impl Into<String>) {
        self.push(ActivityEntry::new(text, ActivityKind::Reply));
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(ActivityEntry::new(text, ActivityKind::Warning));
    }

    /// Newest entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter().rev().take(limit)
    }

    #[cfg(test)]
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.back()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = ActivityLog::new(2);
        log.intent("request-menu");
        log.reply("menu served");
        log.warn("nothing to bill");

        assert_eq!(log.len(), 2);
        let texts: Vec<_> = log.recent(10).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["nothing to bill", "menu served"]);
        assert_eq!(log.latest().map(|entry| entry.kind), Some(ActivityKind::Warning));
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = ActivityLog::new(0);
        log.reply("one");
        log.reply("two");
        assert_eq!(log.len(), 1);
    }
}
