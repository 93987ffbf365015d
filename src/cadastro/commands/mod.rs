use crate::model::Record;

pub mod delete;
pub mod list;
pub mod submit;

// Failures travel as `Err` values, so messages only need the levels a
// successful command reports at.
#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A record paired with its current store position, for display. Positions
/// are 0-based here; turning them into 1-based labels is the presentation
/// layer's business.
#[derive(Debug, Clone)]
pub struct ListedRecord {
    pub position: usize,
    pub record: Record,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<ListedRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, records: Vec<ListedRecord>) -> Self {
        self.listed = records;
        self
    }
}
