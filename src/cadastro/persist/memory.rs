use super::RecordGateway;
use crate::error::Result;
use crate::model::Record;

/// In-memory gateway for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryGateway {
    saved: Vec<Record>,
    save_calls: usize,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// What the last `save` wrote, for assertions.
    pub fn saved(&self) -> &[Record] {
        &self.saved
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls
    }
}

impl RecordGateway for InMemoryGateway {
    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.saved = records.to_vec();
        self.save_calls += 1;
        Ok(())
    }

    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.saved.clone())
    }
}
