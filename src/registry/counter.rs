//! Last-assigned document id, encapsulated so only the registry's commit
//! path can advance it.

/// Monotonic id counter. Starts at 0; the first assigned id is 1.
#[derive(Debug, Default)]
pub struct DocumentCounter {
    last_id: u64,
}

impl DocumentCounter {
    pub fn new() -> Self {
        Self { last_id: 0 }
    }

    /// The id the next successful registration will receive.
    /// Does not commit; call `advance_to` after the transaction lands.
    pub fn peek_next(&self) -> u64 {
        self.last_id + 1
    }

    /// The last id assigned, 0 if none
    pub fn last_id(&self) -> u64 {
        self.last_id
    }

    /// Commit an assignment. Never moves backwards.
    pub fn advance_to(&mut self, id: u64) {
        if id > self.last_id {
            self.last_id = id;
        }
    }
}
