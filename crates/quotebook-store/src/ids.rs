use quotebook_types::QuoteId;
use uuid::Uuid;

/// Source of fresh quote identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> QuoteId;
}

/// Random UUID v4 identifiers
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> QuoteId {
        QuoteId::new(Uuid::new_v4().to_string())
    }
}

/// `<prefix>1`, `<prefix>2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> QuoteId {
        let id = QuoteId::new(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}
