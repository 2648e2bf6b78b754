//! Per-build cel identifier allocation.

use crate::schema::CelId;

/// Issues contiguous [`CelId`]s starting at 0.
///
/// One factory is threaded through a single atlas build so that IDs are unique
/// across every film of that atlas and nowhere else.
#[derive(Debug, Default)]
pub struct CelIdFactory {
    next: u32,
}

impl CelIdFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn next_id(&mut self) -> CelId {
        let id = CelId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs issued so far.
    pub fn len(&self) -> usize {
        self.next as usize
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }
}
