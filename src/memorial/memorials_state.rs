use dto::memorial::Memorial;
use std::collections::HashMap;

/// Memorials created since the server started.
#[derive(Default)]
pub struct MemorialsState {
    memorials: HashMap<String, Memorial>,
}

impl MemorialsState {
    pub fn insert(&mut self, memorial: Memorial) {
        self.memorials.insert(memorial.id().clone(), memorial);
    }

    pub fn get(&self, id: &str) -> Option<&Memorial> {
        self.memorials.get(id)
    }
}
