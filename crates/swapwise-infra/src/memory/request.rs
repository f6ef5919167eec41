//! In-memory swap-request store.

use std::collections::HashMap;

use swapwise_core::repository::request::SwapRequestRepository;
use swapwise_types::request::{RequestId, SwapRequest};

/// Vector-backed implementation of `SwapRequestRepository`, creation order
/// preserved.
#[derive(Default)]
pub struct MemoryRequestStore {
    requests: Vec<SwapRequest>,
    by_id: HashMap<RequestId, usize>,
}

impl MemoryRequestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SwapRequestRepository for MemoryRequestStore {
    fn insert(&mut self, request: SwapRequest) {
        self.by_id.insert(request.id.clone(), self.requests.len());
        self.requests.push(request);
    }

    fn get(&self, id: &RequestId) -> Option<&SwapRequest> {
        self.by_id
            .get(id)
            .and_then(|&index| self.requests.get(index))
    }

    fn get_mut(&mut self, id: &RequestId) -> Option<&mut SwapRequest> {
        let index = *self.by_id.get(id)?;
        self.requests.get_mut(index)
    }

    fn list(&self) -> &[SwapRequest] {
        &self.requests
    }
}
