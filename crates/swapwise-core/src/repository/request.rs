//! Swap-request repository trait definition.

use swapwise_types::request::{RequestId, SwapRequest};

/// Repository trait for swap-request storage.
///
/// Requests carry freshly minted UUID v7 identifiers, so insertion cannot
/// conflict. Requests are never deleted.
pub trait SwapRequestRepository {
    /// Append a new request.
    fn insert(&mut self, request: SwapRequest);

    /// Look up a request by ID.
    fn get(&self, id: &RequestId) -> Option<&SwapRequest>;

    /// Mutable lookup by ID.
    fn get_mut(&mut self, id: &RequestId) -> Option<&mut SwapRequest>;

    /// All requests in creation order.
    fn list(&self) -> &[SwapRequest];
}
