//! Edge id allocation.

use hierograph_core::EdgeId;

/// A monotonic edge id generator.
///
/// Ids start from 0 and are never reused. The generator is owned by a single
/// graph and advanced only through `&mut` access, so it needs no atomics.
///
/// # Example
///
/// ```
/// use hierograph_graph::store::EdgeIdGenerator;
///
/// let mut gen = EdgeIdGenerator::new();
/// let id1 = gen.next_edge_id();
/// let id2 = gen.next_edge_id();
/// assert!(id1 < id2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeIdGenerator {
    /// The next edge ID to assign.
    next_edge_id: u64,
}

impl EdgeIdGenerator {
    /// Create a new ID generator starting from 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_edge_id: 0 }
    }

    /// Generate the next edge ID.
    pub fn next_edge_id(&mut self) -> EdgeId {
        let id = self.next_edge_id;
        self.next_edge_id += 1;
        EdgeId::new(id)
    }

    /// Record an externally chosen id so later allocations never collide with it.
    pub fn observe(&mut self, id: EdgeId) {
        self.next_edge_id = self.next_edge_id.max(id.as_u64() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_generator_starts_at_zero() {
        let mut gen = EdgeIdGenerator::new();
        assert_eq!(gen.next_edge_id().as_u64(), 0);
        assert_eq!(gen.next_edge_id().as_u64(), 1);
    }

    #[test]
    fn ids_are_monotonically_increasing() {
        let mut gen = EdgeIdGenerator::new();
        let ids: Vec<_> = (0..100).map(|_| gen.next_edge_id().as_u64()).collect();
        for window in ids.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn observe_only_moves_forward() {
        let mut gen = EdgeIdGenerator::new();
        gen.observe(EdgeId::new(41));
        gen.observe(EdgeId::new(3));
        assert_eq!(gen.next_edge_id().as_u64(), 42);
    }

    #[test]
    fn observe_below_counter_is_ignored() {
        let mut gen = EdgeIdGenerator::new();
        for _ in 0..10 {
            gen.next_edge_id();
        }
        gen.observe(EdgeId::new(3));
        assert_eq!(gen.next_edge_id().as_u64(), 10);
    }
}
