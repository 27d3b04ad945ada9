/// ID for vertices in graph storage, which is essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// ID for edges in graph storage, which is essentially `usize`.
///
/// Edge ID's are handed out in insertion order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

/// A factory to generate ID's uniquely.
#[derive(Debug, Clone, Default)]
pub struct IdFactory(usize);

impl IdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    fn one_more(&mut self) -> usize {
        let cur = self.0;
        self.0 += 1;
        cur
    }

    pub fn vertex(&mut self) -> VertexId {
        VertexId(self.one_more())
    }

    pub fn edge(&mut self) -> EdgeId {
        EdgeId(self.one_more())
    }
}

impl VertexId {
    pub const MIN: VertexId = VertexId(0);

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
}
