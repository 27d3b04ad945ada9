/// A connection from one node to another, carrying a cost.
///
/// Graphs build connections on demand whenever they are asked for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection<N, C> {
    pub from: N,
    pub to: N,
    pub cost: C,
}

impl<N, C> Connection<N, C> {
    pub fn new(from: N, to: N, cost: C) -> Self {
        Self { from, to, cost }
    }

    /// The same connection traversed the other way round.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            cost: self.cost,
        }
    }
}
