use crate::graph::*;

/// Renders a graph node by node, each followed by its connections and their costs.
///
/// With a goal set by [GraphDebug::towards], every node is also annotated with
/// its potential weight to the goal, if the graph estimates one.
pub struct GraphDebug<'a, G>
where
    G: Graph,
{
    graph: &'a G,
    goal: Option<G::Node>,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: Graph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            goal: None,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    pub fn towards(mut self, goal: G::Node) -> Self {
        self.goal = Some(goal);
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        write!(f, "{:indention$}", "")
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: Graph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.graph.is_directed() { "->" } else { "--" };
        for v in self.graph.nodes() {
            self.display_indent(f, 0)?;
            let estimate = self
                .goal
                .as_ref()
                .and_then(|goal| self.graph.potential_weight(&v, goal));
            match estimate {
                Some(h) => writeln!(f, "{:?} ~{:?}", v, h)?,
                None => writeln!(f, "{:?}", v)?,
            }
            for c in self.graph.connections(&v) {
                self.display_indent(f, 1)?;
                writeln!(f, "{}{:?} {:?}", arrow, c.cost, c.to)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indented() {
        let g = LiteralGraph::parse("A>2>B", true).unwrap();
        let trial = format!("{:?}", g.debug().indent(1, 3));
        assert_eq!(trial, " \"A\"\n    ->2 \"B\"\n \"B\"\n");
    }

    #[test]
    fn potential_weights_towards_goal() {
        let g = MatrixGraph::new(vec![vec![0, 0]]).unwrap();
        let trial = format!("{:?}", g.debug().towards(Cell::new(0, 1)));
        assert_eq!(
            trial,
            "Cell { row: 0, col: 0 } ~1\n  --1 Cell { row: 0, col: 1 }\n\
             Cell { row: 0, col: 1 } ~0\n  --1 Cell { row: 0, col: 0 }\n"
        );

        // no estimates without potential weights
        let g = LiteralGraph::parse("A>B", false).unwrap();
        let trial = format!("{:?}", g.debug().indent(0, 1).towards("B".to_owned()));
        assert_eq!(trial, "\"A\"\n --1 \"B\"\n\"B\"\n --1 \"A\"\n");
    }
}
