//! 有向图

use super::graph::sealed::HasIndex;
use super::graph::Graph;
use super::index::{GraphIndex, Predecessors};
use super::vertex::VertexId;

/// 有向图，可以包含自环
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    index: GraphIndex,
}

impl DirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasIndex for DirectedGraph {
    fn index(&self) -> &GraphIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut GraphIndex {
        &mut self.index
    }
}

impl Graph for DirectedGraph {
    fn is_directed(&self) -> bool {
        true
    }

    fn in_degree(&self, v: VertexId) -> usize {
        self.index.scan_in_degree(v)
    }

    fn predecessors(&self, v: VertexId) -> Predecessors<'_> {
        self.index.scan_predecessors(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn graph_with(n: usize, edges: &[(u64, u64)]) -> DirectedGraph {
        let mut g = DirectedGraph::new();
        for _ in 0..n {
            g.add_vertex();
        }
        for &(a, b) in edges {
            g.add_edge(v(a), v(b));
        }
        g
    }

    const DENSE: &[(u64, u64)] = &[
        (1, 4),
        (1, 6),
        (2, 3),
        (2, 6),
        (3, 2),
        (3, 4),
        (3, 5),
        (3, 6),
        (4, 1),
        (4, 5),
        (4, 6),
        (5, 6),
        (6, 3),
        (6, 5),
    ];

    #[test]
    fn test_empty_graph() {
        let g = DirectedGraph::new();
        assert_eq!(g.vertex_size(), 0);
        assert_eq!(g.edge_size(), 0);
        assert_eq!(g.max_vertex(), None);
        assert!(g.is_directed());
        assert!(!g.contains(v(1)));
        assert_eq!(g.out_degree(v(1)), 0);
        assert_eq!(g.in_degree(v(1)), 0);
    }

    #[test]
    fn test_directed_degrees() {
        let g = graph_with(
            6,
            &[
                (1, 2),
                (1, 6),
                (2, 3),
                (2, 4),
                (2, 6),
                (3, 2),
                (3, 4),
                (4, 1),
                (4, 5),
                (5, 1),
                (5, 6),
                (6, 2),
                (6, 5),
            ],
        );

        assert_eq!(g.max_vertex(), Some(v(6)));
        assert_eq!(g.edge_size(), 13);
        assert_eq!(g.out_degree(v(2)), 3);
        assert_eq!(g.in_degree(v(3)), 1);
        assert_eq!(g.out_degree(v(1)), 2);
        assert_eq!(g.in_degree(v(2)), 3);
    }

    #[test]
    fn test_directed_contains() {
        let g = graph_with(
            6,
            &[
                (1, 2),
                (1, 4),
                (2, 3),
                (2, 4),
                (3, 2),
                (3, 4),
                (4, 1),
                (4, 5),
                (5, 1),
                (5, 6),
                (6, 3),
            ],
        );

        assert!(g.contains_edge(v(1), v(2)));
        assert!(!g.contains_edge(v(2), v(1)));
        assert!(g.contains_edge(v(4), v(1)));
        assert!(g.contains_edge(v(3), v(4)));
        assert!(!g.contains_edge(v(1), v(9)));
    }

    #[test]
    fn test_add_edge_effects() {
        let mut g = graph_with(3, &[]);
        let before = g.edge_size();
        let code = g.add_edge(v(1), v(2));

        assert_eq!(code, crate::graph::EdgeId::of(v(1), v(2)));
        assert!(g.contains_edge(v(1), v(2)));
        assert!(!g.contains_edge(v(2), v(1)));
        assert_eq!(g.edge_size(), before + 1);

        g.add_edge(v(1), v(2));
        assert_eq!(g.edge_size(), before + 1);
        assert_eq!(g.successors(v(1)).collect::<Vec<_>>(), vec![v(2)]);
    }

    #[test]
    fn test_directed_predecessors() {
        let g = graph_with(
            6,
            &[(1, 2), (1, 6), (2, 3), (3, 4), (4, 5), (5, 1), (6, 5)],
        );

        assert_eq!(g.predecessors(v(1)).collect::<Vec<_>>(), vec![v(5)]);
        assert_eq!(g.predecessors(v(5)).collect::<Vec<_>>(), vec![v(4), v(6)]);
        assert_eq!(g.predecessors(v(9)).count(), 0);
    }

    #[test]
    fn test_directed_successors() {
        let g = graph_with(
            6,
            &[(1, 2), (2, 3), (3, 2), (3, 4), (4, 5), (5, 1), (5, 6), (6, 5)],
        );

        assert_eq!(g.successors(v(2)).count(), 1);
        assert_eq!(g.successors(v(5)).collect::<Vec<_>>(), vec![v(1), v(6)]);
        assert_eq!(g.successors(v(7)).count(), 0);
    }

    #[test]
    fn test_directed_edges() {
        let g = graph_with(
            6,
            &[(1, 4), (1, 6), (2, 3), (3, 2), (3, 4), (4, 1), (5, 6), (6, 3), (6, 5)],
        );

        let edges: Vec<_> = g.edges().map(|e| (e.src().0, e.dst().0)).collect();
        assert_eq!(edges.len(), g.edge_size());
        assert_eq!(edges.len(), 9);
        assert_eq!(edges[0], (1, 4));
        assert_eq!(edges[8], (6, 5));
    }

    #[test]
    fn test_directed_remove() {
        let mut g = graph_with(6, DENSE);

        g.remove_edge(v(6), v(5));
        assert_eq!(g.edge_size(), 13);
        assert!(!g.contains_edge(v(6), v(5)));

        g.remove_vertex(v(6));
        assert_eq!(g.add_vertex(), v(6));
        g.add_edge(v(6), v(5));

        assert_eq!(g.out_degree(v(1)), 1);
        assert_eq!(g.out_degree(v(3)), 3);
        assert_eq!(g.in_degree(v(6)), 0);
        assert_eq!(g.out_degree(v(6)), 1);
        assert_eq!(g.max_vertex(), Some(v(6)));
    }

    #[test]
    fn test_directed_remove_all() {
        let mut g = graph_with(6, DENSE);

        g.remove_vertex(v(1));
        g.remove_vertex(v(2));
        g.remove_vertex(v(3));
        g.remove_vertex(v(6));
        assert_eq!(g.vertex_size(), 2);
        assert_eq!(g.in_degree(v(5)), 1);
        assert_eq!(g.out_degree(v(5)), 0);
        assert_eq!(g.out_degree(v(4)), 1);

        g.add_vertex();
        g.add_vertex();
        g.add_vertex();
        assert_eq!(g.max_vertex(), Some(v(5)));
        assert_eq!(g.in_degree(v(5)), 1);
        assert_eq!(g.out_degree(v(5)), 0);
        assert_eq!(g.out_degree(v(4)), 1);
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![v(1), v(2), v(3), v(4), v(5)]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut g = graph_with(2, &[(1, 2)]);
        g.remove_vertex(v(8));
        g.remove_edge(v(2), v(1));
        g.remove_edge(v(1), v(8));
        assert_eq!(g.vertex_size(), 2);
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn test_self_edge() {
        let mut g = graph_with(1, &[]);
        g.add_edge(v(1), v(1));
        assert!(g.contains_edge(v(1), v(1)));
        assert_eq!(g.out_degree(v(1)), 1);
        assert_eq!(g.in_degree(v(1)), 1);
        assert_eq!(g.predecessors(v(1)).collect::<Vec<_>>(), vec![v(1)]);
    }
}
