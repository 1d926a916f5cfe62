//! 无向图
//!
//! 出边与入边不加区分，后继与前驱相同

use super::graph::sealed::HasIndex;
use super::graph::Graph;
use super::index::{GraphIndex, Predecessors};
use super::vertex::VertexId;

/// 无向图
#[derive(Debug, Clone, Default)]
pub struct UndirectedGraph {
    index: GraphIndex,
}

impl UndirectedGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }
}

impl HasIndex for UndirectedGraph {
    fn index(&self) -> &GraphIndex {
        &self.index
    }

    fn index_mut(&mut self) -> &mut GraphIndex {
        &mut self.index
    }
}

impl Graph for UndirectedGraph {
    fn is_directed(&self) -> bool {
        false
    }

    // 与有向图同样按扫描定义，结果与出度一致
    fn in_degree(&self, v: VertexId) -> usize {
        self.index.scan_in_degree(v)
    }

    fn predecessors(&self, v: VertexId) -> Predecessors<'_> {
        Predecessors::adjacent(self.index.successors(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    fn graph_with(n: usize, edges: &[(u64, u64)]) -> UndirectedGraph {
        let mut g = UndirectedGraph::new();
        for _ in 0..n {
            g.add_vertex();
        }
        for &(a, b) in edges {
            g.add_edge(v(a), v(b));
        }
        g
    }

    const SMALL: &[(u64, u64)] = &[(1, 2), (1, 3), (1, 5), (4, 2), (5, 3)];

    const DENSE: &[(u64, u64)] = &[
        (1, 3),
        (1, 5),
        (2, 5),
        (3, 6),
        (4, 1),
        (4, 2),
        (4, 6),
        (5, 1),
        (5, 2),
        (5, 6),
        (6, 1),
    ];

    /// 所有顶点的邻接序列总长
    fn total_adjacency<I>(g: &UndirectedGraph, per_vertex: impl Fn(VertexId) -> I) -> usize
    where
        I: Iterator<Item = VertexId>,
    {
        g.vertices().map(|id| per_vertex(id).count()).sum()
    }

    #[test]
    fn test_undirected_degrees() {
        let mut g = graph_with(5, SMALL);

        assert!(!g.is_directed());
        assert_eq!(g.max_vertex(), Some(v(5)));
        assert_eq!(g.edge_size(), 5);
        assert_eq!(g.out_degree(v(6)), 0);
        assert_eq!(g.out_degree(v(1)), 3);
        assert_eq!(g.out_degree(v(2)), 2);
        assert_eq!(g.in_degree(v(3)), 2);

        g.remove_vertex(v(5));
        assert_eq!(g.max_vertex(), Some(v(4)));
        g.add_vertex();
        assert_eq!(g.max_vertex(), Some(v(5)));
        assert_eq!(g.edge_size(), 3);
    }

    #[test]
    fn test_undirected_contains() {
        let g = graph_with(5, SMALL);

        assert!(g.contains(v(5)));
        assert!(!g.contains(v(111)));
        assert!(g.contains_edge(v(1), v(2)));
        assert!(g.contains_edge(v(2), v(1)));
        assert!(!g.contains_edge(v(4), v(1)));
        assert!(!g.contains_edge(v(1), v(4)));
        assert!(g.contains_edge(v(5), v(3)));
        assert!(!g.contains_edge(v(2), v(3)));
    }

    #[test]
    fn test_add_counts_once() {
        let mut g = graph_with(2, &[]);
        g.add_edge(v(1), v(2));
        assert_eq!(g.edge_size(), 1);
        assert!(g.contains_edge(v(1), v(2)));
        assert!(g.contains_edge(v(2), v(1)));

        g.add_edge(v(2), v(1));
        g.add_edge(v(1), v(2));
        assert_eq!(g.edge_size(), 1);
    }

    #[test]
    fn test_undirected_predecessors() {
        let g = graph_with(5, &[(1, 2), (1, 3), (2, 5), (5, 4), (5, 4)]);

        assert_eq!(total_adjacency(&g, |id| g.predecessors(id)), 8);
        assert_eq!(
            g.predecessors(v(5)).collect::<Vec<_>>(),
            g.successors(v(5)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_undirected_successors() {
        let mut g = graph_with(5, &[(1, 2), (2, 3), (5, 1), (4, 2), (5, 4), (2, 4)]);
        g.remove_vertex(v(8));

        assert_eq!(total_adjacency(&g, |id| g.successors(id)), 10);
        assert_eq!(g.successors(v(2)).collect::<Vec<_>>(), vec![v(1), v(3), v(4)]);
    }

    #[test]
    fn test_undirected_edges() {
        let g = graph_with(5, &[(1, 2), (1, 3), (1, 5), (5, 4)]);

        assert_eq!(g.edges().count(), 4);
        assert_eq!(g.edge_size(), 4);
    }

    #[test]
    fn test_undirected_remove_edge() {
        let mut g = graph_with(3, &[(1, 2), (2, 3)]);
        g.remove_edge(v(2), v(1));

        assert!(!g.contains_edge(v(1), v(2)));
        assert_eq!(g.edge_size(), 1);
        assert_eq!(g.successors(v(1)).count(), 0);
        assert_eq!(g.successors(v(2)).collect::<Vec<_>>(), vec![v(3)]);
        assert!(g.contains(v(1)));
    }

    #[test]
    fn test_undirected_remove() {
        let mut g = graph_with(6, DENSE);

        assert_eq!(g.edge_size(), 9);
        g.remove_vertex(v(3));
        g.remove_vertex(v(4));
        g.remove_vertex(v(5));
        assert_eq!(g.max_vertex(), Some(v(6)));
        g.remove_vertex(v(6));
        assert_eq!(g.max_vertex(), Some(v(2)));
        assert_eq!(g.edge_size(), 0);
    }

    #[test]
    fn test_undirected_remove_all() {
        let mut g = graph_with(6, DENSE);

        g.remove_vertex(v(6));
        g.remove_vertex(v(3));
        g.remove_vertex(v(1));
        g.remove_vertex(v(2));
        g.remove_vertex(v(4));
        assert_eq!(g.vertex_size(), 1);

        g.add_vertex();
        g.add_vertex();
        g.add_vertex();
        for (a, b) in [(1, 3), (1, 2), (2, 5), (2, 4), (5, 6), (5, 3)] {
            g.add_edge(v(a), v(b));
        }
        assert_eq!(g.edge_size(), g.edges().count());
        assert_eq!(g.edge_size(), 4);
    }
}
