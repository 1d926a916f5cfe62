//! 图核心模块
//!
//! 定义顶点、边、图抽象以及有向/无向/带标签三种实现
//!
//! 内部簿记不对外开放，只能经由 [`Graph`] 的方法修改：
//!
//! ```compile_fail
//! use tripgraph::graph::GraphIndex;
//! ```

mod directed;
mod edge;
mod graph;
mod index;
mod labeled;
mod undirected;
mod vertex;

pub use directed::DirectedGraph;
pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use index::{Edges, Predecessors, Successors, Vertices};
pub use labeled::LabeledGraph;
pub use undirected::UndirectedGraph;
pub use vertex::VertexId;
