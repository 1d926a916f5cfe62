//! 通用遍历
//!
//! 反复从边缘集合取出一个顶点、访问它，再把它的后继加入边缘集合。
//! 取出顺序由边缘集合决定：队列为广度优先，栈为深度优先，
//! 按键排序为最佳优先。遍历可被中断或重新开始，已标记的顶点会被记住。

use crate::graph::{Graph, VertexId};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use tracing::{debug, trace};

/// 边缘集合
pub trait Fringe {
    /// 加入顶点
    fn push(&mut self, v: VertexId);

    /// 取出下一个顶点
    fn pop(&mut self) -> Option<VertexId>;

    /// 清空
    fn clear(&mut self);

    /// 是否为空
    fn is_empty(&self) -> bool;
}

/// 先进先出（广度优先）
#[derive(Debug, Clone, Default)]
pub struct BreadthFirst {
    queue: VecDeque<VertexId>,
}

impl Fringe for BreadthFirst {
    fn push(&mut self, v: VertexId) {
        self.queue.push_back(v);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.queue.pop_front()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// 后进先出（深度优先）
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<VertexId>,
}

impl Fringe for DepthFirst {
    fn push(&mut self, v: VertexId) {
        self.stack.push(v);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// 按键升序取出（最佳优先），键相同时句柄小者优先
///
/// 键在顶点入队时计算一次。
pub struct BestFirst<K, F> {
    heap: BinaryHeap<Reverse<(K, VertexId)>>,
    key: F,
}

impl<K, F> BestFirst<K, F>
where
    K: Ord,
    F: FnMut(VertexId) -> K,
{
    pub fn new(key: F) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
        }
    }
}

impl<K, F> Fringe for BestFirst<K, F>
where
    K: Ord,
    F: FnMut(VertexId) -> K,
{
    fn push(&mut self, v: VertexId) {
        let key = (self.key)(v);
        self.heap.push(Reverse((key, v)));
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.heap.pop().map(|Reverse((_, v))| v)
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// 遍历钩子
///
/// `visit` 与 `post_visit` 返回 false 时遍历立即终止。
pub trait Visitor {
    /// 首次取出顶点时调用
    fn visit(&mut self, _v: VertexId) -> bool {
        true
    }

    /// 后继处理完后是否需要再次访问 v（一般只用于深度优先）
    fn should_post_visit(&self, _v: VertexId) -> bool {
        false
    }

    /// 后序访问
    fn post_visit(&mut self, _v: VertexId) -> bool {
        true
    }

    /// 决定 u 的后继 v 是否加入边缘集合；默认仅加入未标记的顶点
    fn process_successor(&mut self, _u: VertexId, _v: VertexId, marked: bool) -> bool {
        !marked
    }
}

/// 只关心 `visit` 的闭包访问器
pub struct OnVisit<F>(pub F);

impl<F> Visitor for OnVisit<F>
where
    F: FnMut(VertexId) -> bool,
{
    fn visit(&mut self, v: VertexId) -> bool {
        (self.0)(v)
    }
}

/// 遍历结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalStatus {
    /// 边缘集合耗尽
    Completed,
    /// 被钩子中断
    Stopped,
}

/// 通用遍历
///
/// 遍历期间图被不可变借用，不能同时修改。
pub struct Traversal<'g, G, F> {
    /// 被遍历的图
    graph: &'g G,
    /// 边缘集合
    fringe: F,
    /// 已标记（已访问）顶点
    marked: HashSet<VertexId>,
    /// 已后序访问顶点
    post_visited: HashSet<VertexId>,
}

impl<'g, G: Graph> Traversal<'g, G, BreadthFirst> {
    /// 广度优先遍历
    pub fn breadth_first(graph: &'g G) -> Self {
        Self::new(graph, BreadthFirst::default())
    }
}

impl<'g, G: Graph> Traversal<'g, G, DepthFirst> {
    /// 深度优先遍历
    pub fn depth_first(graph: &'g G) -> Self {
        Self::new(graph, DepthFirst::default())
    }
}

impl<'g, G: Graph, F: Fringe> Traversal<'g, G, F> {
    /// 以 fringe 为边缘集合遍历 graph
    pub fn new(graph: &'g G, fringe: F) -> Self {
        Self {
            graph,
            fringe,
            marked: HashSet::new(),
            post_visited: HashSet::new(),
        }
    }

    /// 取消所有标记；后序访问记录保留
    pub fn clear(&mut self) {
        self.marked.clear();
    }

    /// 以 start 初始化边缘集合并遍历；图中不存在的起点被忽略
    pub fn traverse<V, I>(&mut self, start: I, visitor: &mut V) -> TraversalStatus
    where
        V: Visitor + ?Sized,
        I: IntoIterator<Item = VertexId>,
    {
        self.fringe.clear();
        for v in start {
            if self.graph.contains(v) {
                self.fringe.push(v);
            }
        }

        while let Some(node) = self.fringe.pop() {
            if !self.marked.contains(&node) {
                self.marked.insert(node);
                trace!(vertex = %node, "visit");
                if !visitor.visit(node) {
                    debug!(vertex = %node, marked = self.marked.len(), "遍历在访问时终止");
                    return TraversalStatus::Stopped;
                }
                self.fringe.push(node);
                for succ in self.graph.successors(node) {
                    let marked = self.marked.contains(&succ);
                    if visitor.process_successor(node, succ, marked) {
                        self.fringe.push(succ);
                    }
                }
            } else if visitor.should_post_visit(node) && !self.post_visited.contains(&node) {
                self.post_visited.insert(node);
                trace!(vertex = %node, "post_visit");
                if !visitor.post_visit(node) {
                    debug!(vertex = %node, marked = self.marked.len(), "遍历在后序访问时终止");
                    return TraversalStatus::Stopped;
                }
            }
        }

        debug!(marked = self.marked.len(), "遍历完成");
        TraversalStatus::Completed
    }

    /// 从单个顶点遍历
    pub fn traverse_from<V>(&mut self, v0: VertexId, visitor: &mut V) -> TraversalStatus
    where
        V: Visitor + ?Sized,
    {
        self.traverse([v0], visitor)
    }

    /// v 是否已标记
    pub fn is_marked(&self, v: VertexId) -> bool {
        self.marked.contains(&v)
    }

    /// v 是否已后序访问
    pub fn is_post_visited(&self, v: VertexId) -> bool {
        self.post_visited.contains(&v)
    }

    /// 已标记顶点数
    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    /// 被遍历的图
    pub fn graph(&self) -> &'g G {
        self.graph
    }
}
