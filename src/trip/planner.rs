//! 行程规划
//!
//! 对请求中每一对相邻地点运行 A*，合并同名同向的连续路段

use super::map::RoadMap;
use crate::algorithm::{EdgeWeights, SimpleShortestPaths};
use crate::error::{Error, Result};
use crate::graph::VertexId;
use crate::types::{Direction, Location};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 规划选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripOptions {
    /// 是否使用直线距离作为 A* 启发值；关闭时退化为 Dijkstra
    pub use_heuristic: bool,
}

impl Default for TripOptions {
    fn default() -> Self {
        Self {
            use_heuristic: true,
        }
    }
}

/// 行程中的一步
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// 全程连续编号，从 1 开始
    pub number: usize,
    pub road: String,
    pub direction: Direction,
    /// 合并后的里程
    pub length: f64,
    /// 本段最后一步到达的地点
    pub arrival: Option<String>,
}

/// 两个相邻请求地点之间的一段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub steps: Vec<Step>,
}

/// 完整行程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub start: String,
    pub segments: Vec<Segment>,
}

impl Itinerary {
    /// 总里程
    pub fn total_distance(&self) -> f64 {
        self.segments.iter().map(|s| s.distance).sum()
    }

    /// 全部步骤
    pub fn steps(&self) -> impl Iterator<Item = &Step> + '_ {
        self.segments.iter().flat_map(|s| s.steps.iter())
    }
}

/// 路长为边权，到目标的直线距离为启发值
struct RoadWeights<'m> {
    map: &'m RoadMap,
    target: Option<&'m Location>,
}

impl EdgeWeights for RoadWeights<'_> {
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64 {
        self.map
            .road(u, v)
            .map_or(f64::INFINITY, |road| road.length())
    }

    fn estimated_distance(&self, v: VertexId) -> f64 {
        match (self.target, self.map.location(v)) {
            (Some(target), Some(here)) => here.dist(target),
            _ => 0.0,
        }
    }
}

/// 行程规划器
pub struct TripPlanner<'m> {
    map: &'m RoadMap,
    options: TripOptions,
}

impl<'m> TripPlanner<'m> {
    pub fn new(map: &'m RoadMap) -> Self {
        Self::with_options(map, TripOptions::default())
    }

    pub fn with_options(map: &'m RoadMap, options: TripOptions) -> Self {
        Self { map, options }
    }

    pub fn options(&self) -> &TripOptions {
        &self.options
    }

    /// 依次经过给定地点规划行程
    pub fn plan<S: AsRef<str>>(&self, destinations: &[S]) -> Result<Itinerary> {
        if destinations.len() < 2 {
            return Err(Error::TripError(
                "must have at least two locations for a trip".to_string(),
            ));
        }

        let sites = destinations
            .iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut segments = Vec::with_capacity(sites.len() - 1);
        let mut number = 1;
        for pair in sites.windows(2) {
            let segment = self.plan_segment(pair[0], pair[1], &mut number)?;
            segments.push(segment);
        }

        Ok(Itinerary {
            start: destinations[0].as_ref().to_string(),
            segments,
        })
    }

    fn lookup(&self, name: &str) -> Result<VertexId> {
        self.map
            .site(name)
            .ok_or_else(|| Error::TripError(format!("No location named {}", name)))
    }

    fn name_of(&self, v: VertexId) -> String {
        self.map
            .location(v)
            .map_or_else(|| v.to_string(), |l| l.name().to_string())
    }

    fn plan_segment(&self, from: VertexId, to: VertexId, number: &mut usize) -> Result<Segment> {
        let weights = RoadWeights {
            map: self.map,
            target: if self.options.use_heuristic {
                self.map.location(to)
            } else {
                None
            },
        };

        let mut paths =
            SimpleShortestPaths::dense(self.map.graph(), from, weights)?.with_destination(to);
        paths.set_paths();

        let (from_name, to_name) = (self.name_of(from), self.name_of(to));
        let path = paths.path_to_destination().map_err(|e| match e {
            Error::NoPath(_) => {
                Error::TripError(format!("no route from {} to {}", from_name, to_name))
            }
            other => other,
        })?;
        debug!(from = %from_name, to = %to_name, hops = path.len() - 1, "路段规划完成");

        let mut steps: Vec<Step> = Vec::new();
        for hop in path.windows(2) {
            let road = self.map.road(hop[0], hop[1]).ok_or_else(|| {
                Error::EdgeNotFound(format!("({}, {})", hop[0], hop[1]))
            })?;
            match steps.last_mut() {
                Some(step) if step.road == road.name() && step.direction == road.direction() => {
                    step.length += road.length();
                }
                _ => {
                    steps.push(Step {
                        number: *number,
                        road: road.name().to_string(),
                        direction: road.direction(),
                        length: road.length(),
                        arrival: None,
                    });
                    *number += 1;
                }
            }
        }
        if let Some(last) = steps.last_mut() {
            last.arrival = Some(to_name.clone());
        }

        Ok(Segment {
            from: from_name,
            to: to_name,
            distance: paths.weight(to),
            steps,
        })
    }
}
