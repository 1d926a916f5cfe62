//! 行程规划模块
//!
//! 基于道路地图和 A* 搜索，为依次经过的多个地点生成逐步行车指引

mod map;
mod planner;

pub use map::{RoadGraph, RoadMap};
pub use planner::{Itinerary, Segment, Step, TripOptions, TripPlanner};
