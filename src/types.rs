//! 行程规划的通用类型：地点、道路、行驶方向

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 道路方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 由北向南
    NS,
    /// 由南向北
    SN,
    /// 由东向西
    EW,
    /// 由西向东
    WE,
}

impl Direction {
    /// 反方向
    pub fn reverse(self) -> Self {
        match self {
            Direction::NS => Direction::SN,
            Direction::SN => Direction::NS,
            Direction::EW => Direction::WE,
            Direction::WE => Direction::EW,
        }
    }

    /// 行程报告中使用的全称
    pub fn full_name(self) -> &'static str {
        match self {
            Direction::NS => "south",
            Direction::SN => "north",
            Direction::EW => "west",
            Direction::WE => "east",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NS" => Ok(Direction::NS),
            "SN" => Ok(Direction::SN),
            "EW" => Ok(Direction::EW),
            "WE" => Ok(Direction::WE),
            other => Err(Error::MapError(format!("无效的方向: {}", other))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

/// 地点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// 与另一地点的直线距离
    pub fn dist(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// 一段道路
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Road {
    name: String,
    direction: Direction,
    length: f64,
}

impl Road {
    pub fn new(name: impl Into<String>, direction: Direction, length: f64) -> Self {
        Self {
            name: name.into(),
            direction,
            length,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// 长度（英里）
    pub fn length(&self) -> f64 {
        self.length
    }

    /// 反向的同一段道路
    pub fn reversed(&self) -> Self {
        Self {
            name: self.name.clone(),
            direction: self.direction.reverse(),
            length: self.length,
        }
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
