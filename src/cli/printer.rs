//! 行程打印器
//!
//! 提供文本报告和 JSON 两种输出格式

use crate::error::Result;
use crate::trip::{Itinerary, Step};
use std::fmt::Write;

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 逐步文本报告
    Text,
    /// JSON
    Json,
}

/// 行程打印器
#[derive(Debug, Clone)]
pub struct Printer {
    mode: PrintMode,
    precision: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Text)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode, precision: 1 }
    }

    /// 设置里程保留的小数位数
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印行程
    pub fn print_itinerary(&self, itinerary: &Itinerary) -> Result<String> {
        match self.mode {
            PrintMode::Text => Ok(self.format_text(itinerary)),
            PrintMode::Json => {
                let mut json = serde_json::to_string_pretty(itinerary)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// 文本格式
    fn format_text(&self, itinerary: &Itinerary) -> String {
        let mut output = format!("From {}:\n\n", itinerary.start);
        for step in itinerary.steps() {
            self.format_step(&mut output, step);
        }
        output
    }

    fn format_step(&self, output: &mut String, step: &Step) {
        let length = self.round(step.length);
        let _ = write!(
            output,
            "{}. Take {} {} for {:.prec$} miles",
            step.number,
            step.road,
            step.direction.full_name(),
            length,
            prec = self.precision
        );
        match &step.arrival {
            Some(place) => {
                let _ = writeln!(output, " to {}.", place);
            }
            None => output.push_str(".\n"),
        }
    }

    /// 四舍五入（.5 远离零），避免格式化时的银行家舍入
    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision.min(15) as i32);
        (value * scale).round() / scale
    }
}
