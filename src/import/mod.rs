//! 地图导入模块
//!
//! 从文本地图文件读取地点与道路。记录之间以空白分隔，可以跨行：
//! - `L <name> <x> <y>` 声明地点
//! - `R <from> <road> <length> <dir> <to>` 声明道路，同时加入反向路段

use crate::error::{Error, Result};
use crate::trip::RoadMap;
use crate::types::Direction;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::SplitWhitespace;
use tracing::{debug, info};

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub locations_imported: usize,
    pub roads_imported: usize,
    pub duration_ms: u64,
}

/// 一条地图记录
#[derive(Debug)]
enum Entry {
    Location {
        name: String,
        x: f64,
        y: f64,
    },
    Road {
        from: String,
        name: String,
        length: f64,
        direction: Direction,
        to: String,
    },
}

/// 地图导入器
#[derive(Debug, Default)]
pub struct MapImporter {
    stats: ImportStats,
}

impl MapImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self::default()
    }

    /// 最近一次导入的统计
    pub fn stats(&self) -> &ImportStats {
        &self.stats
    }

    /// 从文件导入
    pub fn import_file<P: AsRef<Path>>(&mut self, path: P) -> Result<RoadMap> {
        let path = path.as_ref();
        debug!(path = %path.display(), "读取地图文件");
        let file = File::open(path)?;
        self.import_reader(BufReader::new(file))
    }

    /// 从任意输入流导入
    pub fn import_reader<R: Read>(&mut self, mut reader: R) -> Result<RoadMap> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.import_str(&text)
    }

    /// 从字符串导入；记录按出现顺序生效，道路只能引用之前声明的地点
    pub fn import_str(&mut self, text: &str) -> Result<RoadMap> {
        let start = std::time::Instant::now();
        let mut tokens = text.split_whitespace();
        let mut map = RoadMap::new();
        let mut stats = ImportStats::default();
        let mut n = 0usize;

        while let Some(kind) = tokens.next() {
            n += 1;
            match parse_entry(kind, &mut tokens, n)? {
                Entry::Location { name, x, y } => {
                    map.add_location(&name, x, y)?;
                    stats.locations_imported += 1;
                }
                Entry::Road {
                    from,
                    name,
                    length,
                    direction,
                    to,
                } => {
                    map.add_road(&from, &name, length, direction, &to)?;
                    stats.roads_imported += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            entries = n,
            locations = stats.locations_imported,
            roads = stats.roads_imported,
            "地图导入完成"
        );
        self.stats = stats;
        Ok(map)
    }
}

/// 从文件导入地图
pub fn import_map<P: AsRef<Path>>(path: P) -> Result<RoadMap> {
    MapImporter::new().import_file(path)
}

fn parse_entry(kind: &str, tokens: &mut SplitWhitespace<'_>, n: usize) -> Result<Entry> {
    let entry = match kind {
        "L" => {
            let name = next_token(tokens)?.to_string();
            let x = parse_number(next_token(tokens)?, n)?;
            let y = parse_number(next_token(tokens)?, n)?;
            Entry::Location { name, x, y }
        }
        "R" => {
            let from = next_token(tokens)?.to_string();
            let name = next_token(tokens)?.to_string();
            let length = parse_number(next_token(tokens)?, n)?;
            let direction = next_token(tokens)?
                .parse::<Direction>()
                .map_err(|_| bad_entry(n))?;
            let to = next_token(tokens)?.to_string();
            Entry::Road {
                from,
                name,
                length,
                direction,
                to,
            }
        }
        _ => {
            return Err(Error::MapError(format!("map entry #{}: unknown type", n)));
        }
    };
    debug!(entry = n, kind, "解析地图记录");
    Ok(entry)
}

fn next_token<'a>(tokens: &mut SplitWhitespace<'a>) -> Result<&'a str> {
    tokens
        .next()
        .ok_or_else(|| Error::MapError("entry incomplete at end of file".to_string()))
}

fn parse_number(token: &str, n: usize) -> Result<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|x| x.is_finite())
        .ok_or_else(|| bad_entry(n))
}

fn bad_entry(n: usize) -> Error {
    Error::MapError(format!("bad entry #{}", n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_MAP: &str = "\
L Berkeley 0 0
L Oakland 3 -4
L Albany 0 3
R Berkeley I-80 5.0 NS Oakland
R Albany San_Pablo 3.2 NS Berkeley
";

    #[test]
    fn test_import_str() {
        let mut importer = MapImporter::new();
        let map = importer.import_str(SMALL_MAP).unwrap();

        assert_eq!(importer.stats().locations_imported, 3);
        assert_eq!(importer.stats().roads_imported, 2);
        assert_eq!(map.location_count(), 3);

        let berkeley = map.site("Berkeley").unwrap();
        let oakland = map.site("Oakland").unwrap();
        let road = map.road(berkeley, oakland).unwrap();
        assert_eq!(road.name(), "I-80");
        assert_eq!(road.direction(), Direction::NS);

        // 反向路段
        let back = map.road(oakland, berkeley).unwrap();
        assert_eq!(back.direction(), Direction::SN);
        assert_eq!(back.length(), 5.0);
    }

    #[test]
    fn test_import_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SMALL_MAP).unwrap();

        let map = import_map(file.path()).unwrap();
        let names: Vec<&str> = map.location_names().collect();
        assert_eq!(names, vec!["Berkeley", "Oakland", "Albany"]);
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = import_map(dir.path().join("no-such-map"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_road_before_location() {
        let text = "L A 0 0\nR A main 1.5 WE B\nL B 1 0\n";
        let err = MapImporter::new().import_str(text).unwrap_err();
        assert!(err.to_string().contains("location B not defined"));
    }

    #[test]
    fn test_errors_in_file_order() {
        // 第 2 条的语义错误先于第 3 条的格式错误
        let text = "L A 0 0\nR A main 1.0 NS B\nL C x 0\n";
        let err = MapImporter::new().import_str(text).unwrap_err();
        assert!(err.to_string().contains("location B not defined"));
    }

    #[test]
    fn test_unknown_type() {
        let err = MapImporter::new()
            .import_str("L A 0 0\nX B 1 1\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            Error::MapError("map entry #2: unknown type".to_string()).to_string()
        );
    }

    #[test]
    fn test_bad_number() {
        let err = MapImporter::new()
            .import_str("L A 0 0\nL B one 1\n")
            .unwrap_err();
        assert!(err.to_string().contains("bad entry #2"));

        let err = MapImporter::new()
            .import_str("L A 0 0\nL B 0 0\nR A main 1 NE B\n")
            .unwrap_err();
        assert!(err.to_string().contains("bad entry #3"));
    }

    #[test]
    fn test_incomplete_entry() {
        let err = MapImporter::new()
            .import_str("L A 0 0\nR A main 1.0 NS")
            .unwrap_err();
        assert!(err.to_string().contains("entry incomplete at end of file"));
    }

    #[test]
    fn test_duplicate_location() {
        let err = MapImporter::new()
            .import_str("L A 0 0\nL A 1 1\n")
            .unwrap_err();
        assert!(err.to_string().contains("multiple entries for A"));
    }

    #[test]
    fn test_undefined_location() {
        let err = MapImporter::new()
            .import_str("L A 0 0\nR A main 1.0 NS B\n")
            .unwrap_err();
        assert!(err.to_string().contains("location B not defined"));
    }
}
