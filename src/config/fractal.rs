//! # 分形场景配置
//!
//! 内嵌 `fractal.json`：三角形逻辑顶点、顶点配色、窗口尺寸、
//! 缩放步进与基准点数。程序不读取任何外部配置文件。

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::ConfigError;

const FRACTAL_JSON: &str = include_str!("../assets/fractal.json");

#[derive(Debug, Clone, Deserialize)]
pub struct FractalConfig {
    pub window: WindowConfig,
    /// 每次滚轮事件的缩放倍率
    pub zoom_step: f32,
    /// scale = 1.0 时一帧尝试生成的点数
    pub points_per_scale: i64,
    pub vertices: Vec<VertexConfig>,
    /// 顶点序号 (1..=3) → RGBA
    pub vertex_colors: BTreeMap<u8, [u8; 4]>,
    pub outline_rgba: [u8; 4],
    pub background_rgba: [u8; 4],
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VertexConfig {
    pub x: i32,
    pub y: i32,
    pub name: String,
}

pub fn load_fractal_config() -> Result<FractalConfig, ConfigError> {
    let config: FractalConfig = serde_json::from_str(FRACTAL_JSON)?;
    Ok(config)
}
