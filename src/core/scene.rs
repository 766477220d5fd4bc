//! # 场景档案（SceneProfile）
//!
//! 校验并固化 `fractal.json` 的内容，是渲染循环使用的唯一配置来源。
//! 构造一次，整个进程生命周期内不再变化。

use crate::config::fractal::FractalConfig;
use crate::core::color::ColorRgba;
use crate::core::point::Point;
use crate::core::triangle::Triangle;
use crate::core::CoreError;

#[derive(Debug, Clone)]
pub struct SceneProfile {
    pub window_width: u32,
    pub window_height: u32,
    pub zoom_step: f32,
    pub points_per_scale: i64,
    pub triangle: Triangle,
    /// 按顶点序号 1..=3 索引（下标 0 为序号 1）
    pub vertex_colors: [ColorRgba; 3],
    pub outline_color: ColorRgba,
    pub background_color: ColorRgba,
}

impl SceneProfile {
    pub fn from_config(config: &FractalConfig) -> Result<Self, CoreError> {
        if config.vertices.len() != 3 {
            return Err(CoreError::InvalidVertexCount(config.vertices.len()));
        }
        if config.window.width == 0 || config.window.height == 0 {
            return Err(CoreError::InvalidWindowSize {
                width: config.window.width,
                height: config.window.height,
            });
        }

        let mut vertices = [Point::new(0, 0); 3];
        for (slot, v) in vertices.iter_mut().zip(&config.vertices) {
            *slot = Point::new(v.x, v.y);
        }

        let mut vertex_colors = [ColorRgba::from([0, 0, 0, 0]); 3];
        for index in 1u8..=3 {
            let rgba = config
                .vertex_colors
                .get(&index)
                .ok_or(CoreError::MissingVertexColor(index))?;
            vertex_colors[(index - 1) as usize] = ColorRgba::from(*rgba);
        }

        Ok(Self {
            window_width: config.window.width,
            window_height: config.window.height,
            zoom_step: config.zoom_step,
            points_per_scale: config.points_per_scale,
            triangle: Triangle::new(vertices),
            vertex_colors,
            outline_color: ColorRgba::from(config.outline_rgba),
            background_color: ColorRgba::from(config.background_rgba),
        })
    }
}
