//! # 帧缓冲绘制
//!
//! 每帧在 CPU 侧把接受的点写入窗口大小的 [`ColorImage`]，
//! 整张上传为纹理。视口可以大于窗口（放大时），
//! 落在图像外的点在这里静默丢弃。

use egui::{Color32, ColorImage};

use crate::core::point::Point;
use crate::core::scene::SceneProfile;

/// 顶点序号 → 颜色查找表。下标 0 为兜底色（洋红），正常路径不会命中。
pub fn build_vertex_lut(profile: &SceneProfile) -> [Color32; 4] {
    let mut lut = [Color32::from_rgb(255, 0, 255); 4];
    for (i, color) in profile.vertex_colors.iter().enumerate() {
        let [r, g, b, a] = color.as_array();
        lut[i + 1] = Color32::from_rgba_unmultiplied(r, g, b, a);
    }
    lut
}

pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color32>,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        let width = width as usize;
        let height = height as usize;
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    /// 写入单个像素；越界坐标直接丢弃。
    pub fn plot(&mut self, p: Point, color: Color32) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.pixels[y * self.width + x] = color;
    }

    pub fn into_image(self) -> ColorImage {
        ColorImage {
            size: [self.width, self.height],
            pixels: self.pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fractal::load_fractal_config;

    #[test]
    fn lut_matches_vertex_index_colors() {
        let cfg = load_fractal_config().unwrap();
        let profile = SceneProfile::from_config(&cfg).unwrap();
        let lut = build_vertex_lut(&profile);
        assert_eq!(lut[1], Color32::from_rgba_unmultiplied(255, 0, 0, 255));
        assert_eq!(lut[2], Color32::from_rgba_unmultiplied(0, 0, 255, 255));
        assert_eq!(lut[3], Color32::from_rgba_unmultiplied(0, 255, 0, 255));
    }

    #[test]
    fn plot_writes_inside_and_drops_outside() {
        let mut frame = FrameBuffer::new(4, 3, Color32::BLACK);
        let red = Color32::from_rgb(255, 0, 0);

        frame.plot(Point::new(1, 2), red);
        frame.plot(Point::new(-1, 0), red);
        frame.plot(Point::new(4, 0), red);
        frame.plot(Point::new(0, 3), red);

        let image = frame.into_image();
        assert_eq!(image.pixels[2 * 4 + 1], red);
        assert_eq!(image.pixels.iter().filter(|&&c| c == red).count(), 1);
    }
}
