//! # 视图状态与视口
//!
//! `ViewState` 是不可变的每帧值：渲染路径只读，更新只经过
//! [`ViewState::reduced`]，由滚轮事件驱动。缩放无上下限。
//!
//! `Viewport` 只作为点接受过滤器使用，不做裁剪变换。

use crate::core::point::Point;
use crate::core::triangle::Triangle;

/// 当前帧的视图状态。
///
/// `offset` 参与顶点变换与视口推导，但没有任何输入会修改它，
/// 始终保持 (0, 0)。
#[derive(Debug, Clone, Copy)]
pub struct ViewState {
    pub scale: f32,
    pub offset: Point,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::new(0, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomEvent {
    In,
    Out,
}

impl ViewState {
    /// 对一个滚轮事件做归约，返回新的视图状态。
    pub fn reduced(self, event: ZoomEvent, zoom_step: f32) -> Self {
        let scale = match event {
            ZoomEvent::In => self.scale * zoom_step,
            ZoomEvent::Out => self.scale / zoom_step,
        };
        Self { scale, ..self }
    }
}

/// 点接受区域（含边界）。
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Viewport {
    pub fn contains(&self, p: Point) -> bool {
        let (px, py) = (i64::from(p.x), i64::from(p.y));
        // 缩放无上限，w/h 可能饱和到 i64::MAX，加法需饱和处理
        px >= self.x
            && px <= self.x.saturating_add(self.w)
            && py >= self.y
            && py <= self.y.saturating_add(self.h)
    }
}

/// 按当前视图变换三角形的闭合轮廓。
///
/// 缩放中心固定为半宽/半高常量（1280x960 窗口即 x 绕 640、y 绕 480），
/// 与 offset 无关。
pub fn transformed_outline(
    triangle: &Triangle,
    view: ViewState,
    window_width: u32,
    window_height: u32,
) -> [Point; 4] {
    let cx = (window_width / 2) as i32;
    let cy = (window_height / 2) as i32;

    let mut outline = triangle.outline();
    for p in &mut outline {
        p.x = ((p.x - cx) as f32 * view.scale + (cx + view.offset.x) as f32) as i32;
        p.y = ((p.y - cy) as f32 * view.scale + (cy + view.offset.y) as f32) as i32;
    }
    outline
}

/// 由视图状态推导视口。
///
/// 宽高随 scale 放大，但不会小于窗口尺寸：缩小视图只降低点密度，
/// 不收紧接受区域。
pub fn derive_viewport(view: ViewState, window_width: u32, window_height: u32) -> Viewport {
    let win_w = i64::from(window_width);
    let win_h = i64::from(window_height);
    Viewport {
        x: i64::from(view.offset.x),
        y: i64::from(view.offset.y),
        w: ((window_width as f32 * view.scale) as i64).max(win_w),
        h: ((window_height as f32 * view.scale) as i64).max(win_h),
    }
}
