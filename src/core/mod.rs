pub mod color;
pub mod point;
pub mod scene;
pub mod triangle;

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CoreError {
    InvalidVertexCount(usize),
    MissingVertexColor(u8),
    InvalidWindowSize { width: u32, height: u32 },
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVertexCount(count) => {
                write!(f, "顶点数量非法: 需要 3 个，配置给出 {count} 个")
            }
            Self::MissingVertexColor(index) => {
                write!(f, "缺少顶点配色: vertex_colors 未包含序号 {index}")
            }
            Self::InvalidWindowSize { width, height } => {
                write!(f, "窗口尺寸非法: {width}x{height}，宽高必须大于 0")
            }
        }
    }
}

impl Error for CoreError {}
