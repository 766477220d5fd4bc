use crate::core::point::Point;

/// 逻辑坐标系下的等边三角形（缩放前）。
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point; 3],
}

impl Triangle {
    pub fn new(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }

    /// 闭合轮廓数组：首顶点在末尾重复一次，供连线绘制。
    ///
    /// 点生成器同样使用此数组：目标顶点按序号 1..=3 选取，
    /// 其中序号 3 即末尾的重复首顶点。
    pub fn outline(&self) -> [Point; 4] {
        [
            self.vertices[0],
            self.vertices[1],
            self.vertices[2],
            self.vertices[0],
        ]
    }
}
