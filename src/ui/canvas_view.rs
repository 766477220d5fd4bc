use egui::{Color32, Pos2, Rect, Sense, Stroke, TextureHandle, Ui, Vec2};

use crate::core::point::Point;

/// 绘制一帧：整张点图纹理 + 三角形闭合轮廓。
///
/// 纹理按 1:1 像素贴在画布左上角，轮廓用画笔连线叠加在上面。
pub fn show_canvas(
    ui: &mut Ui,
    texture: &TextureHandle,
    outline: &[Point; 4],
    outline_color: Color32,
) {
    let available = ui.available_size();
    let (rect, _response) = ui.allocate_exact_size(available, Sense::hover());
    let painter = ui.painter_at(rect);

    let image_rect = Rect::from_min_size(rect.min, texture.size_vec2());
    painter.image(
        texture.id(),
        image_rect,
        Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
        Color32::WHITE,
    );

    // ── triangle outline ─────────────────────────────────────
    let origin = rect.min;
    let to_screen = |p: &Point| origin + Vec2::new(p.x as f32, p.y as f32);
    let stroke = Stroke::new(1.0, outline_color);
    for segment in outline.windows(2) {
        painter.line_segment([to_screen(&segment[0]), to_screen(&segment[1])], stroke);
    }
}
