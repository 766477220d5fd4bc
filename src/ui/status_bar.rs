use egui::Ui;

pub fn show_status_bar(ui: &mut Ui, fps: f32, scale: f32, accepted: usize, attempted: i64) {
    ui.horizontal_wrapped(|ui| {
        ui.label(format!("缩放: {:.0}%", scale * 100.0));
        ui.separator();
        ui.label(format!("绘制点数: {accepted} / 尝试 {attempted}"));
        ui.separator();
        ui.label(format!("FPS: {fps:.0}"));
    });
}
