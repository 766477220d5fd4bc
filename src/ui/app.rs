use std::time::Duration;

use eframe::egui;
use egui::{Color32, TextureHandle, TextureOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::scene::SceneProfile;
use crate::generation::chaos;
use crate::rendering::canvas::{build_vertex_lut, FrameBuffer};
use crate::rendering::viewport::{derive_viewport, transformed_outline, ViewState, ZoomEvent};
use crate::ui::canvas_view::show_canvas;
use crate::ui::status_bar::show_status_bar;

pub struct ChaosGameApp {
    profile: SceneProfile,
    view: ViewState,
    /// 进程级唯一 RNG，启动时由系统熵播种，之后整个生命周期复用
    rng: StdRng,
    vertex_lut: [Color32; 4],
    background: Color32,
    outline_color: Color32,
    texture: Option<TextureHandle>,
    last_accepted: usize,
    last_attempted: i64,
}

impl ChaosGameApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, profile: SceneProfile) -> Self {
        let vertex_lut = build_vertex_lut(&profile);
        let [r, g, b, a] = profile.background_color.as_array();
        let background = Color32::from_rgba_unmultiplied(r, g, b, a);
        let [r, g, b, a] = profile.outline_color.as_array();
        let outline_color = Color32::from_rgba_unmultiplied(r, g, b, a);

        Self {
            profile,
            view: ViewState::default(),
            rng: StdRng::from_entropy(),
            vertex_lut,
            background,
            outline_color,
            texture: None,
            last_accepted: 0,
            last_attempted: 0,
        }
    }

    /// 收集本帧的滚轮事件，每个事件对应一次缩放归约。
    fn zoom_events(ctx: &egui::Context) -> Vec<ZoomEvent> {
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel { delta, .. } => {
                        if delta.y > 0.0 {
                            Some(ZoomEvent::In)
                        } else if delta.y < 0.0 {
                            Some(ZoomEvent::Out)
                        } else {
                            None
                        }
                    }
                    _ => None,
                })
                .collect()
        })
    }
}

impl eframe::App for ChaosGameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── input → view state ───────────────────────────────
        for event in Self::zoom_events(ctx) {
            self.view = self.view.reduced(event, self.profile.zoom_step);
        }

        // ── transform + generate + plot ──────────────────────
        let width = self.profile.window_width;
        let height = self.profile.window_height;
        let outline = transformed_outline(&self.profile.triangle, self.view, width, height);
        let viewport = derive_viewport(self.view, width, height);

        let pass = chaos::generate(
            &mut self.rng,
            &outline,
            self.view.scale,
            self.profile.points_per_scale,
            &viewport,
        );

        let mut frame_buffer = FrameBuffer::new(width, height, self.background);
        for point in &pass.accepted {
            frame_buffer.plot(point.pos, self.vertex_lut[point.vertex_index as usize]);
        }
        let image = frame_buffer.into_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("chaos_frame", image, TextureOptions::NEAREST));
            }
        }
        self.last_accepted = pass.accepted.len();
        self.last_attempted = pass.attempted;

        // ── panels ───────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .resizable(false)
            .min_height(28.0)
            .show(ctx, |ui| {
                let fps = ctx.input(|i| {
                    if i.stable_dt > 0.0 {
                        1.0 / i.stable_dt
                    } else {
                        0.0
                    }
                });
                show_status_bar(
                    ui,
                    fps,
                    self.view.scale,
                    self.last_accepted,
                    self.last_attempted,
                );
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    show_canvas(ui, texture, &outline, self.outline_color);
                }
            });

        // 约 16ms 一帧
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
