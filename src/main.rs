mod config;
mod core;
mod generation;
mod rendering;
mod ui;

use crate::config::fractal::load_fractal_config;
use crate::core::scene::SceneProfile;
use ui::app::ChaosGameApp;

fn load_profile() -> Result<SceneProfile, Box<dyn std::error::Error>> {
    let config = load_fractal_config()?;
    Ok(SceneProfile::from_config(&config)?)
}

fn main() {
    env_logger::init();

    let profile = match load_profile() {
        Ok(profile) => profile,
        Err(error) => {
            log::error!("场景配置加载失败: {error}");
            std::process::exit(-1);
        }
    };
    log::info!(
        "场景就绪: 窗口 {}x{}, 基准点数 {}",
        profile.window_width,
        profile.window_height,
        profile.points_per_scale
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sierpinski Triangle")
            .with_inner_size([
                profile.window_width as f32,
                profile.window_height as f32,
            ])
            .with_resizable(false)
            .with_app_id("lian-chaos-game"),
        ..Default::default()
    };

    if let Err(error) = eframe::run_native(
        "Sierpinski Triangle",
        options,
        Box::new(move |cc| Box::new(ChaosGameApp::new(cc, profile))),
    ) {
        log::error!("窗口启动失败: {error}");
        std::process::exit(-1);
    }
}
