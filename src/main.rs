use anyhow::Result;
use eframe::egui;

use sales_dashboard::app::SalesDashboardApp;
use sales_dashboard::config::DashboardConfig;
use sales_dashboard::data::cache;
use sales_dashboard::state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = DashboardConfig::load()?.with_args(std::env::args().skip(1));
    log::info!("Sales source: {}", config.source.path.display());

    let mut state = AppState {
        source: config.source.clone(),
        ..AppState::default()
    };
    match cache::global().get_or_load(&config.source.path, &config.source) {
        Ok(dataset) => state.set_dataset(dataset, &config.source.path),
        Err(e) => state.set_load_error(&e),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(SalesDashboardApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running the dashboard window: {e}"))
}
