// ==========================================
// 地铁失物资源规划 - 命令行入口
// ==========================================
// 用法:
//   lost-items-planner [--csv | --stations-csv] [config.json] [YYYY-MM | YYYY-MM-DD]
//
// 默认输出驾驶舱总览 JSON；--csv / --stations-csv 输出月度预测 CSV
// 日志输出到 stderr
// ==========================================

use std::path::PathBuf;

use anyhow::Context;
use lost_items_planner::api::validator::parse_reference_date;
use lost_items_planner::app::AppState;
use lost_items_planner::config::ConfigManager;
use lost_items_planner::exporter::{export_days_csv, export_stations_csv};
use lost_items_planner::logging;

enum OutputMode {
    Dashboard,
    DaysCsv,
    StationsCsv,
}

fn main() -> anyhow::Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", lost_items_planner::APP_NAME, lost_items_planner::VERSION);
    tracing::info!("==================================================");

    let mut mode = OutputMode::Dashboard;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--csv" => mode = OutputMode::DaysCsv,
            "--stations-csv" => mode = OutputMode::StationsCsv,
            _ => positional.push(arg),
        }
    }
    let mut positional = positional.into_iter();

    let config_manager = match positional.next().filter(|s| !s.trim().is_empty()) {
        Some(path) => ConfigManager::load(&PathBuf::from(path)),
        None => ConfigManager::load_default(),
    }
    .context("加载配置失败")?;

    let reference = match positional.next() {
        Some(raw) => parse_reference_date(&raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let state = AppState::new(&config_manager)?;
    let stdout = std::io::stdout().lock();

    match mode {
        OutputMode::Dashboard => {
            let overview = state.dashboard_api.overview(reference)?;
            serde_json::to_writer_pretty(stdout, &overview).context("输出驾驶舱总览失败")?;
            println!();
        }
        OutputMode::DaysCsv => {
            let days = state.forecast_api.month_forecast_for(reference)?;
            export_days_csv(&days, stdout)?;
        }
        OutputMode::StationsCsv => {
            let days = state.forecast_api.month_forecast_for(reference)?;
            export_stations_csv(&days, stdout)?;
        }
    }

    Ok(())
}
