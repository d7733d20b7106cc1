use crate::chart::render_chart;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Pipeline;
use crate::core::series;
use crate::core::window::select_window;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::balance_label;
use crate::utils::colors::{RESET, color_for_balance};

/// Handle the `chart` subcommand: full pipeline plus SVG rendering.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chart { sheet, out, target } = cmd {
        let mut cfg = cfg.clone();
        if let Some(t) = target {
            cfg.business_day_target_hours = *t;
        }

        let output = Pipeline::from_sheet(sheet, &cfg)?;

        let window = match select_window(
            &output.series,
            &output.table,
            cfg.window_days,
            cfg.completeness_threshold,
        ) {
            Ok(w) => w,
            // Graceful degradation: report, render nothing, exit cleanly.
            Err(AppError::InsufficientData) => {
                messages::warning("No data available: no sheet row is filled in enough to chart.");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let balance = series::balance(window);
        render_chart(window, balance, out, (cfg.chart_width, cfg.chart_height))?;

        messages::success(format!("Chart written to {}", out));
        println!(
            "Balance: {}{}{}",
            color_for_balance(balance),
            balance_label(balance),
            RESET
        );
    }
    Ok(())
}
