use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Pipeline;
use crate::core::series;
use crate::core::window::select_window;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::colors::{CYAN, RESET, color_for_balance};
use crate::utils::date::weekday_abbrev;
use crate::utils::time::duration_hours;
use crate::utils::{balance_label, hours2readable};

/// Handle the `summary` subcommand: same pipeline as `chart`, printed as a
/// trailing-week table instead of rendered.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { sheet, target } = cmd {
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
            Err(AppError::InsufficientData) => {
                messages::warning(
                    "No data available: no sheet row is filled in enough to report on.",
                );
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        println!(
            "{}{:<16}{:>10}{:>14}{:>14}{}",
            CYAN, "Date", "Worked", "Cum worked", "Cum target", RESET
        );
        for record in window {
            println!(
                "{:<16}{:>10}{:>14}{:>14}",
                format!("{} {}", weekday_abbrev(record.date), record.date),
                hours2readable(duration_hours(record.worked)),
                format!("{:.2}h", record.cum_worked_hours),
                format!("{:.2}h", record.cum_target_hours),
            );
        }

        let balance = series::balance(window);
        println!(
            "\nBalance: {}{}{}",
            color_for_balance(balance),
            balance_label(balance),
            RESET
        );
    }
    Ok(())
}
