use crate::{
    libs::{
        board::Board,
        messages::Message,
        settings::{self, SettingValue, Settings},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort strategy key (see `strategies`)
    #[arg(short, long, default_value = "newest")]
    sort: String,
    /// Filter strategy key, or type:<category> / search:<text>
    #[arg(short, long, default_value = "all")]
    filter: String,
    /// Hide completed tasks
    #[arg(long)]
    hide_completed: bool,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut board = Board::seeded(Settings::default())?;

    if args.hide_completed {
        board.update_setting(settings::SHOW_COMPLETED, SettingValue::Flag(false))?;
    }

    let strategies = board.strategies_mut();
    strategies
        .set_sort(&args.sort)
        .map_err(|e| msg_error_anyhow!(Message::ActionFailed(e.to_string())))?;
    strategies
        .set_filter(&args.filter)
        .map_err(|e| msg_error_anyhow!(Message::ActionFailed(e.to_string())))?;

    let tasks = board.visible_tasks();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    let strategies = board.strategies();
    msg_print!(
        Message::CurrentStrategies(strategies.current_sort().to_string(), strategies.current_filter().to_string()),
        true
    );
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader);
    View::tasks(&tasks)?;
    Ok(())
}
