use crate::{
    libs::{messages::Message, strategy::StrategyContext},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let context = StrategyContext::default();

    msg_print!(Message::StrategiesHeader, true);
    msg_print!(Message::SortKeysHeader);
    for key in context.sort_keys() {
        println!("  {}", key);
    }
    msg_print!(Message::FilterKeysHeader);
    for key in context.filter_keys() {
        println!("  {}", key);
    }
    msg_info!(Message::CompoundFilterHint, true);
    Ok(())
}
