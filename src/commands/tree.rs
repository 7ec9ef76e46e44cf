use crate::{
    libs::{board::Board, component::TreeError, messages::Message, settings::Settings, task::Status, view::View},
    msg_bail_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Group ids to show collapsed
    #[arg(short, long)]
    collapse: Vec<u32>,
    /// Mark a task or a whole group as completed before rendering
    #[arg(long)]
    complete: Option<u32>,
}

pub fn cmd(args: TreeArgs) -> Result<()> {
    let mut board = Board::seeded(Settings::default())?;

    if let Some(id) = args.complete {
        match board.set_status(id, Status::Completed) {
            Ok(touched) => msg_success!(Message::StatusApplied(touched, Status::Completed.to_string())),
            Err(_) => msg_bail_anyhow!(Message::ComponentNotFound(id)),
        }
    }

    for id in args.collapse {
        match board.set_expanded(id, false) {
            Ok(()) => {}
            Err(TreeError::NotAGroup) => msg_warning!(Message::NotAGroup(id)),
            Err(TreeError::NotFound(_)) => msg_bail_anyhow!(Message::ComponentNotFound(id)),
        }
    }

    let root = board.root();
    msg_print!(Message::TreeHeader, true);
    View::tree(root)?;
    msg_print!(Message::GroupSummary(root.count_tasks(), root.progress()), true);
    Ok(())
}
