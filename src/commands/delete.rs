use crate::libs::messages::Message;
use crate::libs::task::TaskId;
use crate::libs::tracker::Tracker;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id to delete
    #[arg(required = true)]
    id: TaskId,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tracker = Tracker::open()?;

    let Some(task) = tracker.get_task(args.id)? else {
        msg_warning!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tracker.delete_task(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));

    Ok(())
}
