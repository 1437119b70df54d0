use serenity::all::CreateEmbed;

use crate::{error::AppError, model::scoreboard::ScoreboardOption};

use super::{Command, CommandContext};

pub async fn run(command_ctx: &CommandContext<'_>) -> Result<(), AppError> {
    command_ctx
        .reply_embed(help_embed(&command_ctx.state.prefix))
        .await?;

    Ok(())
}

/// Embed listing every command with its usage.
pub fn help_embed(prefix: &str) -> CreateEmbed {
    let lines: Vec<String> = Command::ALL
        .iter()
        .map(|command| {
            let usage = match command.usage() {
                "" => format!("{}{}", prefix, command.name()),
                usage => format!("{}{} {}", prefix, command.name(), usage),
            };
            format!("`{}`\n{}", usage, command.description())
        })
        .collect();

    CreateEmbed::new()
        .title("Commands")
        .description(format!(
            "{}\n\nAvailable options: {}",
            lines.join("\n\n"),
            ScoreboardOption::list()
        ))
}
