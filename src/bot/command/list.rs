use serenity::all::{ChannelId, CreateEmbed, MessageId};

use crate::{error::AppError, model::scoreboard::Scoreboard};

use super::CommandContext;

pub async fn run(command_ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let scoreboards = command_ctx
        .state
        .registry
        .by_guild(command_ctx.guild_id.get())
        .await;

    if scoreboards.is_empty() {
        command_ctx
            .reply_embed(empty_embed(&command_ctx.state.prefix))
            .await?;
        return Ok(());
    }

    let mut lines = Vec::with_capacity(scoreboards.len());
    for (index, scoreboard) in scoreboards.iter().enumerate() {
        let channel_exists = command_ctx
            .ctx
            .cache
            .guild(command_ctx.guild_id)
            .is_some_and(|guild| {
                guild
                    .channels
                    .contains_key(&ChannelId::new(scoreboard.channel_id))
            });
        let message_exists = channel_exists
            && command_ctx
                .ctx
                .http
                .get_message(
                    ChannelId::new(scoreboard.channel_id),
                    MessageId::new(scoreboard.message_id),
                )
                .await
                .is_ok();

        lines.push(list_line(
            index + 1,
            scoreboard,
            channel_exists,
            message_exists,
        ));
    }

    command_ctx
        .reply_embed(
            CreateEmbed::new()
                .title(list_title(scoreboards.len()))
                .description(lines.join("\n")),
        )
        .await?;

    Ok(())
}

fn list_title(count: usize) -> String {
    match count {
        1 => "This guild has 1 scoreboard.".to_string(),
        count => format!("This guild has {} scoreboards.", count),
    }
}

/// One entry of the list; missing channels and messages are flagged.
fn list_line(
    index: usize,
    scoreboard: &Scoreboard,
    channel_exists: bool,
    message_exists: bool,
) -> String {
    let channel = if channel_exists {
        format!("<#{}>", scoreboard.channel_id)
    } else {
        "No channel ⚠️".to_string()
    };
    let jump = if message_exists {
        format!("[Jump to message]({})", scoreboard.jump_url())
    } else {
        "No message ⚠️".to_string()
    };

    format!(
        "**#{}** | {} ({}) - \n{} - ID: `{}`",
        index, scoreboard.name, channel, jump, scoreboard.message_id
    )
}

fn empty_embed(prefix: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("This guild doesn't have any scoreboards yet!")
        .description(format!("You can create one by typing `{}create`.", prefix))
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    fn scoreboard() -> Scoreboard {
        Scoreboard::from_entity(
            fixture::scoreboard::entity_builder()
                .name("Main server")
                .build(),
        )
        .unwrap()
    }

    #[test]
    fn lists_channel_and_jump_link() {
        let line = list_line(1, &scoreboard(), true, true);

        assert_eq!(
            line,
            "**#1** | Main server (<#111111111>) - \n[Jump to message](https://discord.com/channels/987654321/111111111/222222222) - ID: `222222222`"
        );
    }

    #[test]
    fn flags_missing_channel_and_message() {
        let line = list_line(3, &scoreboard(), false, false);

        assert_eq!(
            line,
            "**#3** | Main server (No channel ⚠️) - \nNo message ⚠️ - ID: `222222222`"
        );
    }

    #[test]
    fn counts_scoreboards_in_title() {
        assert_eq!(list_title(1), "This guild has 1 scoreboard.");
        assert_eq!(list_title(4), "This guild has 4 scoreboards.");
    }

    #[test]
    fn empty_list_points_to_create() {
        let json = serde_json::to_value(empty_embed("s!")).unwrap();

        assert_eq!(json["title"], "This guild doesn't have any scoreboards yet!");
        assert_eq!(json["description"], "You can create one by typing `s!create`.");
    }
}
