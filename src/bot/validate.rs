//! Validation of option values that needs the Discord context.
//!
//! Used by the creation wizard and the `set` command. Text options are checked by
//! `util::validate`; this module adds channel resolution, the bot's send permission and
//! the reachability check of the RCON API.

use serenity::all::{ChannelId, ChannelType, Context, GuildId};
use std::time::Duration;

use crate::{
    error::{rcon::RconError, AppError},
    model::scoreboard::{ScoreboardChange, ScoreboardOption},
    service::rcon::RconClient,
    util::{
        parse::parse_snowflake,
        validate::{
            validate_api_password, validate_api_url, validate_api_user, validate_name,
            validate_scoreboard_url, validate_server_id,
        },
    },
};

/// Validates a new value for one option.
///
/// # Arguments
/// - `ctx` - Discord context used to look up channels and permissions
/// - `guild_id` - Guild the scoreboard belongs to
/// - `option` - Option being set
/// - `value` - Value as typed by the user
/// - `rcon_timeout` - Timeout of the RCON reachability check
///
/// # Returns
/// - `Ok(ScoreboardChange)` - Normalized value ready to be applied
/// - `Err(AppError::BadRequest)` - Value rejected; the message is shown to the user
/// - `Err(AppError::DiscordErr)` - Looking up the bot's member failed
pub async fn validate_option(
    ctx: &Context,
    guild_id: GuildId,
    option: ScoreboardOption,
    value: &str,
    rcon_timeout: Duration,
) -> Result<ScoreboardChange, AppError> {
    let change = match option {
        ScoreboardOption::Name => ScoreboardChange::Name(validate_name(value)?),
        ScoreboardOption::Channel => {
            ScoreboardChange::Channel(validate_channel(ctx, guild_id, value).await?)
        }
        ScoreboardOption::ApiUrl => {
            let api_url = validate_api_url(value)?;
            check_api_reachable(&api_url, rcon_timeout).await?;
            ScoreboardChange::ApiUrl(api_url)
        }
        ScoreboardOption::ApiUser => ScoreboardChange::ApiUser(validate_api_user(value)?),
        ScoreboardOption::ApiPassword => {
            ScoreboardChange::ApiPassword(validate_api_password(value)?)
        }
        ScoreboardOption::ScoreboardUrl => {
            ScoreboardChange::ScoreboardUrl(validate_scoreboard_url(value)?)
        }
        ScoreboardOption::ServerId => ScoreboardChange::ServerId(validate_server_id(value)?),
    };

    Ok(change)
}

/// Resolves a text channel of the guild the bot can post in.
async fn validate_channel(
    ctx: &Context,
    guild_id: GuildId,
    value: &str,
) -> Result<u64, AppError> {
    let channels = text_channels(ctx, guild_id);
    let channel_id = resolve_channel(value, &channels)
        .ok_or_else(|| AppError::BadRequest(format!("Channel \"{}\" not found.", value.trim())))?;

    if !bot_can_send(ctx, guild_id, ChannelId::new(channel_id)).await? {
        return Err(AppError::BadRequest(
            "Can not send messages in that channel".to_string(),
        ));
    }

    Ok(channel_id)
}

/// Ids and names of the guild's text and announcement channels from the cache.
fn text_channels(ctx: &Context, guild_id: GuildId) -> Vec<(u64, String)> {
    let Some(guild) = ctx.cache.guild(guild_id) else {
        return Vec::new();
    };

    guild
        .channels
        .values()
        .filter(|channel| matches!(channel.kind, ChannelType::Text | ChannelType::News))
        .map(|channel| (channel.id.get(), channel.name.clone()))
        .collect()
}

/// Finds a channel by mention, id or name.
///
/// # Arguments
/// - `input` - `<#id>`, a bare id, or a channel name with or without `#`
/// - `channels` - Candidate channels as `(id, name)`
///
/// # Returns
/// - `Some(u64)` - Id of the matching channel
/// - `None` - No candidate matches
pub fn resolve_channel(input: &str, channels: &[(u64, String)]) -> Option<u64> {
    if let Some(id) = parse_snowflake(input) {
        return channels
            .iter()
            .find(|(channel_id, _)| *channel_id == id)
            .map(|(channel_id, _)| *channel_id);
    }

    let name = input.trim().trim_start_matches('#');
    channels
        .iter()
        .find(|(_, channel_name)| channel_name == name)
        .map(|(channel_id, _)| *channel_id)
}

/// Checks whether the bot may send messages in a guild channel.
async fn bot_can_send(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<bool, AppError> {
    let bot_id = ctx.cache.current_user().id;
    let member = guild_id.member(ctx, bot_id).await?;

    let Some(guild) = ctx.cache.guild(guild_id) else {
        return Ok(false);
    };
    let Some(channel) = guild.channels.get(&channel_id) else {
        return Ok(false);
    };

    Ok(guild.user_permissions_in(channel, &member).send_messages())
}

/// Checks that an RCON API answers `public_info`.
async fn check_api_reachable(api_url: &str, timeout: Duration) -> Result<(), AppError> {
    let result = match RconClient::new(api_url, timeout) {
        Ok(client) => client.check_public_info().await,
        Err(e) => Err(e),
    };

    result.map_err(|e| AppError::BadRequest(reachability_message(&e)))
}

/// Short reason shown when an API URL fails the reachability check.
///
/// A body that is not JSON points at a wrong URL; the raw body is left out since the
/// reason is shown in an embed author line.
fn reachability_message(error: &RconError) -> String {
    match error {
        RconError::UnexpectedContent(_) => {
            "Webpage returned unexpected data. Likely the URL is incorrect.".to_string()
        }
        e => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> Vec<(u64, String)> {
        vec![
            (111, "general".to_string()),
            (222, "scoreboard".to_string()),
        ]
    }

    #[test]
    fn resolves_mention_id_and_name() {
        let channels = channels();

        assert_eq!(resolve_channel("<#222>", &channels), Some(222));
        assert_eq!(resolve_channel("111", &channels), Some(111));
        assert_eq!(resolve_channel("scoreboard", &channels), Some(222));
        assert_eq!(resolve_channel("#general", &channels), Some(111));
    }

    #[test]
    fn rejects_unknown_channels() {
        let channels = channels();

        assert_eq!(resolve_channel("<#333>", &channels), None);
        assert_eq!(resolve_channel("Scoreboard", &channels), None);
        assert_eq!(resolve_channel("", &channels), None);
    }

    #[test]
    fn non_json_body_points_at_url() {
        let message = reachability_message(&RconError::UnexpectedContent(
            "expected value at line 1 column 1".to_string(),
        ));

        assert_eq!(
            message,
            "Webpage returned unexpected data. Likely the URL is incorrect."
        );
    }

    #[test]
    fn envelope_without_result_is_unexpected_data() {
        assert_eq!(
            reachability_message(&RconError::MissingResult),
            "Connected, but received unexpected data"
        );
        assert_eq!(
            reachability_message(&RconError::Timeout(10)),
            RconError::Timeout(10).to_string()
        );
    }
}
