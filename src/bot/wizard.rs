//! Interactive creation wizard.
//!
//! Walks the invoking member through every scoreboard option in the channel the
//! `create` command was used in. Each question is an embed; the member answers with a
//! plain message. Invalid answers are asked again, `cancel` or five minutes of silence
//! end the wizard.

use serenity::{
    all::{
        ChannelId, Colour, Context, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
        CreateMessage, EditMessage, GuildId, Message, UserId,
    },
    collector::MessageCollector,
};
use std::time::Duration;

use crate::{
    bot::validate::validate_option,
    error::AppError,
    model::scoreboard::{ScoreboardChange, ScoreboardOption, ScoreboardSettings},
};

const ANSWER_TIMEOUT: Duration = Duration::from_secs(300);

pub const PROMPT_COLOUR: Colour = Colour::from_rgb(122, 255, 149);
pub const RETRY_COLOUR: Colour = Colour::from_rgb(255, 255, 254);
pub const TIMED_OUT_COLOUR: Colour = Colour::from_rgb(221, 46, 68);

/// Left-to-right mark; renders as an empty field name.
const INVISIBLE: &str = "\u{200e}";
const ANSWER_PROMPT: &str = "**Type out your answer**";
const CANCEL_FOOTER: &str = "Type \"cancel\" to cancel the creation process";
const CANCEL_KEYWORD: &str = "cancel";
const MAX_AUTHOR_LENGTH: usize = 256;

const CRCON_LINK: &str = "[Community RCON](https://github.com/MarechJ/hll_rcon_tool)";

struct Question {
    title: &'static str,
    hint: String,
    image: Option<&'static str>,
}

fn question(option: ScoreboardOption) -> Question {
    match option {
        ScoreboardOption::Name => Question {
            title: "What should the scoreboard's name be?",
            hint: "Keep it short. 32 characters max.".to_string(),
            image: None,
        },
        ScoreboardOption::Channel => Question {
            title: "What channel should the scoreboard be in?",
            hint: "Must be a text channel the bot can send messages to.".to_string(),
            image: None,
        },
        ScoreboardOption::ApiUrl => Question {
            title: "What is the link to the Community RCON API?",
            hint: format!(
                "I will retrieve my data from the API provided by the {}. A valid URL should look like either `http://<ipaddress>:<port>/api/` or `https://<hostname>/api/`.",
                CRCON_LINK
            ),
            image: None,
        },
        ScoreboardOption::ApiUser => Question {
            title: "What username should be used to log in to the C.RCON?",
            hint: "This is the username that you would use to log in.".to_string(),
            image: Some("https://cdn.discordapp.com/attachments/790967581396828190/856254303524880414/unknown.png"),
        },
        ScoreboardOption::ApiPassword => Question {
            title: "What password should be used to log in to the C.RCON?",
            hint: "This is the password that you would use to log in.".to_string(),
            image: Some("https://media.discordapp.net/attachments/790967581396828190/856254363323203584/unknown.png"),
        },
        ScoreboardOption::ScoreboardUrl => Question {
            title: "What link should be used to redirect to the C.RCON's gamescoreboard page?",
            hint: format!(
                "The {} has a public stats page. A valid URL should look like either `http://<ipaddress>:<port>/#/gamescoreboard` or `https://<hostname>/#/gamescoreboard`. This value is OPTIONAL, typing \"none\" will leave it empty.",
                CRCON_LINK
            ),
            image: None,
        },
        ScoreboardOption::ServerId => Question {
            title: "What is the server's ID?",
            hint: format!(
                "Required when having multiple servers connected to the {}. Check the C.RCON's `.env` file. If only one server is connected this should just be 1.",
                CRCON_LINK
            ),
            image: Some("https://media.discordapp.net/attachments/790967581396828190/856262209372684288/unknown.png"),
        },
    }
}

/// Question embed of one wizard step, without the answer field.
pub fn prompt_embed(step: usize, option: ScoreboardOption) -> CreateEmbed {
    let question = question(option);

    let mut embed = CreateEmbed::new()
        .colour(PROMPT_COLOUR)
        .author(CreateEmbedAuthor::new(format!(
            "Creating new scoreboard... ({}/{})",
            step,
            ScoreboardOption::ALL.len()
        )))
        .field(question.title, question.hint, false)
        .footer(CreateEmbedFooter::new(CANCEL_FOOTER));

    if let Some(image) = question.image {
        embed = embed.image(image);
    }

    embed
}

/// Embed asking again after an invalid answer; the author line holds the reason.
pub fn retry_embed(reason: &str) -> CreateEmbed {
    let reason: String = reason.chars().take(MAX_AUTHOR_LENGTH).collect();

    CreateEmbed::new()
        .colour(RETRY_COLOUR)
        .author(CreateEmbedAuthor::new(reason))
}

/// Field text replacing the answer prompt once the member answered.
pub fn answer_text(answer: &str, masked: bool) -> String {
    let shown = if masked {
        "\\*".repeat(answer.chars().count())
    } else {
        answer.to_string()
    };

    format!("**Answer:**\n>>> \"{}\"", shown)
}

/// Asks questions in one channel and collects the answers of one member.
pub struct Wizard<'a> {
    ctx: &'a Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    author_id: UserId,
    rcon_timeout: Duration,
}

impl<'a> Wizard<'a> {
    /// Starts a wizard for the author of a command message.
    ///
    /// # Arguments
    /// - `ctx` - Discord context
    /// - `guild_id` - Guild the command was used in
    /// - `message` - The command message; its channel and author are used
    /// - `rcon_timeout` - Timeout of the API URL reachability check
    pub fn new(
        ctx: &'a Context,
        guild_id: GuildId,
        message: &Message,
        rcon_timeout: Duration,
    ) -> Self {
        Self {
            ctx,
            guild_id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            rcon_timeout,
        }
    }

    /// Asks every option in order.
    ///
    /// # Returns
    /// - `Ok(Some((channel_id, settings)))` - All questions answered
    /// - `Ok(None)` - Cancelled or timed out
    /// - `Err(AppError)` - Sending or editing a question failed
    pub async fn run(&self) -> Result<Option<(u64, ScoreboardSettings)>, AppError> {
        let mut channel_id = None;
        let mut settings = ScoreboardSettings::default();

        for (index, option) in ScoreboardOption::ALL.into_iter().enumerate() {
            let Some(change) = self.ask_option(index + 1, option).await? else {
                tracing::debug!(
                    "Scoreboard wizard of {} ended at step {}",
                    self.author_id,
                    index + 1
                );
                return Ok(None);
            };

            match change {
                ScoreboardChange::Channel(id) => channel_id = Some(id),
                change => settings.apply(change),
            }
        }

        let channel_id = channel_id.ok_or_else(|| {
            AppError::InternalError("Scoreboard wizard finished without a channel".to_string())
        })?;

        Ok(Some((channel_id, settings)))
    }

    /// Asks one option until the answer is valid.
    async fn ask_option(
        &self,
        step: usize,
        option: ScoreboardOption,
    ) -> Result<Option<ScoreboardChange>, AppError> {
        let masked = option == ScoreboardOption::ApiPassword;
        let mut embed = prompt_embed(step, option);

        loop {
            let Some(answer) = self.ask(embed, masked).await? else {
                return Ok(None);
            };

            match validate_option(self.ctx, self.guild_id, option, &answer, self.rcon_timeout)
                .await
            {
                Ok(change) => return Ok(Some(change)),
                Err(AppError::BadRequest(reason)) => embed = retry_embed(&reason),
                Err(e) => return Err(e),
            }
        }
    }

    /// Sends a question and waits for the member's reply.
    ///
    /// The question shows the reply once it arrives, or turns red on timeout.
    ///
    /// # Returns
    /// - `Ok(Some(String))` - The reply
    /// - `Ok(None)` - Timed out or the member typed `cancel`
    /// - `Err(AppError::DiscordErr)` - Sending or editing the question failed
    async fn ask(&self, embed: CreateEmbed, masked: bool) -> Result<Option<String>, AppError> {
        let mut prompt = self
            .channel_id
            .send_message(
                &self.ctx.http,
                CreateMessage::new().embed(embed.clone().field(INVISIBLE, ANSWER_PROMPT, false)),
            )
            .await?;

        let reply = MessageCollector::new(&self.ctx.shard)
            .author_id(self.author_id)
            .channel_id(self.channel_id)
            .timeout(ANSWER_TIMEOUT)
            .filter(|message| !message.content.is_empty())
            .next()
            .await;

        let Some(reply) = reply else {
            let timed_out = embed
                .field(
                    INVISIBLE,
                    format!("{}\n\nTimed out, execute the command again.", ANSWER_PROMPT),
                    false,
                )
                .colour(TIMED_OUT_COLOUR);
            prompt
                .edit(self.ctx, EditMessage::new().embed(timed_out))
                .await?;
            return Ok(None);
        };

        if masked {
            if let Err(e) = reply.delete(self.ctx).await {
                tracing::warn!("Failed to delete password answer {}: {}", reply.id, e);
            }
        }

        let answered = embed.field(INVISIBLE, answer_text(&reply.content, masked), false);
        prompt
            .edit(self.ctx, EditMessage::new().embed(answered))
            .await?;

        if reply.content.trim().eq_ignore_ascii_case(CANCEL_KEYWORD) {
            return Ok(None);
        }

        Ok(Some(reply.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn json(embed: CreateEmbed) -> serde_json::Value {
        serde_json::to_value(&embed).unwrap()
    }

    #[test]
    fn prompt_shows_step_question_and_footer() {
        let embed = json(prompt_embed(1, ScoreboardOption::Name));

        assert_eq!(embed["author"]["name"], "Creating new scoreboard... (1/7)");
        assert_eq!(embed["fields"][0]["name"], "What should the scoreboard's name be?");
        assert_eq!(embed["fields"][0]["value"], "Keep it short. 32 characters max.");
        assert_eq!(embed["footer"]["text"], CANCEL_FOOTER);
        assert_eq!(embed["color"], 0x7AFF95);
        assert!(embed["image"].is_null());
    }

    #[test]
    fn credential_prompts_carry_an_image() {
        let embed = json(prompt_embed(4, ScoreboardOption::ApiUser));

        assert_eq!(embed["author"]["name"], "Creating new scoreboard... (4/7)");
        assert!(embed["image"]["url"].as_str().unwrap().starts_with("https://"));
    }

    #[test]
    fn retry_embed_puts_reason_in_author() {
        let embed = json(retry_embed("Invalid length! 32 characters max, you have 40."));

        assert_eq!(
            embed["author"]["name"],
            "Invalid length! 32 characters max, you have 40."
        );
        assert_eq!(embed["color"], 0xFFFFFE);
    }

    #[test]
    fn retry_embed_truncates_long_reasons() {
        let embed = json(retry_embed(&"x".repeat(400)));

        assert_eq!(
            embed["author"]["name"].as_str().unwrap().len(),
            MAX_AUTHOR_LENGTH
        );
    }

    #[test]
    fn answer_is_quoted() {
        assert_eq!(answer_text("Main server", false), "**Answer:**\n>>> \"Main server\"");
    }

    #[test]
    fn password_answer_is_masked() {
        assert_eq!(answer_text("hunter2", true), "**Answer:**\n>>> \"\\*\\*\\*\\*\\*\\*\\*\"");
    }
}
