//! Text and embed rendering of scoreboards.
//!
//! Everything here is pure so the exact layout can be tested without Discord.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::model::{
    scoreboard::Scoreboard,
    stats::{MatchStats, MatchWindow, PlayerStats},
};

/// Rows per page.
pub const PAGE_SIZE: usize = 30;
/// Width of a status message line.
pub const STATUS_WIDTH: usize = 47;
const NO_DATA_WIDTH: usize = 51;
const ART_NAME_LENGTH: usize = 21;
const ART_MIN_MINUTES: i64 = 15;
const ART_MAX_MINUTES: i64 = 30;

pub const EMBED_ICON: &str = "https://media.discordapp.net/attachments/729998051288285256/791030109628399647/MiP_-5ea_400x400.png";
pub const PLACEHOLDER_TEXT: &str = "No! Don't look yet!";
const TABLE_HEADER: &str = "RANK  NAME                      KILLS  DEATHS K/D   ";
const NO_DATA_TEXT: &str = "        There is no data to be displayed :(";

const NO_DATA_ART: &str = r#"`                    __________                     
              _____/          \______              
             |                      ||             
             |   _      ___    _    ||             
             |  | \      |    | \   ||             
             |  |  |     |    |  |  ||             
             |  |_/      |    |_/   ||             
             |  | \      |    |     ||             
             |  |  \     |    |     ||             
             |  |   \.  _|_.  | .   ||             
             |                      ||             
             | {name}||             
             |                      ||             
             |______________________||             
                                                  `"#;

/// Number of pages needed for `players` rows.
pub fn total_pages(players: usize) -> usize {
    players.div_ceil(PAGE_SIZE)
}

/// Pulls a page that no longer exists back to the last page.
///
/// Page 1 is kept when there are no pages at all.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages > 0 && total_pages < page {
        total_pages
    } else {
        page.max(1)
    }
}

/// Whole minutes from `from` to `to`, truncated toward zero.
pub fn minutes_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_seconds() / 60
}

fn table_row(rank: &str, name: &str, kills: &str, deaths: &str, kd: &str) -> String {
    format!(
        "\n#{:<4} {:<25} {:<6} {:<6} {:<6}",
        rank, name, kills, deaths, kd
    )
}

/// Renders one page of the leaderboard as a single inline code span.
///
/// Pages with fewer than `PAGE_SIZE` players are padded with blank rows so the embed
/// keeps its height.
pub fn render_table(players: &[PlayerStats], page: usize) -> String {
    let offset = page.saturating_sub(1) * PAGE_SIZE;
    let mut output = String::from(TABLE_HEADER);

    let rows = players.iter().enumerate().skip(offset).take(PAGE_SIZE);
    let mut row_count = 0;
    for (index, player) in rows {
        output.push_str(&table_row(
            &(index + 1).to_string(),
            &player.name.replace('`', ""),
            &player.kills.to_string(),
            &player.deaths.to_string(),
            &format!("{:.2}", player.kd_ratio()),
        ));
        row_count += 1;
    }

    for _ in row_count..PAGE_SIZE {
        output.push_str(&table_row("", "", "", "", ""));
    }

    format!("`{}`", output)
}

/// Text shown instead of the table when nobody scored yet.
///
/// # Arguments
/// - `name` - Scoreboard name, cut to 21 characters for the art
/// - `minutes_running` - Minutes since the match window started
pub fn no_data_text(name: &str, minutes_running: i64) -> String {
    if (ART_MIN_MINUTES..=ART_MAX_MINUTES).contains(&minutes_running) {
        let name: String = name.chars().take(ART_NAME_LENGTH).collect();
        NO_DATA_ART.replace("{name}", &format!("{:<21}", name))
    } else {
        format!(
            "`{:<width$}\n{:<width$}\n{:<width$}`",
            "",
            NO_DATA_TEXT,
            "",
            width = NO_DATA_WIDTH
        )
    }
}

/// Footer describing the match window and the page position.
pub fn footer_text(
    window: &MatchWindow,
    page: usize,
    total_pages: usize,
    now: DateTime<Utc>,
) -> String {
    let match_line = match window.end {
        Some(end) => format!(
            "Match ended {} minutes ago. It lasted {} minutes. Map was {}.",
            minutes_between(end, now),
            minutes_between(window.start, end),
            window.map
        ),
        None => format!(
            "Match started {} minutes ago. Map is {}.",
            minutes_between(window.start, now),
            window.map
        ),
    };

    format!(
        "{}\nPage {}/{} - react below to cycle pages.",
        match_line, page, total_pages
    )
}

fn extended_view_link(scoreboard: &Scoreboard) -> String {
    match &scoreboard.scoreboard_url {
        Some(url) => format!("\n[\\> Click here for an extended view]({})", url),
        None => String::new(),
    }
}

fn author(scoreboard: &Scoreboard) -> CreateEmbedAuthor {
    CreateEmbedAuthor::new(&scoreboard.name).icon_url(EMBED_ICON)
}

/// A rendered scoreboard page.
pub struct RenderedScoreboard {
    pub embed: CreateEmbed,
    /// Page actually rendered after clamping.
    pub page: usize,
    pub total_pages: usize,
}

/// Builds the leaderboard embed for one page of a scoreboard.
///
/// # Arguments
/// - `scoreboard` - Scoreboard providing the name and extended view link
/// - `stats` - Fetched match statistics
/// - `page` - Requested page, clamped to the available pages
/// - `now` - Current time used for the footer
///
/// # Returns
/// - `RenderedScoreboard` - Embed with the page and page count it was rendered for
pub fn scoreboard_embed(
    scoreboard: &Scoreboard,
    stats: &MatchStats,
    page: usize,
    now: DateTime<Utc>,
) -> RenderedScoreboard {
    let total_pages = total_pages(stats.players.len());
    let page = clamp_page(page, total_pages);

    let description = if stats.players.is_empty() {
        no_data_text(&scoreboard.name, minutes_between(stats.window.start, now))
    } else {
        format!(
            "{}{}",
            render_table(&stats.players, page),
            extended_view_link(scoreboard)
        )
    };

    let embed = CreateEmbed::new()
        .description(description)
        .author(author(scoreboard))
        .footer(CreateEmbedFooter::new(footer_text(
            &stats.window,
            page,
            total_pages,
            now,
        )));

    RenderedScoreboard {
        embed,
        page,
        total_pages,
    }
}

/// Word-wraps a status message into framed monospace lines.
///
/// Lines are wrapped at `STATUS_WIDTH` columns, explicit newlines are kept, and a
/// blank line is added above and below. Every line is padded and wrapped in its own
/// inline code span.
pub fn status_text(message: &str) -> String {
    let mut lines: Vec<String> = vec![String::new()];

    let mut words = message.split(' ');
    let mut line = words.next().unwrap_or_default().to_string();
    split_newlines(&mut lines, &mut line);

    for word in words {
        let head = word.split('\n').next().unwrap_or_default();
        if line.chars().count() + 1 + head.chars().count() <= STATUS_WIDTH {
            line.push(' ');
            line.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
        split_newlines(&mut lines, &mut line);
    }
    lines.push(line);
    lines.push(String::new());

    lines
        .iter()
        .map(|line| format!("`  {:<width$}  `", line, width = STATUS_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Moves every complete line of `line` into `lines`, leaving the text after the last newline.
fn split_newlines(lines: &mut Vec<String>, line: &mut String) {
    while let Some(index) = line.find('\n') {
        let rest = line.split_off(index + 1);
        line.pop();
        lines.push(std::mem::replace(line, rest));
    }
}

/// Builds the embed that shows a status message in place of the leaderboard.
pub fn status_embed(scoreboard: &Scoreboard, message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .description(format!(
            "{}{}",
            status_text(message),
            extended_view_link(scoreboard)
        ))
        .author(author(scoreboard))
}

/// Status message displayed when an update fails.
pub fn update_failed_text(error: &impl std::fmt::Display) -> String {
    format!(
        "Failed to update scoreboard:\n{}\n\nContact an admin if this keeps occuring.",
        error
    )
}

/// Embed posted as a stand-in until the first update finishes.
pub fn placeholder_embed() -> CreateEmbed {
    CreateEmbed::new().description(PLACEHOLDER_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use test_utils::fixture;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn players(count: usize) -> Vec<PlayerStats> {
        (0..count)
            .map(|i| PlayerStats {
                name: format!("Player{}", i + 1),
                kills: (count - i) as u32,
                deaths: 1,
            })
            .collect()
    }

    fn scoreboard() -> Scoreboard {
        Scoreboard::from_entity(fixture::scoreboard::entity()).unwrap()
    }

    fn running_window(minutes: i64) -> MatchWindow {
        MatchWindow {
            map: "Foy".to_string(),
            start: now() - Duration::minutes(minutes),
            end: None,
        }
    }

    fn table_lines(table: &str) -> Vec<&str> {
        table.trim_matches('`').split('\n').collect()
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(30), 1);
        assert_eq!(total_pages(31), 2);
        assert_eq!(total_pages(300), 10);
    }

    #[test]
    fn clamps_page_past_the_end() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(2, 2), 2);
        assert_eq!(clamp_page(4, 0), 4);
        assert_eq!(clamp_page(0, 3), 1);
    }

    #[test]
    fn renders_header_and_rows() {
        let players = vec![
            PlayerStats {
                name: "Abu`sify".to_string(),
                kills: 12,
                deaths: 5,
            },
            PlayerStats {
                name: "Maresh".to_string(),
                kills: 3,
                deaths: 0,
            },
        ];

        let table = render_table(&players, 1);
        let lines = table_lines(&table);

        assert!(table.starts_with('`') && table.ends_with('`'));
        assert_eq!(lines.len(), PAGE_SIZE + 1);
        assert_eq!(lines[0], "RANK  NAME                      KILLS  DEATHS K/D   ");
        assert_eq!(
            lines[1],
            "#1    Abusify                   12     5      2.40  "
        );
        assert_eq!(
            lines[2],
            "#2    Maresh                    3      0      0.00  "
        );
        assert_eq!(lines[3], format!("#{}", " ".repeat(51)));
    }

    #[test]
    fn rounds_kd_to_two_decimals() {
        let players: Vec<PlayerStats> = [(2, 3), (1, 6), (5, 7)]
            .into_iter()
            .map(|(kills, deaths)| PlayerStats {
                name: "A".to_string(),
                kills,
                deaths,
            })
            .collect();

        let table = render_table(&players, 1);
        let kd: Vec<&str> = table_lines(&table)[1..4]
            .iter()
            .map(|line| line[46..].trim_end())
            .collect();

        assert_eq!(kd, vec!["0.67", "0.17", "0.71"]);
    }

    #[test]
    fn renders_requested_page_slice() {
        let players = players(65);

        let table = render_table(&players, 3);
        let lines = table_lines(&table);

        assert_eq!(lines.len(), PAGE_SIZE + 1);
        assert!(lines[1].starts_with("#61   Player61 "));
        assert!(lines[5].starts_with("#65   Player65 "));
        assert!(lines[6].trim_end() == "#");
    }

    #[test]
    fn full_page_has_no_blank_rows() {
        let table = render_table(&players(30), 1);

        assert!(table_lines(&table).iter().all(|line| line.trim_end() != "#"));
    }

    #[test]
    fn footer_for_running_match() {
        let text = footer_text(&running_window(12), 1, 2, now());

        assert_eq!(
            text,
            "Match started 12 minutes ago. Map is Foy.\nPage 1/2 - react below to cycle pages."
        );
    }

    #[test]
    fn footer_for_finished_match() {
        let window = MatchWindow {
            map: "Carentan".to_string(),
            start: now() - Duration::minutes(95),
            end: Some(now() - Duration::seconds(150)),
        };

        let text = footer_text(&window, 2, 3, now());

        assert_eq!(
            text,
            "Match ended 2 minutes ago. It lasted 92 minutes. Map was Carentan.\nPage 2/3 - react below to cycle pages."
        );
    }

    #[test]
    fn no_data_shows_art_between_15_and_30_minutes() {
        let text = no_data_text("A very long scoreboard name", 20);

        assert!(text.contains("| A very long scoreboar||"));
        assert!(text.starts_with('`') && text.ends_with('`'));
    }

    #[test]
    fn no_data_shows_message_otherwise() {
        let text = no_data_text("Server", 5);
        let lines: Vec<&str> = text.trim_matches('`').split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() == 51));
        assert_eq!(lines[1].trim_end(), NO_DATA_TEXT);
        assert_eq!(no_data_text("Server", 31), text);
    }

    #[test]
    fn scoreboard_embed_clamps_page_and_links_extended_view() {
        let mut scoreboard = scoreboard();
        scoreboard.scoreboard_url = Some("https://stats.example.com/#/gamescoreboard".to_string());
        let stats = MatchStats {
            window: running_window(40),
            players: players(31),
        };

        let rendered = scoreboard_embed(&scoreboard, &stats, 5, now());
        let json = serde_json::to_value(&rendered.embed).unwrap();

        assert_eq!(rendered.page, 2);
        assert_eq!(rendered.total_pages, 2);
        let description = json["description"].as_str().unwrap();
        assert!(description.contains("#31   Player31"));
        assert!(description.ends_with(
            "\n[\\> Click here for an extended view](https://stats.example.com/#/gamescoreboard)"
        ));
        assert_eq!(json["author"]["name"], scoreboard.name.as_str());
        assert_eq!(json["author"]["icon_url"], EMBED_ICON);
        assert!(json["footer"]["text"]
            .as_str()
            .unwrap()
            .ends_with("Page 2/2 - react below to cycle pages."));
    }

    #[test]
    fn scoreboard_embed_without_players_shows_no_data() {
        let stats = MatchStats {
            window: running_window(3),
            players: Vec::new(),
        };

        let rendered = scoreboard_embed(&scoreboard(), &stats, 1, now());
        let json = serde_json::to_value(&rendered.embed).unwrap();

        assert_eq!(rendered.total_pages, 0);
        assert!(json["description"].as_str().unwrap().contains(NO_DATA_TEXT));
        assert!(json["footer"]["text"].as_str().unwrap().contains("Page 1/0"));
    }

    #[test]
    fn status_text_wraps_and_frames() {
        let error = "Failed to login to the RCON. Check if the username and password are correct.";
        let text = status_text(&update_failed_text(&error));
        let lines: Vec<&str> = text.split('\n').collect();

        assert!(lines
            .iter()
            .all(|line| line.starts_with("`  ") && line.ends_with("  `")));
        assert!(lines
            .iter()
            .all(|line| line.chars().count() == STATUS_WIDTH + 6));
        assert_eq!(lines[0].trim_matches('`').trim(), "");
        assert_eq!(lines[1].trim_matches('`').trim(), "Failed to update scoreboard:");
        assert_eq!(
            lines[2].trim_matches('`').trim(),
            "Failed to login to the RCON. Check if the"
        );
        assert_eq!(
            lines[3].trim_matches('`').trim(),
            "username and password are correct."
        );
        assert_eq!(lines[4].trim_matches('`').trim(), "");
        assert_eq!(
            lines[5].trim_matches('`').trim(),
            "Contact an admin if this keeps occuring."
        );
        assert_eq!(lines.last().unwrap().trim_matches('`').trim(), "");
    }

    #[test]
    fn status_text_handles_single_word() {
        assert_eq!(
            status_text("Hi"),
            format!("`  {:<47}  `\n`  Hi{:<45}  `\n`  {:<47}  `", "", "", "")
        );
    }

    #[test]
    fn placeholder_embed_text() {
        let json = serde_json::to_value(placeholder_embed()).unwrap();

        assert_eq!(json["description"], PLACEHOLDER_TEXT);
    }
}
