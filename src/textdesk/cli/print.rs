use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use textdesk::api::{CmdMessage, Listing, MessageLevel};
use textdesk::error::{Result, TextdeskError};
use textdesk::frequency::WordFrequency;
use textdesk::model::{Language, State, TextResource};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 36;
const STATE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(TextdeskError::Serialization)?;
    println!("{}", out);
    Ok(())
}

fn colored_state(state: State) -> colored::ColoredString {
    let label = format!("{:<width$}", state.as_str(), width = STATE_WIDTH);
    match state {
        State::Draft => label.normal(),
        State::Submitted => label.yellow(),
        State::Rejected => label.red(),
        State::Approved => label.green(),
    }
}

pub(super) fn print_text(text: &TextResource) {
    println!("{} {}", text.id().to_string().yellow(), colored_state(text.state()));
    println!("--------------------------------");
    for (lang, value) in text.content.iter() {
        println!("{}: {}", lang.code().bold(), value);
    }
    println!(
        "{}",
        format!(
            "created {} · updated {}",
            format_time_ago(text.created_at).trim(),
            format_time_ago(text.updated_at).trim()
        )
        .dimmed()
    );
}

pub(super) fn print_listing(listing: &Listing) {
    if listing.results.is_empty() {
        println!("No texts found.");
    }

    for text in &listing.results {
        let preview = text
            .content
            .get(Language::En)
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect::<String>();

        let fixed_width = ID_WIDTH + 1 + STATE_WIDTH + 1 + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let preview = truncate_to_width(&preview, available);
        let padding = available.saturating_sub(preview.width());

        println!(
            "{} {} {}{}{}",
            text.id().to_string().dimmed(),
            colored_state(text.state()),
            preview,
            " ".repeat(padding),
            format_time_ago(text.updated_at).dimmed()
        );
    }

    let mut links = Vec::new();
    if let Some(prev) = listing.previous {
        links.push(format!("previous: --page {} --limit {}", prev.page, prev.limit));
    }
    if let Some(next) = listing.next {
        links.push(format!("next: --page {} --limit {}", next.page, next.limit));
    }
    if !links.is_empty() {
        println!("{}", links.join("   ").dimmed());
    }
}

pub(super) fn print_counts(total: usize, per_language: &BTreeMap<Language, usize>) {
    for (lang, count) in per_language {
        println!("{}: {}", lang.code().bold(), count);
    }
    println!("{}", total);
}

pub(super) fn print_frequent_word(word: &WordFrequency) {
    println!("{} ({})", word.word.bold(), word.count);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
