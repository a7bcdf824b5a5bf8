use anyhow::Result;
use serde_json::json;
use takes_core::Take;

use super::OutputFormat;

fn take_json(take: &Take) -> Result<serde_json::Value> {
    let members = take.members()?;
    Ok(json!({
        "name": take.name(),
        "parent": take.parent_name().unwrap_or(take.session().root_take()),
        "current": take.is_current(),
        "members": members,
    }))
}

pub fn format_take_list(takes: &[Take], fmt: OutputFormat) -> Result<String> {
    match fmt {
        OutputFormat::Json => {
            let list = takes.iter().map(take_json).collect::<Result<Vec<_>>>()?;
            Ok(serde_json::to_string_pretty(&list)?)
        }
        OutputFormat::Text => format_take_list_text(takes),
    }
}

fn format_take_list_text(takes: &[Take]) -> Result<String> {
    if takes.is_empty() {
        return Ok("No takes found.".to_string());
    }

    let mut out = String::new();
    for take in takes {
        let marker = if take.is_current() { "*" } else { "\u{25c6}" };
        let parent = take
            .parent_name()
            .unwrap_or(take.session().root_take());
        let count = take.members()?.len();
        out.push_str(&format!(
            "{marker} {} [parent: {parent}] {count} member(s)\n",
            take.name()
        ));
    }
    Ok(out.trim_end().to_string())
}

pub fn format_take_full(take: &Take, fmt: OutputFormat) -> Result<String> {
    match fmt {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&take_json(take)?)?),
        OutputFormat::Text => {
            let mut out = format!(
                "Take:   {}\nParent: {}\n",
                take.name(),
                take.parent_name().unwrap_or(take.session().root_take())
            );
            if take.is_current() {
                out.push_str("Active: yes\n");
            }
            out.push('\n');
            out.push_str(&take.members_report()?);
            Ok(out.trim_end().to_string())
        }
    }
}

/// Result of a command that produced or changed one take: `message` in text
/// mode, the take itself in JSON mode.
pub fn format_take_result(message: &str, take: &Take, fmt: OutputFormat) -> Result<String> {
    match fmt {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&take_json(take)?)?),
        OutputFormat::Text => Ok(message.to_string()),
    }
}

pub fn format_take_names(names: &[&str], fmt: OutputFormat) -> Result<String> {
    match fmt {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)?),
        OutputFormat::Text => Ok(names.join("\n")),
    }
}
