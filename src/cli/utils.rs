use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::navigation::NavSection;
use crate::shell::ShellView;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output a single value in the appropriate format
pub fn output_value(
    output_format: &OutputFormat,
    key: &str,
    value: Value,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(&json!({ key: value })),
        OutputFormat::Text => {
            println!("{}", message);
            Ok(())
        }
    }
}

/// Output a composed menu in the appropriate format
pub fn output_sections(output_format: &OutputFormat, sections: &[NavSection]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(&json!({ "sections": sections })),
        OutputFormat::Text => {
            print!("{}", format_sections(sections));
            Ok(())
        }
    }
}

/// Output a resolved shell layout in the appropriate format
pub fn output_shell(output_format: &OutputFormat, view: &ShellView) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Text => {
            match view {
                ShellView::Pending => println!("Feature flags still loading; nothing to render"),
                ShellView::Passthrough => println!("Page renders without the admin sidebar"),
                ShellView::Full { banner, sections } => {
                    if let Some(banner) = banner {
                        println!("Warning: {} ({}: {})", banner.message, banner.action_label, banner.link);
                        println!();
                    }
                    print!("{}", format_sections(sections));
                }
            }
            Ok(())
        }
    }
}

/// Plain-text sidebar: one header per section, indented items, `[!]` on flagged items
pub fn format_sections(sections: &[NavSection]) -> String {
    let width = sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|item| item.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for section in sections {
        out.push_str(section.name);
        out.push('\n');
        for item in &section.items {
            let flag = if item.has_error() { " [!]" } else { "" };
            out.push_str(&format!("  {:<width$}  {}{}\n", item.label, item.link, flag, width = width));
        }
    }
    out
}
