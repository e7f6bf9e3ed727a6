use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hl_core::{ActivityList, DayConclusion};

pub fn run(input: &Path, format: &str) -> Result<(), String> {
    let snapshot = super::load_snapshot(input)?;
    let conclusion = hl_core::render_structured(&snapshot).map_err(|e| e.to_string())?;

    let content = match format {
        "json" => serde_json::to_string_pretty(&conclusion)
            .map_err(|e| format!("JSON serialization error: {e}"))?,
        "table" => show_table(&conclusion),
        "text" => show_text(&conclusion),
        _ => {
            return Err(format!(
                "unsupported format: \"{format}\". Use: text, json, table"
            ));
        }
    };

    println!("{content}");
    Ok(())
}

fn joined(list: &ActivityList) -> String {
    if list.is_empty() {
        "-".to_string()
    } else {
        list.join("、")
    }
}

fn taboo_text(conclusion: &DayConclusion) -> String {
    conclusion
        .taboo
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}

fn show_text(c: &DayConclusion) -> String {
    let mut out = String::new();
    out.push_str(&format!("日期: {}\n", c.date.format("%Y-%m-%d")));
    out.push_str(&format!("标签: {}\n", c.label));
    out.push_str(&format!("等级: {}\n", c.grade));
    out.push_str(&format!("宜: {}\n", joined(&c.recommended)));
    out.push_str(&format!("忌: {}\n", joined(&c.forbidden)));
    out.push_str(&format!("硬禁忌: {}\n", taboo_text(c)));
    out.push('\n');
    out.push_str(&c.text);
    out
}

fn show_table(c: &DayConclusion) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["字段", "内容"]);
    table.add_row(vec!["日期".to_string(), c.date.format("%Y-%m-%d").to_string()]);
    table.add_row(vec!["标签".to_string(), c.label.clone()]);
    table.add_row(vec!["等级".to_string(), c.grade.to_string()]);
    table.add_row(vec!["宜".to_string(), joined(&c.recommended)]);
    table.add_row(vec!["忌".to_string(), joined(&c.forbidden)]);
    table.add_row(vec!["硬禁忌".to_string(), taboo_text(c)]);
    table.to_string()
}
