use std::path::Path;

use colored::Colorize;
use hl_core::Grade;

pub fn run(input: &Path, no_color: bool) -> Result<(), String> {
    if no_color {
        colored::control::set_override(false);
    }

    let snapshot = super::load_snapshot(input)?;
    let conclusion = hl_core::render_structured(&snapshot).map_err(|e| e.to_string())?;

    let label = conclusion.grade.label();
    let painted = match conclusion.grade {
        Grade::GreatAuspicious | Grade::Auspicious => label.green().bold(),
        Grade::Neutral => label.yellow(),
        Grade::Inauspicious | Grade::GreatInauspicious => label.red(),
        Grade::ExtremeInauspicious => label.red().bold(),
    };
    println!("{painted}");

    if let Some(taboo) = &conclusion.taboo {
        println!("  {}", taboo.to_string().dimmed());
    }
    Ok(())
}
