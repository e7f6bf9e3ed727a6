use std::path::Path;

pub fn run(input: &Path) -> Result<(), String> {
    let snapshot = super::load_snapshot(input)?;
    let text = hl_core::render_dated(&snapshot).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}
