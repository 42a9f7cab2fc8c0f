use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ekraw_core::inspect_raw_file;

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.raw");
        if !input.exists() {
            continue;
        }
        let output = path.join("expected_summary.json");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let mut summary = inspect_raw_file(input)
        .map_err(|err| format!("inspection failed for {}: {}", input.display(), err))?;
    // Stored relative so regenerated files do not depend on the checkout path.
    summary.input.path = "input.raw".to_string();
    let json = serde_json::to_string(&summary)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
