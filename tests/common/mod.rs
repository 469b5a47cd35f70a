use std::fs;
use std::path::{Path, PathBuf};

/// A scenario input file paired with its expected output
pub struct Scenario {
    pub name: String,
    pub input: String,
    pub expected: String,
}

/// Load a scenario from `<name>.txt` and `<name>.expected`
pub fn load_scenario(input_path: &Path) -> Result<Scenario, Box<dyn std::error::Error>> {
    let name = input_path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    let input = fs::read_to_string(input_path)?;
    let expected = fs::read_to_string(input_path.with_extension("expected"))?;
    Ok(Scenario {
        name,
        input,
        expected,
    })
}

/// All scenario input files in a directory, sorted by name
pub fn scenario_files(dir: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("txt"))
            .collect(),
        Err(_) => Vec::new(),
    };
    files.sort();
    files
}

/// Build an input block from a grid line and (position, instructions) pairs
pub fn build_input(grid: &str, robots: &[(&str, &str)]) -> String {
    let mut input = String::from(grid);
    input.push('\n');
    for (position, instructions) in robots {
        input.push('\n');
        input.push_str(position);
        input.push('\n');
        input.push_str(instructions);
        input.push('\n');
    }
    input
}
