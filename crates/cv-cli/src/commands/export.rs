use std::path::Path;

use cv_data::Bundle;

pub fn run(dir: &Path, name: &str, output: Option<&Path>) -> Result<(), String> {
    let adventure = super::load(dir, name)?;

    let bundle = Bundle::from_world(&adventure.world, &adventure.synonyms);
    let mut content = bundle
        .to_json()
        .map_err(|e| format!("JSON serialization error: {e}"))?;
    content.push('\n');

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Exported '{}' to {}", adventure.name, path.display());
    } else {
        print!("{content}");
    }

    Ok(())
}
