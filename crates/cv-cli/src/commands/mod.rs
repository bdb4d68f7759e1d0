pub mod check;
pub mod export;
pub mod play;

use std::path::Path;

use cv_data::{Adventure, LoadError};

/// Load an adventure, printing rendered parse diagnostics to stderr.
fn load(dir: &Path, name: &str) -> Result<Adventure, String> {
    cv_data::load(dir, name).map_err(|err| match err {
        LoadError::Parse { .. } => {
            eprint!("{}", err.render());
            format!("cannot load adventure '{name}'")
        }
        other => other.to_string(),
    })
}
