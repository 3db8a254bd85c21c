use std::path::{Path, PathBuf};

const FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*', '°', '¬', '†'];

/// Strips characters that are unsafe in file names and turns spaces into underscores.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !FORBIDDEN.contains(c))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// `<dir>/<sanitized tournament><suffix>`, e.g. `./Winter_Open_pool_sheets.csv`.
pub fn output_file(dir: &Path, tournament_name: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{}{}", sanitize_filename(tournament_name), suffix))
}
