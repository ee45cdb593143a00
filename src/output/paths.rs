use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

const OUTPUT_SUFFIX: &str = "_analisis.txt";

fn transcript_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| Regex::new(r"(?i)\.(txt|json)$").expect("static suffix pattern"))
}

/// `sesion_001.TXT` -> `sesion_001_analisis.txt`. Only one trailing `.txt`/`.json`
/// is stripped; the rest of the base name is kept verbatim.
pub fn output_file_name(input: &Path) -> String {
    let base = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = transcript_suffix().replace(&base, "");
    format!("{stem}{OUTPUT_SUFFIX}")
}

pub fn derive_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    output_dir.join(output_file_name(input))
}
