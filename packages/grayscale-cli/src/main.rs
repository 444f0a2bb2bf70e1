mod convert;

use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// 引数省略時のデフォルト入力ファイル
const DEFAULT_INPUT: &str = "pic.png";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let input = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

    match convert::convert_file(&input) {
        Ok(output_path) => {
            println!("New file at {}", output_path.display());
        }
        Err(err) => {
            tracing::error!(error = %err, "conversion failed");
            std::process::exit(1);
        }
    }
}
