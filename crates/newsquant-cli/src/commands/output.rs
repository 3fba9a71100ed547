//! 결과 파일 출력.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 값을 `dir/file_name`에 보기 좋은 JSON으로 저장합니다.
///
/// 출력 디렉토리가 없으면 생성합니다.
pub fn write_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(file_name);
    let file =
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), "JSON saved");
    Ok(path)
}
