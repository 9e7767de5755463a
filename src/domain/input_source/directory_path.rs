use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // ディレクトリ内のすべてのエントリをイテレータとして取得
    pub fn entries(&self) -> Result<fs::ReadDir, PathError> {
        fs::read_dir(&self.path).map_err(PathError::IoError)
    }

    /// ディレクトリ直下から、名前が指定のサフィックスで終わるエントリを列挙します。
    ///
    /// サブディレクトリは辿りません。大文字小文字は区別します。
    /// 名前だけで選別するため、サフィックスに一致するディレクトリ等も含まれます
    /// (中身が本当に画像かどうかの検証はデコード時に行われ、そこで失敗として報告される)。
    /// 列挙順はファイルシステム依存で、安定した順序は保証されません。
    pub fn files_with_suffix(&self, suffix: &str) -> Result<Vec<PathBuf>, PathError> {
        let mut matches = Vec::new();
        for entry_result in self.entries()? {
            let entry = entry_result.map_err(PathError::IoError)?;
            let path = entry.path();
            let is_match = path
                .file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.ends_with(suffix));
            if is_match {
                matches.push(path);
            }
        }
        Ok(matches)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
