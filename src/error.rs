use crate::domain::input_source::path_error::PathError;
use crate::domain::watermark::font::FontError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("フォントの読み込みに失敗しました")]
    Font(#[from] FontError),

    #[error("画像の読み書きに失敗しました")]
    Image(#[from] image::ImageError),
}
