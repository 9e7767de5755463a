use ab_glyph::FontRef;
use std::fmt;

/// 透かし描画に使用するフォントのラッパー構造体。
///
/// `include_bytes!` マクロでコンパイル時にバイナリへ埋め込んだ
/// DejaVu Sans Bold を保持します。実行時にフォントファイルを
/// 配置する必要はありません。
#[derive(Clone)]
pub struct WatermarkFont(pub FontRef<'static>);

/// フォントデータの解析に失敗した場合のエラー。
#[derive(Debug, PartialEq)]
pub enum FontError {
    InvalidFontData,
}

impl WatermarkFont {
    /// 埋め込みフォントから新しい `WatermarkFont` インスタンスを作成します。
    ///
    /// # 戻り値
    /// * `Ok(WatermarkFont)`: フォントデータの解析に成功した場合。
    /// * `Err(FontError)`: 埋め込みデータがフォントとして解析できなかった場合。
    pub fn new() -> Result<Self, FontError> {
        let font_bytes: &'static [u8] = include_bytes!("../../../fonts/DejaVuSans-Bold.ttf");
        let font = FontRef::try_from_slice(font_bytes).map_err(|_| FontError::InvalidFontData)?;
        Ok(WatermarkFont(font))
    }

    /// 内部に保持しているフォントへの参照を返します。
    pub fn as_font(&self) -> &FontRef<'static> {
        &self.0
    }
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::InvalidFontData => {
                write!(f, "埋め込みフォントデータを解析できませんでした。")
            }
        }
    }
}

impl std::error::Error for FontError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// 埋め込みフォントが正しく読み込めるかテスト
    #[test]
    fn embedded_font_parses() {
        let result = WatermarkFont::new();
        assert!(result.is_ok());
    }
}
