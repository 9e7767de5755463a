use image::Rgba;

/// 透かしの描画設定。
///
/// 設定可能な項目として構造体にまとめてあるが、現状CLIからの上書き手段はなく、
/// `default()` の固定値だけが使われる。
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkSpec {
    /// 画像に重ねるテキスト
    pub text: String,
    /// フォントサイズ (ピクセル単位)
    pub font_size: f32,
    /// 描画色 (暗い赤紫)。アルファ値は不透過。
    pub color: Rgba<u8>,
    /// 画像上端からの余白 (ピクセル)
    pub top_padding: u32,
    /// 対象ファイルのサフィックス (大文字小文字を区別する後方一致)
    pub extension: String,
}

impl Default for WatermarkSpec {
    fn default() -> Self {
        Self {
            text: "Soma Fkaher Aldeen - 214046013, Lujain Awidat - 325217792".to_string(),
            font_size: 30.0,
            color: Rgba([102, 0, 51, 255]),
            top_padding: 10,
            extension: ".png".to_string(),
        }
    }
}
