//! 画像バッファへ透かしテキストを描き込むモジュール。

use super::font::WatermarkFont;
use super::spec::WatermarkSpec;
use ab_glyph::PxScale;
use image::RgbaImage;
use imageproc::drawing::{draw_text_mut, text_size};

/// テキストの実測サイズと画像の幅から描画開始位置を計算します。
///
/// * x: 水平方向の中央揃え。テキストが画像より広い場合は負になり、
///   そのまま左端からはみ出した位置に描画される (エラーにはしない)。
/// * y: テキストの高さ + 上端からの固定余白。
pub fn anchor(image_width: u32, text_width: u32, text_height: u32, top_padding: u32) -> (i32, i32) {
    let x = (i64::from(image_width) - i64::from(text_width)) / 2;
    let y = i64::from(text_height) + i64::from(top_padding);
    (x as i32, y as i32)
}

/// 設定されたフォント・サイズ・色で透かしテキストを画像に直接描き込みます。
///
/// キャンバスからはみ出す座標は描画側で無視されるため、
/// 画像がテキストより小さくても失敗しません。
pub fn apply(canvas: &mut RgbaImage, spec: &WatermarkSpec, font: &WatermarkFont) {
    let scale = PxScale::from(spec.font_size);

    // 設定済みフォントでテキストの描画幅と高さを実測する
    let (text_width, text_height) = text_size(scale, font.as_font(), &spec.text);
    let (x, y) = anchor(canvas.width(), text_width, text_height, spec.top_padding);

    draw_text_mut(canvas, spec.color, x, y, scale, font.as_font(), &spec.text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// anchor()が水平中央揃えの座標を返すことをテスト
    #[test]
    fn anchor_centers_horizontally() {
        let (x, y) = anchor(800, 600, 30, 10);
        assert_eq!(x, (800 - 600) / 2);
        assert_eq!(y, 40);
    }

    /// テキストが画像より広い場合にxが負になることをテスト
    #[test]
    fn anchor_goes_negative_for_narrow_images() {
        let (x, _y) = anchor(50, 770, 30, 10);
        assert_eq!(x, (50 - 770) / 2);
        assert!(x < 0);
    }

    /// apply()が十分に広いキャンバスのピクセルを実際に変更することをテスト
    #[test]
    fn apply_draws_onto_wide_canvas() {
        let spec = WatermarkSpec::default();
        let font = WatermarkFont::new().unwrap();

        let background = Rgba([255u8, 255, 255, 255]);
        let mut canvas = RgbaImage::from_pixel(1600, 600, background);
        apply(&mut canvas, &spec, &font);

        // 寸法は変わらない
        assert_eq!(canvas.dimensions(), (1600, 600));

        // 上部の描画領域のどこかに背景色以外のピクセルがあるはず
        let changed = canvas.pixels().any(|p| *p != background);
        assert!(changed, "透かしの描画でピクセルが変化するはずです");
    }

    /// テキストより狭い・低いキャンバスでもapply()がパニックしないことをテスト
    #[test]
    fn apply_accepts_canvas_smaller_than_text() {
        let spec = WatermarkSpec::default();
        let font = WatermarkFont::new().unwrap();

        let mut canvas = RgbaImage::from_pixel(50, 20, Rgba([0u8, 0, 0, 255]));
        apply(&mut canvas, &spec, &font);

        assert_eq!(canvas.dimensions(), (50, 20));
    }
}
