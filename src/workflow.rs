//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! ディレクトリ内のPNG画像へ透かしを描き込んで上書き保存する処理フローを実装します。

use crate::cli::Args;
use image::ImageFormat;
use std::path::Path;
use watermark_app::domain::input_source::directory_path::DirectoryPath;
use watermark_app::domain::watermark::font::WatermarkFont;
use watermark_app::domain::watermark::spec::WatermarkSpec;
use watermark_app::domain::watermark::stamp;
use watermark_app::error::AppError;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: 処理が完了した場合。個々のファイルの失敗はエラー扱いにしない。
/// * `Err(AppError)`: フォントの読み込みなど、回復不可能なエラーが発生した場合。
pub fn run(args: Args) -> Result<(), AppError> {
    // 1. 透かしの設定とフォントの準備
    // フォントが読めなければ1枚も処理できないため、ここだけは即座にエラーで抜ける。
    let spec = WatermarkSpec::default();
    let font = WatermarkFont::new()?;

    // 2. 入力ディレクトリの検証と対象ファイルの列挙
    // パスが不正・読み取り不能な場合も「画像なし」と同じ扱いで正常終了する。
    let images = match DirectoryPath::new(&args.images_dir) {
        Ok(dir) => {
            let files = dir.files_with_suffix(&spec.extension).unwrap_or_default();
            if files.is_empty() {
                println!("No images found in directory: {}", dir);
                return Ok(());
            }
            files
        }
        Err(_) => {
            println!(
                "No images found in directory: {}",
                args.images_dir.display()
            );
            return Ok(());
        }
    };

    // 3. 1ファイルずつ独立に処理する
    // 個々の失敗はログに出して次のファイルへ進み、バッチ全体は止めない。
    for path in &images {
        let name = file_name_of(path);
        match process_image(path, &spec, &font) {
            Ok(_) => println!("Watermark added to: {}", name),
            Err(e) => {
                println!("Error processing image: {}", name);
                eprintln!("{:?}", e);
            }
        }
    }

    // 集計やサマリーは出力しない
    Ok(())
}

// --- private なヘルパー関数 ---

/// 1枚の画像をデコードし、透かしを描き込み、同じパスへPNGとして上書き保存します。
fn process_image(path: &Path, spec: &WatermarkSpec, font: &WatermarkFont) -> Result<(), AppError> {
    let image = image::open(path)?;

    // 描画用のRGBAバッファを取得する。このスコープ内でのみ保持され、
    // 保存が終われば破棄される。
    let mut canvas = image.to_rgba8();
    stamp::apply(&mut canvas, spec, font);

    // 元のファイルをその場で上書きする (バックアップは取らない)
    canvas.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// 表示用にパスからファイル名部分を取り出します。
fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// --- テストモジュール ---
