use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 透かしを入れるPNG画像が入ったディレクトリのパス
    #[arg(required = true)]
    pub images_dir: PathBuf,
}
