use clap::Parser;

mod cli;
mod workflow;

fn main() {
    // コマンドライン引数を解析します (引数の数が不正な場合は clap が使い方を表示して終了する)
    let args = cli::Args::parse();

    if let Err(e) = workflow::run(args) {
        eprintln!("エラー: {}", e);
        std::process::exit(1);
    }
}
