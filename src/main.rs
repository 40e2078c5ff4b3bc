use anyhow::Result;
use clap::Parser;
use study_buddy::app::{App, Command};
use study_buddy::config::Config;
use study_buddy::logger;

#[derive(Parser)]
#[command(
    name = "study-buddy",
    version,
    about = "Study assistant client: plans, quizzes, flashcards and a chat tutor"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init_with_verbose(config.verbose_logging);

    // 初始化并运行应用
    App::initialize(config)?.run(cli.command).await?;

    Ok(())
}
