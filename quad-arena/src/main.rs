use anyhow::{Context, Result};
use protocol::Side;
use quad_arena::{ArenaConfig, EndReason};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn load_config() -> Result<ArenaConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(ArenaConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read arena config {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("invalid arena config {}", path))
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quad_arena=info".parse()?),
        )
        .init();

    let config = load_config()?;
    config.game.validate()?;

    info!(
        "二次方程对战启动: {}x{} 棋盘, {} 局",
        config.game.rows, config.game.cols, config.games
    );

    let summaries = quad_arena::run(&config)?;

    let mut red_wins = 0;
    let mut blue_wins = 0;
    let mut unfinished = 0;
    for summary in &summaries {
        match summary.winner {
            Some(Side::Red) => red_wins += 1,
            Some(Side::Blue) => blue_wins += 1,
            None => {
                if let EndReason::NoMoves(side) = summary.end {
                    info!("{} 无棋可走，对局中止", side);
                }
                unfinished += 1;
            }
        }
    }

    info!(
        "对战结束: 红方胜 {}, 蓝方胜 {}, 未分胜负 {}",
        red_wins, blue_wins, unfinished
    );
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    Ok(())
}
