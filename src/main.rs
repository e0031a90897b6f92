use color_eyre::Result;
use shared_lib::AppConfig;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;

    tracing_subscriber::fmt().with_max_level(config.log_level).init();

    info!("🚀 启动 project-tracker...");

    // 启动时打开连接池，服务停止后关闭
    let pool = database::initialize_database(config.clone()).await?;

    // 关闭信号，所有服务共用
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let mut web_task = tokio::spawn(web_service::start_web_service(
        pool.clone(),
        config.bind_addr.clone(),
        shutdown_rx,
    ));

    let web_finished = tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("📴 收到退出信号，开始关闭服务...");
            false
        }
        result = &mut web_task => {
            // Web服务提前退出（例如端口被占用）
            result??;
            true
        }
    };

    if !web_finished {
        shutdown_tx.send(true)?;
        web_task.await??;
    }

    database::close_database(pool).await;

    info!("👋 project-tracker 已退出");
    Ok(())
}
