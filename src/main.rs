use std::sync::Arc;

use rust_fileserver::config::Config;
use rust_fileserver::logger;
use rust_fileserver::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::default();

    // 创建 Tokio 运行时，多线程调度器
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;

    // A bind failure here is fatal; there is nothing to serve without a socket.
    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    logger::log_server_start(&addr, &cfg);

    let cfg = Arc::new(cfg);
    server::start_server_loop(listener, cfg).await?;
    Ok(())
}
