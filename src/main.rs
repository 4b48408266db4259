use std::sync::Arc;

use hello_server::config::Config;
use hello_server::logger;
use hello_server::server::{self, Server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    // Bind failure is fatal: report it and abort with a non-zero exit
    let listener = match server::create_listener(addr) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    let server = Arc::new(Server::new(cfg));
    logger::log_server_start(&addr, server.launched(), server.performance());

    server.run(listener).await;
    Ok(())
}
