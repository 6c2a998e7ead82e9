// Server loop module
// Accepts connections until the listening socket fails

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::handle_connection;
use crate::config::Config;
use crate::logger;

/// Accept connections forever, one spawned task per connection.
///
/// Failures inside a connection task are contained there; only a failed
/// `accept` ends the loop. The listener is dropped on return, so the
/// listening port closes with the loop.
pub async fn start_server_loop(
    listener: TcpListener,
    config: Arc<Config>,
) -> std::io::Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                logger::log_connection_accepted(&peer_addr);

                // One task per connection with no upper bound; a flood of
                // clients will spawn tasks without limit.
                let config = Arc::clone(&config);
                tokio::spawn(async move {
                    handle_connection(stream, peer_addr, &config).await;
                });
            }
            Err(e) => {
                logger::log_accept_failed(&e);
                return Err(e);
            }
        }
    }
}
