// 连接处理模块
// 处理单个 TCP 连接上的一次 GET 请求，响应后关闭连接

use std::net::SocketAddr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use crate::config::Config;
use crate::handler::{regular_file_length, resolve_path, stream_file};
use crate::http::{mime, write_error, write_success_header, HttpError, RequestLine};
use crate::logger::{self, AccessLogEntry};

/// Serve one request on `stream`, then let the connection close.
///
/// Any I/O failure is logged here and goes no further; a broken client
/// never takes the accept loop down with it.
pub async fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, config: &Config) {
    if let Err(e) = serve_request(stream, peer_addr, config).await {
        logger::log_connection_error(&e);
    }
}

/// Read the request line, drain the headers, and answer with either the
/// requested file or an error page. The stream is dropped on every return
/// path, which closes the connection.
async fn serve_request(
    stream: TcpStream,
    peer_addr: SocketAddr,
    config: &Config,
) -> std::io::Result<()> {
    // Reads go through the buffer; writes pass straight through to the socket.
    let mut connection = BufReader::new(stream);

    let Some(line) = read_request_line(&mut connection).await? else {
        // Peer closed before sending anything; nothing to answer.
        return Ok(());
    };

    let mut entry = AccessLogEntry::new(peer_addr.to_string(), "-".to_string(), "-".to_string());

    let Some(request) = RequestLine::parse(&line) else {
        return send_error(&mut connection, HttpError::BadRequest, entry).await;
    };

    entry.method.clone_from(&request.method);
    if let Some(t) = &request.target {
        entry.path.clone_from(t);
    }
    logger::log_request(&request.method, request.target.as_deref().unwrap_or("-"));

    if !request.is_get() {
        return send_error(&mut connection, HttpError::NotImplemented, entry).await;
    }

    drain_headers(&mut connection).await?;

    let Some(target) = request.target else {
        return send_error(&mut connection, HttpError::BadRequest, entry).await;
    };

    let path = resolve_path(&config.resources.document_root, &target);

    let Some(length) = regular_file_length(&path).await else {
        return send_error(&mut connection, HttpError::NotFound, entry).await;
    };

    write_success_header(&mut connection, mime::mime_type(&target), length).await?;
    let sent = stream_file(&path, &mut connection).await?;
    connection.flush().await?;

    entry.body_bytes = sent;
    logger::log_access(&entry);
    Ok(())
}

/// Write one error response, record it in the access log, and return.
async fn send_error<W>(
    out: &mut W,
    error: HttpError,
    mut entry: AccessLogEntry,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    write_error(out, error).await?;
    out.flush().await?;

    entry.status = error.code();
    entry.body_bytes = error.body().len() as u64;
    logger::log_access(&entry);
    Ok(())
}

/// Read the first line of the request.
///
/// `None` means the peer closed without sending a byte. The line is decoded
/// lossily so a non-UTF-8 request still reaches the method check.
async fn read_request_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf).await?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Discard header lines up to and including the blank line.
///
/// A request that ends early, without the blank line, is tolerated and
/// served anyway.
async fn drain_headers<R>(reader: &mut R) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).await?;
        if n == 0 || buf == b"\r\n" || buf == b"\n" {
            return Ok(());
        }
    }
}
