//! Request line parsing module
//!
//! Only the first line of a request is ever interpreted; header lines after
//! it are drained and discarded by the connection handler.

/// The parsed first line of an HTTP request.
///
/// `target` stays exactly as the client sent it: nothing is URL-decoded or
/// normalized anywhere in the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub target: Option<String>,
}

impl RequestLine {
    /// Split a raw request line on whitespace.
    ///
    /// Returns `None` when the line holds no tokens at all. A line with only
    /// a method parses with `target` set to `None`; any third token (the
    /// protocol version) is ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let method = tokens.next()?.to_string();
        let target = tokens.next().map(str::to_string);
        Some(Self { method, target })
    }

    /// Whether this request uses the only supported method.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
