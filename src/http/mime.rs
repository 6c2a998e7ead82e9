//! MIME type inference module
//!
//! Maps a requested file name to the Content-type value sent with a
//! successful response.

/// MIME type reported when the extension is missing or unrecognized.
///
/// Note: `x-application/x-unknown` is something made up; it will probably
/// make the browser offer to save the file.
pub const UNKNOWN_TYPE: &str = "x-application/x-unknown";

/// Infer a MIME type from a file name's extension.
///
/// The extension is everything after the last `.`, compared
/// case-insensitively. A name with no dot maps to [`UNKNOWN_TYPE`].
///
/// # Examples
/// ```
/// use rust_fileserver::http::mime::mime_type;
/// assert_eq!(mime_type("index.html"), "text/html");
/// assert_eq!(mime_type("photo.JPG"), "image/jpeg");
/// assert_eq!(mime_type("README"), "x-application/x-unknown");
/// ```
pub fn mime_type(file_name: &str) -> &'static str {
    let Some(dot) = file_name.rfind('.') else {
        return UNKNOWN_TYPE;
    };
    let extension = file_name[dot + 1..].to_ascii_lowercase();

    match extension.as_str() {
        // Text
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "java" => "text/x-java",
        "xml" => "application/xml",
        "xhtml" => "application/xhtml+xml",

        // Images
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "ico" => "image/x-icon",

        // Archives and JVM artifacts
        "class" => "application/java-vm",
        "jar" => "application/java-archive",
        "zip" => "application/zip",

        // Default
        _ => UNKNOWN_TYPE,
    }
}
