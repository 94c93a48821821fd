//! Helpers for unreachable targets.

use std::net::TcpListener;

use crate::error::TestError;

/// Returns a localhost URL that refuses connections.
///
/// Binds an ephemeral port, records it and releases it again, so a connection attempt
/// made right afterwards is answered with a TCP reset (connection refused).
///
/// # Returns
/// - `Ok(String)` - URL such as `http://127.0.0.1:54321/`
/// - `Err(TestError::Io)` - Failed to bind an ephemeral port
pub fn refused_url() -> Result<String, TestError> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{}/", addr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_url_rejects_connections() {
        let url = refused_url().unwrap();
        let addr = url
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();

        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }
}
