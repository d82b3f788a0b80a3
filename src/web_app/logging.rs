// web_app/logging.rs - tracing subscriber setup
//
// Server: fmt output filtered by RUST_LOG (default "info").
// Browser: fmt output forwarded line by line to the web console.

#[cfg(feature = "ssr")]
pub fn init_server_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_tracing() {
    let result = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_target(false)
        // std::time is unavailable on wasm32-unknown-unknown
        .without_time()
        .with_writer(ConsoleWriter::default)
        .try_init();

    if result.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}

/// Buffers one formatted event and writes it to `console.log` on drop
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct ConsoleWriter {
    buf: Vec<u8>,
}

#[cfg(feature = "hydrate")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}
