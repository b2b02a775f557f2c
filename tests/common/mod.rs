#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use mockall::mock;
use shortlink_core::domain::{ShortlinkInfo, Storage};
use shortlink_core::error::AppError;
use shortlink_core::routes::app_router;
use shortlink_core::state::AppState;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

pub const LONG_URL: &str = "https://www.baidu.com";
pub const SHORTLINK: &str = "IFHzaO";
pub const EXPIRATION: i64 = 60;

mock! {
    pub Store {}

    #[async_trait]
    impl Storage for Store {
        async fn shorten(&self, url: &str, expiration_in_minutes: i64) -> Result<String, AppError>;
        async fn shortlink_info(&self, token: &str) -> Result<ShortlinkInfo, AppError>;
        async fn unshorten(&self, token: &str) -> Result<String, AppError>;
    }
}

/// Storage whose every operation panics.
pub struct PanickingStorage;

#[async_trait]
impl Storage for PanickingStorage {
    async fn shorten(&self, _url: &str, _expiration_in_minutes: i64) -> Result<String, AppError> {
        panic!("shorten exploded")
    }

    async fn shortlink_info(&self, _token: &str) -> Result<ShortlinkInfo, AppError> {
        panic!("shortlink_info exploded")
    }

    async fn unshorten(&self, token: &str) -> Result<String, AppError> {
        if token == "healthy" {
            return Ok("https://example.com".to_string());
        }
        panic!("unshorten exploded for {token}")
    }
}

pub fn create_test_state(storage: impl Storage + 'static) -> AppState {
    AppState::new(Arc::new(storage))
}

pub fn create_test_server(storage: impl Storage + 'static) -> TestServer {
    TestServer::new(app_router(create_test_state(storage))).unwrap()
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes log output on the current thread into a buffer until the guard drops.
pub fn capture_logs() -> (LogBuffer, DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();

    (buffer, tracing::subscriber::set_default(subscriber))
}
