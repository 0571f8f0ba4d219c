use std::{
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::http::request::Parts;
use identity::{IdentityError, IdentityProvider, PlatformHeaders, User, UserService};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink for asserting on emitted lines.
#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Routes this thread's events into the buffer until the guard drops.
    pub(crate) fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn lines_containing(&self, needle: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.contains(needle))
            .map(str::to_string)
            .collect()
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

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Platform-header identity that counts `current_user` lookups.
#[derive(Clone, Default)]
pub(crate) struct CountingIdentity {
    inner: PlatformHeaders,
    calls: Arc<AtomicUsize>,
}

impl CountingIdentity {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for CountingIdentity {
    fn user_service(&self, request: &Parts) -> Arc<dyn UserService> {
        Arc::new(CountingUserService {
            inner: self.inner.user_service(request),
            calls: self.calls.clone(),
        })
    }
}

struct CountingUserService {
    inner: Arc<dyn UserService>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl UserService for CountingUserService {
    async fn current_user(&self) -> Result<Option<User>, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // let concurrent requests interleave inside the lookup
        tokio::task::yield_now().await;
        self.inner.current_user().await
    }

    async fn is_user_admin(&self) -> Result<bool, IdentityError> {
        self.inner.is_user_admin().await
    }

    fn create_login_url(&self, destination: &str) -> String {
        self.inner.create_login_url(destination)
    }

    fn create_logout_url(&self, destination: &str) -> String {
        self.inner.create_logout_url(destination)
    }
}
