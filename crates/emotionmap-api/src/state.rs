use std::sync::Arc;

use emotionmap_db::EmotionStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn EmotionStore>,
    /// Bearer token for `/admin` routes. `None` locks them entirely.
    pub admin_token: Option<String>,
}

impl AppStateInner {
    pub fn new(store: impl EmotionStore + 'static, admin_token: Option<String>) -> AppState {
        Arc::new(Self {
            store: Box::new(store),
            admin_token: admin_token.filter(|t| !t.is_empty()),
        })
    }

    /// Run a store call on the blocking pool.
    pub async fn with_store<F, T>(self: &Arc<Self>, f: F) -> anyhow::Result<T>
    where
        F: FnOnce(&dyn EmotionStore) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);
        tokio::task::spawn_blocking(move || f(state.store.as_ref())).await?
    }
}
