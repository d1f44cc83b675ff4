use std::sync::Arc;

use rolodex_sources::{PeopleSource, fetch_or_empty};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::event::AppEvent;

/// Owns the in-flight people fetch. Dropping it aborts the task, so a widget
/// torn down before the response arrives never receives it.
#[derive(Debug)]
pub struct FetchGuard {
    handle: JoinHandle<()>,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            tracing::debug!("aborting in-flight people fetch");
            self.handle.abort();
        }
    }
}

/// Spawn the one mount-time fetch. Must be called inside a tokio runtime.
pub fn spawn_people_fetch(
    source: Arc<dyn PeopleSource>,
    tx: UnboundedSender<AppEvent>,
) -> FetchGuard {
    let handle = tokio::spawn(async move {
        let people = fetch_or_empty(source.as_ref()).await;
        // receiver gone means the widget is already unmounted
        let _ = tx.send(AppEvent::PeopleLoaded(people));
    });
    FetchGuard { handle }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use rolodex_core::PersonRecord;
    use rolodex_sources::{Result, SourceError};
    use tokio::sync::mpsc;

    use super::*;

    struct Fixed(Vec<PersonRecord>);

    #[async_trait]
    impl PeopleSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
            Ok(self.0.clone())
        }
    }

    struct Slow;

    #[async_trait]
    impl PeopleSource for Slow {
        fn name(&self) -> &str {
            "slow"
        }

        async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(vec![PersonRecord::new("Too", "Late")])
        }
    }

    struct Broken;

    #[async_trait]
    impl PeopleSource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
            Err(SourceError::Parse("unexpected token".to_string()))
        }
    }

    #[tokio::test]
    async fn delivers_people() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _guard = spawn_people_fetch(Arc::new(Fixed(vec![PersonRecord::new("Ada", "Lovelace")])), tx);

        match rx.recv().await {
            Some(AppEvent::PeopleLoaded(people)) => assert_eq!(people.len(), 1),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_delivers_empty_pool() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _guard = spawn_people_fetch(Arc::new(Broken), tx);

        match rx.recv().await {
            Some(AppEvent::PeopleLoaded(people)) => assert!(people.is_empty()),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn dropping_guard_cancels_fetch() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let guard = spawn_people_fetch(Arc::new(Slow), tx);
        drop(guard);

        // the aborted task drops its sender without sending
        assert!(rx.recv().await.is_none());
    }
}
