//! Streams paginados com cancelamento cooperativo
//!
//! `paginate` transforma uma função "busca página a partir de um cursor" em um
//! `Stream` preguiçoso. O stream:
//!
//! - faz a primeira requisição só no primeiro `poll`
//! - verifica o `CancellationToken` a cada item puxado pelo consumidor
//! - termina na primeira página vazia (ou quando não há próximo cursor)
//! - entrega erros de HTTP como próximo item e então encerra

use std::collections::VecDeque;
use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};
use tokio_util::sync::CancellationToken;

use crate::error::{ClickUpError, Result};

/// Uma página de resultados e o cursor da página seguinte
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, C> {
    pub items: Vec<T>,
    pub next: Option<C>,
}

impl<T, C> Page<T, C> {
    pub fn new(items: Vec<T>, next: Option<C>) -> Self {
        Self { items, next }
    }
}

struct PageState<T, C, F> {
    buffer: VecDeque<T>,
    next: Option<C>,
    fetch: F,
    cancel: CancellationToken,
    finished: bool,
}

pub(crate) fn paginate<T, C, F, Fut>(
    first: C,
    cancel: CancellationToken,
    fetch: F,
) -> BoxStream<'static, Result<T>>
where
    T: Send + 'static,
    C: Send + 'static,
    F: FnMut(C) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Page<T, C>>> + Send + 'static,
{
    let state = PageState {
        buffer: VecDeque::new(),
        next: Some(first),
        fetch,
        cancel,
        finished: false,
    };

    stream::unfold(state, |mut state| async move {
        if state.finished {
            return None;
        }

        if state.cancel.is_cancelled() {
            tracing::debug!("Paginação cancelada pelo consumidor");
            state.finished = true;
            return Some((Err(ClickUpError::Cancelled), state));
        }

        if let Some(item) = state.buffer.pop_front() {
            return Some((Ok(item), state));
        }

        let cursor = state.next.take()?;

        match (state.fetch)(cursor).await {
            Err(e) => {
                state.finished = true;
                Some((Err(e), state))
            }
            Ok(page) => {
                if page.items.is_empty() {
                    return None;
                }
                state.next = page.next;
                state.buffer.extend(page.items);
                let item = state.buffer.pop_front()?;
                Some((Ok(item), state))
            }
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn numbered_pages(
        pages: Vec<Vec<u32>>,
        calls: Arc<AtomicUsize>,
        cancel: CancellationToken,
    ) -> BoxStream<'static, Result<u32>> {
        paginate(0usize, cancel, move |index: usize| {
            let calls = calls.clone();
            let page = pages.get(index).cloned().unwrap_or_default();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(Page::new(page, Some(index + 1)))
            }
        })
    }

    #[tokio::test]
    async fn test_concatenates_pages_until_empty() {
        let calls = Arc::new(AtomicUsize::new(0));
        let stream = numbered_pages(
            vec![vec![1, 2], vec![3], vec![]],
            calls.clone(),
            CancellationToken::new(),
        );

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;

        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let _stream = numbered_pages(vec![vec![1]], calls.clone(), CancellationToken::new());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancellation_between_items() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cancel = CancellationToken::new();
        let mut stream = numbered_pages(vec![vec![1, 2], vec![3], vec![]], calls.clone(), cancel.clone());

        assert_eq!(stream.next().await.unwrap().unwrap(), 1);
        cancel.cancel();

        let err = stream.next().await.unwrap().unwrap_err();
        assert!(err.is_cancelled());
        assert!(stream.next().await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_error_ends_stream() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut stream = paginate(0usize, CancellationToken::new(), move |index: usize| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                if index == 0 {
                    Ok(Page::new(vec![10u32], Some(1)))
                } else {
                    Err(ClickUpError::Api {
                        status: 500,
                        message: "boom".to_string(),
                        code: None,
                    })
                }
            }
        });

        assert_eq!(stream.next().await.unwrap().unwrap(), 10);
        let err = stream.next().await.unwrap().unwrap_err();
        assert!(matches!(err, ClickUpError::Api { status: 500, .. }));
        assert!(stream.next().await.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_missing_cursor_stops_without_extra_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let stream = paginate("first".to_string(), CancellationToken::new(), move |_cursor: String| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(Page::<u32, String>::new(vec![1, 2], None))
            }
        });

        let items: Vec<u32> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(items, vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
