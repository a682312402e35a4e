//! `reverse`: last-to-first.
//!
//! Indexed sources are walked backwards through random access. Anything else
//! is fully buffered on the first pull.

use seqkit_core::config::SeqConfig;
use seqkit_core::sequence::{Indexed, Sequence};

use crate::metrics::record_materialized;

#[derive(Debug, Clone)]
pub struct Reverse<S> {
    source: S,
    config: SeqConfig,
}

impl<S> Reverse<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            config: SeqConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SeqConfig) -> Self {
        self.config = config;
        self
    }
}

enum ReverseState<'a, S: Sequence + 'a> {
    Pending,
    Indexed {
        view: &'a dyn Indexed<S::Item>,
        remaining: usize,
    },
    Buffered(std::iter::Rev<std::vec::IntoIter<S::Item>>),
}

pub struct ReverseCursor<'a, S: Sequence + 'a> {
    node: &'a Reverse<S>,
    state: ReverseState<'a, S>,
}

impl<'a, S: Sequence + 'a> ReverseCursor<'a, S> {
    fn start(&mut self) {
        let node: &'a Reverse<S> = self.node;
        let source = &node.source;
        self.state = match source.indexed() {
            Some(view) => ReverseState::Indexed {
                view,
                remaining: view.len(),
            },
            None => {
                let mut buffer = Vec::with_capacity(node.config.buffer_capacity(None));
                buffer.extend(source.cursor());
                record_materialized("reverse", buffer.len(), 0);
                ReverseState::Buffered(buffer.into_iter().rev())
            }
        };
    }
}

impl<'a, S: Sequence + 'a> Iterator for ReverseCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if let ReverseState::Pending = self.state {
            self.start();
        }
        match &mut self.state {
            ReverseState::Pending => None,
            ReverseState::Indexed { view, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                view.get(*remaining)
            }
            ReverseState::Buffered(items) => items.next(),
        }
    }
}

impl<S: Sequence> Sequence for Reverse<S> {
    type Item = S::Item;
    type Cursor<'a> = ReverseCursor<'a, S>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ReverseCursor {
            node: self,
            state: ReverseState::Pending,
        }
    }
}
