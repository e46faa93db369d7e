use std::fmt;
use std::fmt::Write as _;
use std::ptr;

use crate::list::LinkedList;

/// Verification and dump traversals stop after this many nodes; a walk that
/// gets further almost certainly ran into a cycle, so failing fast beats
/// hanging. Debug builds therefore refuse lists longer than this.
pub const CYCLE_GUARD_STEPS: usize = 1000;

/// A broken head/tail/length invariant found by [`LinkedList::verify_integrity`].
///
/// Unlike [`ListError`](crate::ListError) this is programmer error: the chain
/// itself is corrupted, so the automatic debug-build check panics instead of
/// letting callers keep operating on it.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityViolation {
    #[error("tracked length is 0 but the head link is still set")]
    StrayHead,
    #[error("tracked length is 0 but the tail pointer is still set")]
    StrayTail,
    #[error("tracked length is {len} but the head link is unset")]
    MissingHead { len: usize },
    #[error("tracked length is {len} but the tail pointer is unset")]
    MissingTail { len: usize },
    #[error("tail points at a node that still has a successor")]
    TailHasSuccessor,
    #[error("tail does not point at the last node reachable from head")]
    TailNotLast,
    #[error("tracked length is {tracked} but traversal visited {actual} nodes")]
    LengthMismatch { tracked: usize, actual: usize },
    #[error("traversal did not finish within {limit} steps, the chain may contain a cycle")]
    CycleSuspected { limit: usize },
}

impl<T> LinkedList<T> {
    /// Re-derives the length by walking the chain and checks every tracked
    /// invariant: the empty shape (`len == 0` iff no head iff no tail), that
    /// the tail pointer aims at the last node reachable from head, that the
    /// tail node has no successor, and that the walk terminates within
    /// [`CYCLE_GUARD_STEPS`].
    ///
    /// Never mutates, so calling it twice in a row gives the same answer.
    pub fn verify_integrity(&self) -> Result<(), IntegrityViolation> {
        let head = match self.head.as_deref() {
            None => {
                if self.len != 0 {
                    return Err(IntegrityViolation::MissingHead { len: self.len });
                }
                if !self.tail.is_null() {
                    return Err(IntegrityViolation::StrayTail);
                }
                return Ok(());
            }
            Some(head) => head,
        };
        if self.len == 0 {
            return Err(IntegrityViolation::StrayHead);
        }
        if self.tail.is_null() {
            return Err(IntegrityViolation::MissingTail { len: self.len });
        }

        let mut visited = 1usize;
        let mut cur = head;
        while let Some(next) = cur.next.as_deref() {
            if ptr::eq(cur, self.tail) {
                return Err(IntegrityViolation::TailHasSuccessor);
            }
            visited += 1;
            if visited > CYCLE_GUARD_STEPS {
                return Err(IntegrityViolation::CycleSuspected {
                    limit: CYCLE_GUARD_STEPS,
                });
            }
            cur = next;
        }
        if !ptr::eq(cur, self.tail) {
            return Err(IntegrityViolation::TailNotLast);
        }
        if visited != self.len {
            return Err(IntegrityViolation::LengthMismatch {
                tracked: self.len,
                actual: visited,
            });
        }
        Ok(())
    }

    /// Hook run at the end of every mutating operation. Checks integrity in
    /// debug builds and halts on a violation; release builds skip it.
    pub(crate) fn debug_verify(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.verify_integrity() {
                tracing::error!(%violation, len = self.len, "list integrity violated");
                panic!("list integrity violated: {violation}");
            }
        }
    }

    /// Renders the chain as `value@address -> value@address -> ... -> None`,
    /// one entry per node, for debugging.
    pub fn dump_nodes(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        let mut cur = self.head.as_deref();
        let mut steps = 0usize;
        while let Some(node) = cur {
            let _ = write!(out, "{}@{:p} -> ", node.value, node);
            steps += 1;
            if steps > CYCLE_GUARD_STEPS {
                out.push_str("...");
                return out;
            }
            cur = node.next.as_deref();
        }
        out.push_str("None");
        out
    }

    /// Emits [`LinkedList::dump_nodes`] together with the tracked bookkeeping
    /// on the `debug` log level.
    pub fn trace_nodes(&self)
    where
        T: fmt::Display,
    {
        tracing::debug!(len = self.len, nodes = %self.dump_nodes(), "node dump");
    }
}
