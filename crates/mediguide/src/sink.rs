//! Sinks for terminal output and for sharing a sink with a view

use std::io::Write;
use std::sync::Arc;

use mediguide_core::{RenderedFragment, Sink};
use parking_lot::Mutex;
use tracing::warn;

/// Line-per-fragment writer.
///
/// A terminal cannot be erased, so `clear` writes a blank separator line
/// when something was shown before. A failed write (closed pipe) makes the
/// sink unavailable.
pub struct TerminalSink<W: Write> {
    out: W,
    written: usize,
    broken: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            written: 0,
            broken: false,
        }
    }

    /// Lines written since the last clear
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        if self.broken {
            return;
        }
        let result = writeln!(self.out, "{}", line).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "terminal sink write failed");
            self.broken = true;
        }
    }
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn clear(&mut self) {
        if self.written > 0 {
            self.write_line("");
        }
        self.written = 0;
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        self.write_line(&fragment.to_string());
        self.written += 1;
    }

    fn is_available(&self) -> bool {
        !self.broken
    }
}

struct SharedState<S> {
    sink: S,
    attached: bool,
}

/// Handle to a sink owned jointly by the reveal driver and a view.
///
/// Clones point at the same sink. `detach` models the view being navigated
/// away from: the reveal stops at its next step.
pub struct SharedSink<S> {
    inner: Arc<Mutex<SharedState<S>>>,
}

impl<S> Clone for SharedSink<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Sink> SharedSink<S> {
    pub fn new(sink: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SharedState {
                sink,
                attached: true,
            })),
        }
    }

    pub fn detach(&self) {
        self.inner.lock().attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.inner.lock().attached
    }

    /// Run `f` against the wrapped sink
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.lock().sink)
    }
}

impl<S: Sink> Sink for SharedSink<S> {
    fn clear(&mut self) {
        self.inner.lock().sink.clear();
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        self.inner.lock().sink.append(fragment);
    }

    fn is_available(&self) -> bool {
        let state = self.inner.lock();
        state.attached && state.sink.is_available()
    }
}
