//! Output sink trait and an in-memory implementation

use crate::render::RenderedFragment;

/// Append-only, clearable output surface.
///
/// Supplied by the view layer. A sink that has been torn down reports
/// `is_available() == false`; the scheduler then stops writing to it.
pub trait Sink {
    /// Remove all previously appended content
    fn clear(&mut self);

    /// Append one rendered fragment
    fn append(&mut self, fragment: &RenderedFragment);

    /// Whether the surface can still receive content
    fn is_available(&self) -> bool {
        true
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        (**self).append(fragment)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        (**self).append(fragment)
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

/// Sink collecting rendered fragments in memory
#[derive(Debug, Clone)]
pub struct VecSink {
    fragments: Vec<RenderedFragment>,
    appends: usize,
    clears: usize,
    available: bool,
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
            appends: 0,
            clears: 0,
            available: true,
        }
    }

    /// Fragments currently shown
    pub fn fragments(&self) -> &[RenderedFragment] {
        &self.fragments
    }

    /// Plain-text lines of the current content
    pub fn lines(&self) -> Vec<String> {
        self.fragments.iter().map(ToString::to_string).collect()
    }

    /// Total appends over the sink's lifetime, across clears
    pub fn append_count(&self) -> usize {
        self.appends
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Simulate the view being torn down
    pub fn detach(&mut self) {
        self.available = false;
    }
}

impl Sink for VecSink {
    fn clear(&mut self) {
        self.fragments.clear();
        self.clears += 1;
    }

    fn append(&mut self, fragment: &RenderedFragment) {
        self.fragments.push(fragment.clone());
        self.appends += 1;
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Category, Fragment};
    use crate::render::render;

    #[test]
    fn test_append_and_clear() {
        let mut sink = VecSink::new();
        sink.append(&render(&Fragment::new(Category::Plain, "One")));
        sink.append(&render(&Fragment::new(Category::Plain, "Two")));
        assert_eq!(sink.lines(), vec!["One.", "Two."]);

        sink.clear();
        assert!(sink.fragments().is_empty());
        assert_eq!(sink.append_count(), 2);
        assert_eq!(sink.clear_count(), 1);
    }

    #[test]
    fn test_detach() {
        let mut sink = VecSink::new();
        assert!(sink.is_available());
        sink.detach();
        assert!(!sink.is_available());
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let mut inner = VecSink::new();
        {
            let mut borrowed: &mut VecSink = &mut inner;
            Sink::append(&mut borrowed, &render(&Fragment::new(Category::Plain, "Hi")));
        }
        assert_eq!(inner.append_count(), 1);
    }
}
