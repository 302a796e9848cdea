use std::mem;

use super::LineSink;

/// Initial scratch capacity; typical lines fit without reallocating.
const SCRATCH_CAPACITY: usize = 256;

impl<W> LineSink<W> {
    /// Creates a sink around `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: String::with_capacity(SCRATCH_CAPACITY),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Replaces the underlying writer, keeping the scratch buffer.
    ///
    /// The previous writer is returned so anything it buffered can be
    /// inspected or flushed before it is dropped.
    #[must_use = "the returned writer holds lines written before the replacement"]
    pub fn replace_writer(&mut self, mut writer: W) -> W {
        mem::swap(&mut self.writer, &mut writer);
        writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
