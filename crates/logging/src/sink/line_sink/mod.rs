use std::fmt;

/// Streaming sink that writes rendered [`Line`](crate::Line) values into an
/// [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write_line`](Self::write_line) renders the whole line
/// into the scratch buffer first and hands it to the writer in a single
/// `write_all`, so a line is never split across writes.
///
/// # Examples
///
/// ```
/// use logging::{Line, LineSink, Severity};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line(&Line::new(Severity::Warning, "24-06-15 09:23:01", &"low disk"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "[Figo] 24-06-15 09:23:01 [ WARN] low disk\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LineSink<W> {
    writer: W,
    scratch: String,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
