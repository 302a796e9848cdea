use std::io::{self, Write};

use super::LineSink;
use crate::render::Line;

impl<W> LineSink<W>
where
    W: Write,
{
    /// Renders `line` and writes it, then flushes the writer.
    ///
    /// The line is rendered into the reused scratch buffer and written with a
    /// single `write_all`.
    pub fn write_line(&mut self, line: &Line<'_>) -> io::Result<()> {
        self.scratch.clear();
        line.render_into(&mut self.scratch)
            .map_err(|_| io::Error::other("failed to render log line"))?;
        self.writer.write_all(self.scratch.as_bytes())?;
        self.writer.flush()
    }

    /// Writes an already rendered line with a single `write_all`, then flushes.
    ///
    /// Nothing is formatted here, so callers holding a lock around the sink
    /// never run user `Display` code under it.
    pub fn write_rendered(&mut self, rendered: &str) -> io::Result<()> {
        self.writer.write_all(rendered.as_bytes())?;
        self.writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Severity;

    const TS: &str = "24-06-15 09:23:01";

    #[test]
    fn writes_each_line_with_its_newline() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line(&Line::new(Severity::Info, TS, &"first"))
            .expect("write succeeds");
        sink.write_line(&Line::new(Severity::Error, TS, &"second"))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("[Figo] 24-06-15 09:23:01 [ INFO] first"));
        assert_eq!(lines.next(), Some("[Figo] 24-06-15 09:23:01 [ERROR] second"));
        assert!(lines.next().is_none());
        assert_eq!(output.matches('\n').count(), 2);
    }

    #[test]
    fn scratch_is_reset_between_lines() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line(&Line::new(Severity::Info, TS, &"a much longer first message"))
            .expect("write succeeds");
        sink.write_line(&Line::new(Severity::Info, TS, &"b"))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert!(output.ends_with("[ INFO] b\n"));
        assert_eq!(output.matches("[Figo]").count(), 2);
    }

    #[test]
    fn replace_writer_returns_previous_output() {
        let mut sink = LineSink::new(Vec::new());
        sink.write_line(&Line::new(Severity::Warning, TS, &"before"))
            .expect("write succeeds");

        let previous = sink.replace_writer(Vec::new());
        sink.write_line(&Line::new(Severity::Warning, TS, &"after"))
            .expect("write succeeds");

        assert!(String::from_utf8(previous).expect("utf-8").contains("before"));
        let current = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert!(current.contains("after"));
        assert!(!current.contains("before"));
    }

    #[test]
    fn write_rendered_passes_text_through() {
        let mut sink = LineSink::new(Vec::new());
        let rendered = Line::new(Severity::Info, TS, &"ready").to_string();
        sink.write_rendered(&rendered).expect("write succeeds");
        sink.write_rendered("second\n").expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "[Figo] 24-06-15 09:23:01 [ INFO] ready\nsecond\n");
    }

    #[test]
    fn writer_errors_are_surfaced() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = LineSink::new(Broken);
        let error = sink
            .write_line(&Line::new(Severity::Error, TS, &"lost"))
            .expect_err("broken writer fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }
}
