/// Where a rendered line goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Destination of a [`Report`].
///
/// Reports speak in terms of sections, items and diagnostics; every shape
/// is formatted once here and handed to [`Output::write_line`].
pub trait Output {
    fn write_line(&mut self, stream: Stream, line: String);

    fn key_value(&mut self, key: &str, value: &str) {
        self.write_line(Stream::Stdout, format!("{key}: {value}"));
    }

    fn section(&mut self, name: &str) {
        self.write_line(Stream::Stdout, format!("{name}:"));
    }

    /// A file that was created or rewritten.
    fn added_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  + {text}"));
    }

    fn list_item(&mut self, text: &str) {
        self.write_line(Stream::Stdout, format!("  - {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, format!("warning: {msg}"));
    }

    fn error(&mut self, msg: &str) {
        self.write_line(Stream::Stderr, format!("error: {msg}"));
    }

    /// A banner introducing the block that follows, e.g. a previewed file.
    fn divider(&mut self, label: &str) {
        self.write_line(Stream::Stdout, format!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.write_line(Stream::Stdout, text.to_string());
    }

    fn newline(&mut self) {
        self.write_line(Stream::Stdout, String::new());
    }
}

pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to the process's stdout and stderr.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write_line(&mut self, stream: Stream, line: String) {
        match stream {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }
}

/// Keeps every line in order regardless of stream.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn write_line(&mut self, _stream: Stream, line: String) {
        self.lines.push(line);
    }
}
