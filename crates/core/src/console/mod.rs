// ABOUTME: Textual user interface: prefixed, colored status lines, progress bars, tables, prompts.
// ABOUTME: Console is generic over its writer so output can be captured in tests.

pub mod markers;
pub mod table;

use std::io::{self, BufRead, Write};

pub use markers::{format_text, marker, Marker};
pub use table::{render_table, Alignment, TableStyle};

/// Width of the rule printed by [`Console::line_break`].
pub const LINE_BREAK_WIDTH: usize = 79;

const BELL: char = '\u{7}';

/// How a line of text is laid out and styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Print an empty line first.
    pub section: bool,
    /// Return the cursor to the line start first.
    pub clear_line: bool,
    /// Written right after the text.
    pub end: String,
    pub color: Option<Marker>,
    pub bold: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            section: false,
            clear_line: false,
            end: "\n".to_string(),
            color: None,
            bold: false,
        }
    }
}

impl TextOptions {
    /// Default options with an empty line before the text.
    pub fn section() -> Self {
        Self {
            section: true,
            ..Self::default()
        }
    }

    fn styled(mut self, color: Option<Marker>, bold: bool) -> Self {
        self.color = color;
        self.bold = bold;
        self
    }
}

/// A console that writes formatted output to `W`.
#[derive(Debug)]
pub struct Console<W: Write> {
    out: W,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Prints `text` laid out and styled by `opts`.
    pub fn text(&mut self, text: &str, opts: TextOptions) -> io::Result<()> {
        if opts.clear_line {
            self.clear_line()?;
        }
        if opts.section {
            self.empty_line()?;
        }
        write!(
            self.out,
            "{}{}",
            format_text(text, opts.color, opts.bold),
            opts.end
        )?;
        self.out.flush()
    }

    /// `# text`, unstyled.
    pub fn comment(&mut self, text: &str, opts: TextOptions) -> io::Result<()> {
        self.text(&format!("# {text}"), opts.styled(None, false))
    }

    /// `> text` in bold cyan, for a step that is under way.
    pub fn process(&mut self, text: &str, opts: TextOptions) -> io::Result<()> {
        self.text(&format!("> {text}"), opts.styled(Some(Marker::Cyan), true))
    }

    /// `! text` in red.
    pub fn error(&mut self, text: &str, opts: TextOptions) -> io::Result<()> {
        self.text(&format!("! {text}"), opts.styled(Some(Marker::Red), false))
    }

    /// `! Notice: text` in green, for optional information.
    pub fn notice(&mut self, text: &str, opts: TextOptions) -> io::Result<()> {
        self.text(
            &format!("! Notice: {text}"),
            opts.styled(Some(Marker::Green), false),
        )
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Moves the cursor back to the start of the current line.
    pub fn clear_line(&mut self) -> io::Result<()> {
        write!(self.out, "\r")?;
        self.out.flush()
    }

    /// A cyan horizontal rule preceded by an empty line.
    pub fn line_break(&mut self) -> io::Result<()> {
        self.text(
            &"-".repeat(LINE_BREAK_WIDTH),
            TextOptions::section().styled(Some(Marker::Cyan), false),
        )
    }

    /// Prints `description: |███----|` without a trailing newline.
    ///
    /// The filled part is `progress / total` of `length`, rounded down.
    /// A zero `total` shows an empty bar; progress past `total` shows a full one.
    pub fn progress_bar(
        &mut self,
        progress: u64,
        total: u64,
        length: usize,
        description: &str,
        clear_line: bool,
    ) -> io::Result<()> {
        if clear_line {
            self.clear_line()?;
        }
        write!(
            self.out,
            "{description}: |{}|",
            progress_bar_fill(progress, total, length)
        )?;
        self.out.flush()
    }

    /// Prints `rows` as a bordered table. `padding` is (vertical, horizontal),
    /// `alignment` has one of `l`/`r`/`c` per column.
    pub fn table<S: AsRef<str>>(
        &mut self,
        rows: &[Vec<S>],
        padding: (usize, usize),
        alignment: &str,
    ) -> io::Result<()> {
        let style = TableStyle::new(padding, alignment);
        self.out.write_all(render_table(rows, &style).as_bytes())?;
        self.out.flush()
    }

    /// Rings the terminal bell.
    pub fn grab_user_attention(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BELL}")?;
        self.out.flush()
    }

    /// Asks a question on this console and reads the answer from stdin.
    /// See [`Console::read_string_from`].
    pub fn read_string(
        &mut self,
        description: &str,
        options: Option<&[&str]>,
        default: Option<&str>,
    ) -> io::Result<Option<String>> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        self.read_string_from(&mut input, description, options, default)
    }

    /// Asks a question and reads one line of answer from `input`.
    ///
    /// With `options`, the prompt lists them with the default, and any answer
    /// that is not one of them yields `default`. Without options the answer is
    /// returned as typed. End of input counts as an empty answer.
    pub fn read_string_from<R: BufRead>(
        &mut self,
        input: &mut R,
        description: &str,
        options: Option<&[&str]>,
        default: Option<&str>,
    ) -> io::Result<Option<String>> {
        match options.filter(|o| !o.is_empty()) {
            Some(options) => {
                write!(
                    self.out,
                    "@ {description} ({}) [{}]: ",
                    options.join("/"),
                    default.unwrap_or_default()
                )?;
                self.out.flush()?;

                let answer = read_answer(input)?;
                if options.contains(&answer.as_str()) {
                    Ok(Some(answer))
                } else {
                    Ok(default.map(str::to_string))
                }
            }
            None => {
                write!(self.out, "@ {description}: ")?;
                self.out.flush()?;
                Ok(Some(read_answer(input)?))
            }
        }
    }
}

/// Reads a password without echoing it.
///
/// Hidden input needs the controlling terminal, so the prompt goes to the
/// terminal directly rather than through a [`Console`] writer. Fails when no
/// terminal is attached.
pub fn read_password(description: &str) -> io::Result<String> {
    dialoguer::Password::new()
        .with_prompt(format!("@ {description}"))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

/// The bar body drawn by [`Console::progress_bar`], without description or borders.
pub fn progress_bar_fill(progress: u64, total: u64, length: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        let proportion = progress.min(total) as f64 / total as f64;
        ((proportion * length as f64) as usize).min(length)
    };
    format!("{}{}", "█".repeat(filled), "-".repeat(length - filled))
}

fn read_answer<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
