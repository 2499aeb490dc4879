// std imports
use std::{
    borrow::Cow,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

// local imports
use crate::{error::*, filtering::PathFilter};

// ---

/// Separator of paths in input and output streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Lf,
    Nul,
}

impl Delimiter {
    pub fn byte(self) -> u8 {
        match self {
            Self::Lf => b'\n',
            Self::Nul => 0,
        }
    }
}

// ---

/// Source of candidate paths.
pub enum Input<'a> {
    /// A single path given directly.
    Path(PathBuf),
    /// A stream of delimited paths.
    Stream(Box<dyn BufRead + 'a>),
}

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub filter: PathFilter,
    pub delimiter: Delimiter,
    pub invert: bool,
    pub count: bool,
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Tells whether `path` is to be printed.
    pub fn selects(&self, path: &Path) -> bool {
        self.options.filter.accepts(path) != self.options.invert
    }

    /// Writes every selected path from `inputs` to `output`, or their number in count mode.
    pub fn run<'a, I>(&self, inputs: I, output: &mut dyn Write) -> Result<()>
    where
        I: IntoIterator<Item = Input<'a>>,
    {
        let mut n = 0;

        for input in inputs {
            match input {
                Input::Path(path) => {
                    n += self.emit(&path, path.as_os_str().as_encoded_bytes(), output)?;
                }
                Input::Stream(stream) => {
                    for record in stream.split(self.options.delimiter.byte()) {
                        let record = record?;
                        let record = self.trim(&record);
                        if record.is_empty() {
                            continue;
                        }
                        let path = String::from_utf8_lossy(record);
                        if let Cow::Owned(_) = path {
                            log::debug!("path {:?} is not valid utf-8", path);
                        }
                        n += self.emit(Path::new(path.as_ref()), record, output)?;
                    }
                }
            }
        }

        log::debug!("{n} paths selected");

        if self.options.count {
            writeln!(output, "{n}")?;
        }

        Ok(())
    }

    fn emit(&self, path: &Path, raw: &[u8], output: &mut dyn Write) -> Result<usize> {
        if !self.selects(path) {
            return Ok(0);
        }
        if !self.options.count {
            output.write_all(raw)?;
            output.write_all(&[self.options.delimiter.byte()])?;
        }
        Ok(1)
    }

    fn trim<'r>(&self, record: &'r [u8]) -> &'r [u8] {
        match self.options.delimiter {
            Delimiter::Lf => record.strip_suffix(b"\r").unwrap_or(record),
            Delimiter::Nul => record,
        }
    }
}
