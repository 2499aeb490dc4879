use std::fmt;
use std::mem::take;

use memchr::memmem;

use crate::utf8::utf8_char_width;

/// A single compiled glob.
///
/// - `*` matches zero or more characters
/// - `?` matches exactly one UTF-8 character
/// - any other character, including `\`, matches itself
///
/// Matching is always anchored at both ends of the text.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("*.txt");
/// assert!(pattern.matches("readme.txt"));
/// assert!(!pattern.matches("readme.txt.bak"));
///
/// let pattern = Pattern::new("file(?).txt");
/// assert!(pattern.matches("file(1).txt"));
/// assert!(!pattern.matches("file1.txt"));
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Pattern {
    steps: Vec<Step>,
}

impl Pattern {
    /// Compiles a glob.
    ///
    /// This function is infallible, there are no invalid globs.
    /// An empty glob matches only the empty text.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Compiler::new().compile(raw.as_ref())
    }

    /// Tests whether the whole `text` matches the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new("????.txt");
    /// assert!(pattern.matches("file.txt"));
    /// assert!(!pattern.matches("files.txt"));
    ///
    /// // `?` consumes a whole character, not a byte
    /// let pattern = Pattern::new("??");
    /// assert!(pattern.matches("🦀🎉"));
    /// ```
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        let steps = self.steps.as_slice();

        // the head up to the first `*` is anchored at the start
        let head = next_star(steps, 0);
        let Some(mut text) = match_prefix(&steps[..head], text) else {
            return false;
        };
        let mut steps = &steps[head..];
        if steps.is_empty() {
            return text.is_empty();
        }

        // every other block starts with a `*`, only the last one is anchored at the end
        loop {
            let end = next_star(steps, 1);
            if end == steps.len() {
                return match_suffix(steps, text);
            }
            let Some(tail) = find_leftmost(&steps[..end], text) else {
                return false;
            };
            text = tail;
            steps = &steps[end..];
        }
    }
}

/// Returns the index of the first step at or after `from` which starts with a `*`.
fn next_star(steps: &[Step], from: usize) -> usize {
    steps
        .iter()
        .skip(from)
        .position(|step| step.gap.many)
        .map_or(steps.len(), |i| i + from)
}

/// Skips `n` characters.
fn skip(text: &str, n: usize) -> Option<&str> {
    let mut text = text;
    for _ in 0..n {
        let &b = text.as_bytes().first()?;
        text = &text[utf8_char_width(b)..];
    }
    Some(text)
}

/// Matches `steps` at the start of `text` ignoring `*`, returns the rest of the text.
fn match_prefix<'t>(steps: &[Step], text: &'t str) -> Option<&'t str> {
    steps
        .iter()
        .try_fold(text, |text, step| skip(text, step.gap.min)?.strip_prefix(step.literal.as_str()))
}

/// Finds the leftmost place where a block starting with `*` matches, returns the text after it.
///
/// Taking the leftmost place is enough since the next block starts with `*` too
/// and can absorb anything a later place would have skipped.
fn find_leftmost<'t>(block: &[Step], text: &'t str) -> Option<&'t str> {
    let (first, rest) = block.split_first()?;
    let text = skip(text, first.gap.min)?;
    let needle = first.literal.as_bytes();

    let mut offset = 0;
    while let Some(i) = memmem::find(&text.as_bytes()[offset..], needle) {
        let end = offset + i + needle.len();
        if let Some(tail) = match_prefix(rest, &text[end..]) {
            return Some(tail);
        }
        // occurrences may overlap, e.g. "aa" in "aaa"
        offset += i + 1;
    }
    None
}

/// Matches the last block starting with `*` at the end of `text`.
fn match_suffix(block: &[Step], text: &str) -> bool {
    let Some((first, rest)) = block.split_first() else {
        return text.is_empty();
    };
    let Some(text) = skip(text, first.gap.min) else {
        return false;
    };

    // the block has a fixed width once its leading `*` is taken off
    let width = first.literal.chars().count()
        + rest
            .iter()
            .map(|step| step.gap.min + step.literal.chars().count())
            .sum::<usize>();
    let start = match width {
        0 => text.len(),
        _ => match text.char_indices().rev().nth(width - 1) {
            Some((i, _)) => i,
            None => return false,
        },
    };

    text[start..]
        .strip_prefix(first.literal.as_str())
        .and_then(|tail| match_prefix(rest, tail))
        .is_some_and(str::is_empty)
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            for _ in 0..step.gap.min {
                f.write_str("?")?;
            }
            if step.gap.many {
                f.write_str("*")?;
            }
            f.write_str(&step.literal)?;
        }
        Ok(())
    }
}

// ---

/// Wildcards followed by literal text.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
struct Step {
    gap: Gap,
    literal: String,
}

/// Characters to skip before the literal: exactly `min`, or at least `min` if `many`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
struct Gap {
    many: bool,
    min: usize,
}

#[derive(Default)]
struct Compiler {
    steps: Vec<Step>,
    next: Step,
}

impl Compiler {
    fn new() -> Self {
        Self::default()
    }

    fn flush(&mut self) {
        if !self.next.literal.is_empty() {
            self.steps.push(take(&mut self.next));
        }
    }

    fn compile(mut self, raw: &str) -> Pattern {
        for ch in raw.chars() {
            match ch {
                '*' => {
                    self.flush();
                    self.next.gap.many = true;
                }
                '?' => {
                    self.flush();
                    self.next.gap.min += 1;
                }
                _ => self.next.literal.push(ch),
            }
        }

        self.flush();

        if self.next.gap != Gap::default() || self.steps.is_empty() {
            self.steps.push(self.next);
        }

        Pattern { steps: self.steps }
    }
}
