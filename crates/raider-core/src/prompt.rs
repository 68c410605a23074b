//! Missing-value strategies: what to do when a plugin resolves to nothing.

use std::fmt;
use std::io::{self, BufRead, Write};

/// Kind of slot being asked for; shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cookie,
    Header,
    Value,
    Key,
    Url,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Cookie => "Cookie",
            Category::Header => "Header",
            Category::Value => "Value",
            Category::Key => "Key",
            Category::Url => "Url",
        })
    }
}

/// Supplies a replacement for a slot whose plugin yielded nothing.
///
/// `None` or an empty string means "skip": the slot is dropped.
pub trait Prompter {
    fn ask_for_value(&mut self, category: Category, name: &str) -> Option<String>;
}

/// Never answers; every missing slot is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompter for NoPrompt {
    fn ask_for_value(&mut self, _category: Category, _name: &str) -> Option<String> {
        None
    }
}

/// Asks the operator on a terminal, one line per missing value.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompt<R, W> {
    fn ask_for_value(&mut self, category: Category, name: &str) -> Option<String> {
        let shown = write!(
            self.output,
            "{category} \"{name}\" has an empty value. Input its value manually (enter to skip)\n{name} = "
        )
        .and_then(|_| self.output.flush());
        if let Err(e) = shown {
            tracing::warn!("prompt for {} {:?} failed: {}", category, name, e);
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => {
                let value = line.trim_end_matches(['\r', '\n']).to_string();
                (!value.is_empty()).then_some(value)
            }
            Err(e) => {
                tracing::warn!("reading value for {} {:?} failed: {}", category, name, e);
                None
            }
        }
    }
}

/// Scripted answers for tests; records every question asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Scripted {
    answers: std::collections::HashMap<String, String>,
    pub(crate) asked: Vec<(Category, String)>,
}

#[cfg(test)]
impl Scripted {
    pub(crate) fn answer(mut self, name: &str, value: &str) -> Self {
        self.answers.insert(name.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl Prompter for Scripted {
    fn ask_for_value(&mut self, category: Category, name: &str) -> Option<String> {
        self.asked.push((category, name.to_string()));
        self.answers.get(name).cloned()
    }
}
