use std::path::Path;

use rustpython_parser::lexer::{LexicalErrorType, lex};
use rustpython_parser::{Mode, ParseError, ParseErrorType, Tok, parse};

use crate::checker::{Check, CheckContext, CheckResult};
use crate::config::SyntaxConfig;
use crate::error::CheckError;
use crate::scanner::{DirectoryScanner, ExtensionFilter, FileScanner};

/// Every Python source under the tree must parse.
pub struct SyntaxCheck {
    scanner: DirectoryScanner<ExtensionFilter>,
    max_errors: usize,
}

impl SyntaxCheck {
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(config: &SyntaxConfig) -> crate::Result<Self> {
        let filter = ExtensionFilter::new(config.extension.as_str(), &config.exclude_dirs)?;
        Ok(Self {
            scanner: DirectoryScanner::new(filter),
            max_errors: config.max_errors,
        })
    }
}

impl Check for SyntaxCheck {
    fn name(&self) -> &'static str {
        "Python Syntax"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> Result<CheckResult, CheckError> {
        let files = self.scanner.scan(ctx.root());
        tracing::debug!(files = files.len(), "parsing python sources");

        let errors: Vec<String> = files
            .iter()
            .filter_map(|path| {
                let rel = ctx.relative(path);
                check_file(path, &rel).err()
            })
            .collect();

        if !errors.is_empty() {
            let shown: Vec<String> = errors.iter().take(self.max_errors).cloned().collect();
            return Ok(CheckResult::fail(format!(
                "Python syntax errors found in {} file(s)",
                errors.len()
            ))
            .with_detail("errors", shown));
        }

        Ok(CheckResult::pass(format!(
            "All Python files have valid syntax ({} checked)",
            files.len()
        )))
    }
}

/// Parse one file; the error string is the report entry for it.
fn check_file(path: &Path, rel: &str) -> Result<(), String> {
    let source = std::fs::read_to_string(path).map_err(|e| format!("{rel}: {e}"))?;
    check_source(&source, rel)
}

/// Parse `source` as a Python module. Errors render as `path: message (line N)`.
///
/// # Errors
/// Returns the formatted syntax error.
pub fn check_source(source: &str, rel: &str) -> Result<(), String> {
    parse(source, Mode::Module, rel)
        .map(drop)
        .map_err(|err| format!("{rel}: {} (line {})", err.error, error_line(source, &err)))
}

/// Line to report for `err`, never past the last line with content.
///
/// End-of-input errors point at the innermost bracket left open. Lexer errors
/// raised after consuming a newline belong to the line that newline ends.
fn error_line(source: &str, err: &ParseError) -> usize {
    let offset = usize::from(err.offset);
    let line = match &err.error {
        ParseErrorType::Eof | ParseErrorType::Lexical(LexicalErrorType::Eof) => {
            line_at(source, unclosed_bracket(source).unwrap_or(offset))
        }
        ParseErrorType::Lexical(_)
            if offset > 0 && source.as_bytes().get(offset - 1) == Some(&b'\n') =>
        {
            line_at(source, offset - 1)
        }
        _ => line_at(source, offset),
    };
    line.min(last_content_line(source))
}

/// Byte offset of the innermost bracket still open when lexing stops.
fn unclosed_bracket(source: &str) -> Option<usize> {
    let mut open = Vec::new();
    for (tok, range) in lex(source, Mode::Module).map_while(Result::ok) {
        match tok {
            Tok::Lpar | Tok::Lsqb | Tok::Lbrace => open.push(usize::from(range.start())),
            Tok::Rpar | Tok::Rsqb | Tok::Rbrace => {
                open.pop();
            }
            _ => {}
        }
    }
    open.pop()
}

/// 1-based line containing byte `offset`, clamped to the end of `source`.
fn line_at(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}

/// 1-based number of the last line holding anything but whitespace.
fn last_content_line(source: &str) -> usize {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .last()
        .map_or(1, |(index, _)| index + 1)
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
