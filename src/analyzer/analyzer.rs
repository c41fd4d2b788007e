use std::{fs, path::Path};

use log::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::is_blank,
    rules::Rules,
};

/// One classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub line: usize,
    pub token: String,
    pub category: &'static str,
    pub valid: bool,
}

/// Classifies the tokens of a single line. Leading and trailing whitespace is
/// ignored; a blank line yields no rows.
pub fn analyze_line(line_number: usize, line: &str, rules: &Rules) -> Vec<Row> {
    let line = line.trim_matches(is_blank);

    if line.is_empty() {
        return vec![];
    }

    let rows = rules
        .tokenizer()
        .tokenize(line)
        .into_iter()
        .map(|token| {
            let classification = rules.classifier().classify(&token.value);

            Row {
                line: line_number,
                token: token.value,
                category: classification.name,
                valid: classification.valid,
            }
        })
        .collect::<Vec<Row>>();

    debug!("line {}: {} tokens", line_number, rows.len());
    rows
}

/// Splits `source` into lines ended by `\r\n`, `\n` or a lone `\r`. A
/// trailing terminator does not start an extra empty line.
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut rest = source;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Analyzes every line of `source`. Line numbers are 1-based and count blank
/// lines too.
pub fn analyze_source(source: &str, rules: &Rules) -> Vec<Row> {
    split_lines(source)
        .into_iter()
        .enumerate()
        .flat_map(|(index, line)| analyze_line(index + 1, line, rules))
        .collect()
}

/// Reads `path` as UTF-8 and analyzes it. Nothing is returned unless the
/// whole file could be read and decoded.
pub fn analyze_file(path: &Path, rules: &Rules) -> Result<Vec<Row>, Error> {
    let bytes = fs::read(path).map_err(|e| Error::from_io(e, path.to_path_buf()))?;
    info!("read {} bytes from {}", bytes.len(), path.display());

    let source = decode(bytes, path)?;
    let rows = analyze_source(&source, rules);

    info!("classified {} tokens", rows.len());
    Ok(rows)
}

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String, Error> {
    String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let prefix = String::from_utf8_lossy(valid);

        // Lines fully before the bad byte, plus the one holding it.
        let complete = split_lines(&prefix).len();
        let line = if prefix.is_empty() || prefix.ends_with(|c: char| c == '\r' || c == '\n') {
            complete + 1
        } else {
            complete
        };

        Error::new(ErrorImpl::DecodingError { line }, path.to_path_buf())
    })
}
