use collection_traits::ListEdit;
use dynarray::DynamicArray;
use miette::{Context, Diagnostic};
use std::num::ParseIntError;
use thiserror::Error;

pub type Value = i64;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Step {
    Edit(ListEdit<Value>),
    Get(usize),
    Strict(usize),
}

#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ScriptError {
    #[error("unknown command `{0}`")]
    #[diagnostic(help("expected one of: append, insert, delete, set, clear, get, strict"))]
    UnknownCommand(String),
    #[error("`{command}` is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{value}` is not a valid {argument}")]
    BadNumber {
        value: String,
        argument: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

/// A parsed script line, with its 1-based line number
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line {
    pub number: usize,
    pub step: Step,
}

/// Parses an edit script. Blank lines and `#` comments are skipped.
pub fn parse_script(src: &str) -> miette::Result<Vec<Line>> {
    src.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split('#').next().unwrap_or_default().trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            parse_line(line)
                .map(|step| Line { number, step })
                .with_context(|| format!("failed to parse line {number}: `{line}`"))
        })
        .collect()
}

fn parse_line(line: &str) -> Result<Step, ScriptError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err(ScriptError::MissingArgument {
            command: "script line",
            argument: "command",
        });
    };

    let step = match command {
        "append" => Step::Edit(ListEdit::Append(number(&mut words, "append", "value")?)),
        "insert" => {
            let index = number(&mut words, "insert", "index")?;
            Step::Edit(ListEdit::Insert(index, number(&mut words, "insert", "value")?))
        }
        "delete" => Step::Edit(ListEdit::Delete(number(&mut words, "delete", "index")?)),
        "set" => {
            let index = number(&mut words, "set", "index")?;
            Step::Edit(ListEdit::Set(index, number(&mut words, "set", "value")?))
        }
        "clear" => Step::Edit(ListEdit::Clear),
        "get" => Step::Get(number(&mut words, "get", "index")?),
        "strict" => Step::Strict(number(&mut words, "strict", "index")?),
        other => return Err(ScriptError::UnknownCommand(other.to_string())),
    };

    let rest = words.collect::<Vec<_>>();
    if !rest.is_empty() {
        return Err(ScriptError::Trailing(rest.join(" ")));
    }

    Ok(step)
}

fn number<'a, N: std::str::FromStr<Err = ParseIntError>>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    argument: &'static str,
) -> Result<N, ScriptError> {
    let value = words
        .next()
        .ok_or(ScriptError::MissingArgument { command, argument })?;
    value.parse().map_err(|source| ScriptError::BadNumber {
        value: value.to_string(),
        argument,
        source,
    })
}

/// Runs one step and describes its outcome
pub fn execute(arr: &mut DynamicArray<Value>, step: Step) -> String {
    match step {
        Step::Edit(edit) => {
            let outcome = if edit.apply(arr) { "ok" } else { "rejected" };
            format!("{edit:?}: {outcome} -> {}", arr.render())
        }
        Step::Get(index) => match arr.get(index) {
            Some(value) => format!("get {index} = {value}"),
            None => format!("get {index} = absent"),
        },
        Step::Strict(index) => match arr.get_strict(index) {
            Ok(value) => format!("strict {index} = {value}"),
            Err(err) => format!("strict {index} failed: {err}"),
        },
    }
}
