use crate::cli_error::CliError;
use phantom_types::Tagged;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_jsonlines::JsonLinesReader;
use serde_jsonlines::JsonLinesWriter;
use std::io::BufRead;
use std::io::Write;

/// Context of every value read from the input.
pub enum Line {}

pub type Number = Tagged<Line, i64>;
pub type Text = Tagged<Line, String>;

/// Either kind of sequence `truncate` accepts on a line.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Sequence {
    Text(Text),
    Items(Tagged<Line, Vec<serde_json::Value>>),
}

/// Reads one JSON value per line, hands it to `store` and writes back whatever `store` holds
/// afterwards. A `null` line writes nothing to the store and echoes the held value. Returns the
/// number of lines processed.
pub fn normalize_lines<T, R, W, F>(input: R, output: W, mut store: F) -> Result<usize, CliError>
where
    T: DeserializeOwned + Serialize,
    R: BufRead,
    W: Write,
    F: FnMut(Option<T>) -> T,
{
    let mut writer = JsonLinesWriter::new(output);
    let mut count = 0;
    for (i, line) in JsonLinesReader::new(input).read_all::<Option<T>>().enumerate() {
        let line = line.map_err(|source| CliError::BadLine {
            line: i + 1,
            source,
        })?;
        writer.write(&store(line))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
