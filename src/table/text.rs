//! Text format for truth tables
//!
//! A small line-oriented format for declaring condition tables in files,
//! used by the command line interface:
//!
//! ```text
//! # half adder sum output
//! .i a b
//! .o sum
//! 10 1
//! 01 1
//! 11 0
//! ```
//!
//! `.i` and `.o` declare the input and output names; each following row
//! gives one input combination and, per output column, `1` (declared
//! true), `0` (declared false), or `-` (unspecified). Input bits must be
//! fully determined. Blank lines and `#` comments are ignored.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use super::error::ParseTableError;
use super::{Conditions, OutputValue, Row};

/// A parsed table file: declared names plus the conditions they describe
#[derive(Clone, Debug)]
pub struct TableFile {
    /// Declared input names, in order
    pub inputs: Vec<Arc<str>>,
    /// Declared output names, in order
    pub outputs: Vec<Arc<str>>,
    /// The rows, keyed by output name
    pub conditions: Conditions,
}

/// Parse a table from text
///
/// # Examples
///
/// ```
/// use boolsynth::table::text::parse_table;
///
/// let table = parse_table(".i a b\n.o and\n11 1\n").unwrap();
/// assert_eq!(table.inputs.len(), 2);
/// assert_eq!(table.conditions.len(), 1);
/// ```
pub fn parse_table(input: &str) -> Result<TableFile, ParseTableError> {
    let mut inputs: Option<Vec<Arc<str>>> = None;
    let mut outputs: Option<Vec<Arc<str>>> = None;
    let mut conditions = Conditions::new();

    for (index, raw_line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix(".i") {
            inputs = Some(parse_names(rest, line_number, "input")?);
            continue;
        }
        if let Some(rest) = line.strip_prefix(".o") {
            outputs = Some(parse_names(rest, line_number, "output")?);
            continue;
        }

        let input_names = inputs.as_ref().ok_or(ParseTableError::MissingInputs)?;
        let output_names = outputs.as_ref().ok_or(ParseTableError::MissingOutputs)?;

        let mut fields = line.split_whitespace();
        let input_bits = fields.next().unwrap_or_default();
        let output_bits = fields.next().unwrap_or_default();
        if fields.next().is_some() {
            return Err(ParseTableError::InvalidLine {
                line: line_number,
                message: Arc::from("expected exactly two fields: input bits and output bits"),
            });
        }

        let row_inputs = parse_input_bits(input_bits, input_names.len(), line_number)?;

        if output_bits.len() != output_names.len() {
            return Err(ParseTableError::InvalidLine {
                line: line_number,
                message: Arc::from(
                    format!(
                        "row has {} output bits, expected {}",
                        output_bits.len(),
                        output_names.len()
                    )
                    .as_str(),
                ),
            });
        }

        for (name, bit) in output_names.iter().zip(output_bits.chars()) {
            let output = OutputValue::Literal(Arc::clone(name));
            match bit {
                '1' => conditions.add_for(output, Row::explicit(&row_inputs, true)),
                '0' => conditions.add_for(output, Row::explicit(&row_inputs, false)),
                '-' => {}
                other => {
                    return Err(ParseTableError::InvalidLine {
                        line: line_number,
                        message: Arc::from(
                            format!("invalid output bit {:?}, expected '0', '1', or '-'", other)
                                .as_str(),
                        ),
                    });
                }
            }
        }
    }

    let inputs = inputs.ok_or(ParseTableError::MissingInputs)?;
    let outputs = outputs.ok_or(ParseTableError::MissingOutputs)?;

    Ok(TableFile {
        inputs,
        outputs,
        conditions,
    })
}

/// Parse a table from any reader
pub fn read_table<R: Read>(reader: R) -> io::Result<TableFile> {
    let mut text = String::new();
    BufReader::new(reader).read_to_string(&mut text)?;
    parse_table(&text).map_err(Into::into)
}

/// Parse a table from a file
///
/// # Examples
///
/// ```no_run
/// use boolsynth::table::text::read_table_file;
///
/// let table = read_table_file("half_adder.table").unwrap();
/// println!("{} inputs", table.inputs.len());
/// ```
pub fn read_table_file<P: AsRef<Path>>(path: P) -> io::Result<TableFile> {
    read_table(File::open(path)?)
}

/// Parse the name list after a `.i`/`.o` marker
fn parse_names(
    rest: &str,
    line: usize,
    kind: &str,
) -> Result<Vec<Arc<str>>, ParseTableError> {
    if !rest.starts_with(char::is_whitespace) {
        return Err(ParseTableError::InvalidLine {
            line,
            message: Arc::from(format!("malformed {} declaration", kind).as_str()),
        });
    }
    let names: Vec<Arc<str>> = rest.split_whitespace().map(Arc::from).collect();
    if names.is_empty() {
        return Err(ParseTableError::InvalidLine {
            line,
            message: Arc::from(format!("{} declaration lists no names", kind).as_str()),
        });
    }
    Ok(names)
}

/// Parse one row's input bits (minterm rows must be fully determined)
fn parse_input_bits(
    bits: &str,
    expected: usize,
    line: usize,
) -> Result<Vec<bool>, ParseTableError> {
    if bits.len() != expected {
        return Err(ParseTableError::InvalidLine {
            line,
            message: Arc::from(
                format!("row has {} input bits, expected {}", bits.len(), expected).as_str(),
            ),
        });
    }
    bits.chars()
        .map(|c| match c {
            '1' => Ok(true),
            '0' => Ok(false),
            other => Err(ParseTableError::InvalidLine {
                line,
                message: Arc::from(
                    format!("invalid input bit {:?}, expected '0' or '1'", other).as_str(),
                ),
            }),
        })
        .collect()
}
