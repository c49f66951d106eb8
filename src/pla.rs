//! PLA (Programmable Logic Array) format support
//!
//! This module reads multi-output truth tables in the Berkeley PLA text format
//! into a [`PLA`] and writes PLA text back out through the [`PLAWriter`] trait.
//!
//! ```text
//! # comment
//! .i 2
//! .o 1
//! .ilb a b
//! .ob f
//! .p 3
//! 00 1
//! 01 1
//! 10 1
//! .e
//! ```

pub(crate) mod error;

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::pattern::{Pattern, MAX_WIDTH};
use error::{PLAError, PLAReadError, PLAWriteError};

/// Value of one output in a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputValue {
    /// The output is 1 for every minterm of the term (`1`)
    On,
    /// The term says nothing about this output (`0`)
    Off,
    /// The output may take either value (`-`)
    DontCare,
}

impl OutputValue {
    fn symbol(self) -> char {
        match self {
            OutputValue::On => '1',
            OutputValue::Off => '0',
            OutputValue::DontCare => '-',
        }
    }
}

/// A single line of a PLA: an input pattern and one value per output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub(crate) inputs: Pattern,
    pub(crate) outputs: Arc<[OutputValue]>,
}

impl Term {
    /// Create a term from its input pattern and output values
    pub fn new(inputs: Pattern, outputs: &[OutputValue]) -> Self {
        Term {
            inputs,
            outputs: outputs.into(),
        }
    }

    /// The input pattern of this term
    pub fn inputs(&self) -> &Pattern {
        &self.inputs
    }

    /// The output values of this term
    pub fn outputs(&self) -> &[OutputValue] {
        &self.outputs
    }
}

/// A multi-output function as read from a PLA file
///
/// # Examples
///
/// ```
/// use quine_logic::{PLAReader, PLA};
///
/// let pla = PLA::from_pla_string(".i 2\n.o 1\n00 1\n01 -\n.e\n").unwrap();
/// assert_eq!(pla.num_inputs(), 2);
/// assert_eq!(pla.num_outputs(), 1);
/// assert_eq!(pla.terms().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PLA {
    num_inputs: usize,
    num_outputs: usize,
    input_labels: Option<Vec<Arc<str>>>,
    output_labels: Option<Vec<Arc<str>>>,
    declared_terms: Option<usize>,
    terms: Vec<Term>,
}

impl PLA {
    /// Create an empty function with the given dimensions
    pub fn new(num_inputs: usize, num_outputs: usize) -> Result<Self, PLAError> {
        if num_inputs > MAX_WIDTH {
            return Err(PLAError::TooManyInputs {
                declared: num_inputs,
                max: MAX_WIDTH,
            });
        }
        Ok(PLA {
            num_inputs,
            num_outputs,
            input_labels: None,
            output_labels: None,
            declared_terms: None,
            terms: Vec::new(),
        })
    }

    /// Attach variable labels
    pub fn with_labels<S: AsRef<str>>(
        mut self,
        input_labels: &[S],
        output_labels: &[S],
    ) -> Result<Self, PLAError> {
        let inputs = check_labels("input", input_labels, self.num_inputs)?;
        let outputs = check_labels("output", output_labels, self.num_outputs)?;
        self.input_labels = Some(inputs);
        self.output_labels = Some(outputs);
        Ok(self)
    }

    /// Append a term, checking it against the declared dimensions
    pub fn add_term(&mut self, term: Term) -> Result<(), PLAError> {
        if term.inputs.width() != self.num_inputs || term.outputs.len() != self.num_outputs {
            return Err(PLAError::TermDimensionMismatch {
                line: self.terms.len() + 1,
                expected_inputs: self.num_inputs,
                actual_inputs: term.inputs.width(),
                expected_outputs: self.num_outputs,
                actual_outputs: term.outputs.len(),
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of outputs
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Input variable labels from `.ilb`, if given
    pub fn input_labels(&self) -> Option<&[Arc<str>]> {
        self.input_labels.as_deref()
    }

    /// Output variable labels from `.ob`, if given
    pub fn output_labels(&self) -> Option<&[Arc<str>]> {
        self.output_labels.as_deref()
    }

    /// Term count from the `.p` directive, if given
    ///
    /// This is informational only and need not match [`PLA::terms`].
    pub fn declared_terms(&self) -> Option<usize> {
        self.declared_terms
    }

    /// All terms in file order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

fn check_labels<S: AsRef<str>>(
    label_type: &str,
    labels: &[S],
    expected: usize,
) -> Result<Vec<Arc<str>>, PLAError> {
    if labels.len() != expected {
        return Err(PLAError::LabelCountMismatch {
            label_type: Arc::from(label_type),
            expected,
            actual: labels.len(),
        });
    }
    Ok(labels.iter().map(|s| Arc::from(s.as_ref())).collect())
}

/// One serialized line: an input pattern and its output column
pub(crate) struct Row<'a> {
    pub(crate) inputs: &'a Pattern,
    pub(crate) outputs: Cow<'a, [OutputValue]>,
}

/// Internal trait for types that can be written in PLA format
pub(crate) trait PLASerialisable {
    /// Associated type for iterating over rows
    type Rows<'a>: Iterator<Item = Row<'a>>
    where
        Self: 'a;

    /// Get the number of inputs
    fn num_inputs(&self) -> usize;

    /// Get the number of outputs
    fn num_outputs(&self) -> usize;

    /// Get input variable labels if available
    fn input_labels(&self) -> Option<&[Arc<str>]>;

    /// Get output variable labels if available
    fn output_labels(&self) -> Option<&[Arc<str>]>;

    /// Number of rows yielded by [`PLASerialisable::rows`]
    fn num_rows(&self) -> usize;

    /// Iterate over the rows to write
    fn rows(&self) -> Self::Rows<'_>;
}

fn term_row(term: &Term) -> Row<'_> {
    Row {
        inputs: &term.inputs,
        outputs: Cow::Borrowed(&term.outputs[..]),
    }
}

impl PLASerialisable for PLA {
    type Rows<'a> = std::iter::Map<std::slice::Iter<'a, Term>, for<'t> fn(&'t Term) -> Row<'t>>;

    fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    fn input_labels(&self) -> Option<&[Arc<str>]> {
        self.input_labels.as_deref()
    }

    fn output_labels(&self) -> Option<&[Arc<str>]> {
        self.output_labels.as_deref()
    }

    fn num_rows(&self) -> usize {
        self.terms.len()
    }

    fn rows(&self) -> Self::Rows<'_> {
        self.terms.iter().map(term_row as for<'t> fn(&'t Term) -> Row<'t>)
    }
}

/// Trait for types that support PLA serialization (writing)
///
/// Implemented for [`PLA`] and [`MinimizedPLA`](crate::MinimizedPLA).
pub trait PLAWriter {
    /// Write PLA text to any `Write` implementation
    ///
    /// This is the core serialization method; `to_pla_string` and
    /// `to_pla_file` delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError>;

    /// Render PLA text into a string
    fn to_pla_string(&self) -> Result<String, PLAWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| PLAWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write PLA text to a file, creating or truncating it
    fn to_pla_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PLAWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Blanket implementation of PLAWriter for all PLASerialisable types
impl<T: PLASerialisable> PLAWriter for T {
    fn write_pla<W: Write>(&self, writer: &mut W) -> Result<(), PLAWriteError> {
        writeln!(writer, ".i {}", self.num_inputs())?;
        writeln!(writer, ".o {}", self.num_outputs())?;

        if let Some(labels) = self.input_labels() {
            write!(writer, ".ilb")?;
            for label in labels {
                write!(writer, " {}", label)?;
            }
            writeln!(writer)?;
        }

        if let Some(labels) = self.output_labels() {
            write!(writer, ".ob")?;
            for label in labels {
                write!(writer, " {}", label)?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, ".p {}", self.num_rows())?;

        for row in self.rows() {
            write!(writer, "{} ", row.inputs)?;
            for out in row.outputs.iter() {
                write!(writer, "{}", out.symbol())?;
            }
            writeln!(writer)?;
        }

        writeln!(writer, ".e")?;
        Ok(())
    }
}

/// Trait for types that can be parsed from PLA text
///
/// The convenience methods delegate to [`PLAReader::from_pla_reader`].
pub trait PLAReader: Sized {
    /// Parse from any `BufRead` implementation
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError>;

    /// Parse from a string
    fn from_pla_string(s: &str) -> Result<Self, PLAReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Parse from a file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quine_logic::{PLAReader, PLA};
    ///
    /// let pla = PLA::from_pla_file("input.pla").unwrap();
    /// println!("{} inputs, {} outputs", pla.num_inputs(), pla.num_outputs());
    /// ```
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PLAReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

/// A term line kept verbatim until the dimensions are known
struct RawTerm {
    line: usize,
    inputs: String,
    outputs: String,
}

fn parse_count(parts: &[&str], invalid: fn(Arc<str>) -> PLAError) -> Result<usize, PLAError> {
    parts
        .get(1)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| invalid(Arc::from(parts.get(1).copied().unwrap_or(""))))
}

fn parse_labels(parts: &[&str]) -> Option<Vec<Arc<str>>> {
    let labels: Vec<Arc<str>> = parts.iter().skip(1).map(|s| Arc::from(*s)).collect();
    if labels.is_empty() {
        None
    } else {
        Some(labels)
    }
}

impl RawTerm {
    fn parse(&self, num_inputs: usize, num_outputs: usize) -> Result<Term, PLAError> {
        let actual_inputs = self.inputs.chars().count();
        let actual_outputs = self.outputs.chars().count();
        if actual_inputs != num_inputs || actual_outputs != num_outputs {
            return Err(PLAError::TermDimensionMismatch {
                line: self.line,
                expected_inputs: num_inputs,
                actual_inputs,
                expected_outputs: num_outputs,
                actual_outputs,
            });
        }

        let mut inputs = Vec::with_capacity(num_inputs);
        for (position, character) in self.inputs.chars().enumerate() {
            inputs.push(match character {
                '0' => Some(false),
                '1' => Some(true),
                '-' | '~' | 'x' | 'X' => None,
                _ => {
                    return Err(PLAError::InvalidInputCharacter {
                        line: self.line,
                        character,
                        position,
                    })
                }
            });
        }

        let mut outputs = Vec::with_capacity(num_outputs);
        for (position, character) in self.outputs.chars().enumerate() {
            outputs.push(match character {
                '1' | '4' => OutputValue::On,
                '0' | '3' | '~' => OutputValue::Off,
                '-' | '2' => OutputValue::DontCare,
                _ => {
                    return Err(PLAError::InvalidOutputCharacter {
                        line: self.line,
                        character,
                        position,
                    })
                }
            });
        }

        let inputs = Pattern::from_symbols(&inputs).map_err(|_| PLAError::TooManyInputs {
            declared: num_inputs,
            max: MAX_WIDTH,
        })?;
        Ok(Term::new(inputs, &outputs))
    }
}

impl PLAReader for PLA {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PLAReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut num_outputs: Option<usize> = None;
        let mut input_labels: Option<Vec<Arc<str>>> = None;
        let mut output_labels: Option<Vec<Arc<str>>> = None;
        let mut declared_terms: Option<usize> = None;
        let mut raw_terms = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();

            if line.starts_with('.') {
                match parts[0] {
                    ".i" => {
                        num_inputs = Some(parse_count(&parts, |value| {
                            PLAError::InvalidInputDirective { value }
                        })?)
                    }
                    ".o" => {
                        num_outputs = Some(parse_count(&parts, |value| {
                            PLAError::InvalidOutputDirective { value }
                        })?)
                    }
                    ".p" => {
                        declared_terms = Some(parse_count(&parts, |value| {
                            PLAError::InvalidTermCountDirective { value }
                        })?)
                    }
                    ".ilb" => input_labels = parse_labels(&parts),
                    ".ob" => output_labels = parse_labels(&parts),
                    ".e" | ".end" => break,
                    // .type, .phase and friends carry nothing we use
                    _ => {}
                }
                continue;
            }

            if parts.len() != 2 {
                return Err(PLAError::MalformedTerm {
                    line: index + 1,
                    text: Arc::from(line),
                }
                .into());
            }
            raw_terms.push(RawTerm {
                line: index + 1,
                inputs: parts[0].to_string(),
                outputs: parts[1].to_string(),
            });
        }

        // Infer missing dimensions from the first term
        let first = raw_terms.first();
        let num_inputs = num_inputs
            .or_else(|| first.map(|t| t.inputs.chars().count()))
            .ok_or(PLAError::MissingInputDirective)?;
        let num_outputs = num_outputs
            .or_else(|| first.map(|t| t.outputs.chars().count()))
            .ok_or(PLAError::MissingOutputDirective)?;

        let mut pla = PLA::new(num_inputs, num_outputs)?;
        if let Some(labels) = input_labels {
            pla.input_labels = Some(check_labels("input", &labels, num_inputs)?);
        }
        if let Some(labels) = output_labels {
            pla.output_labels = Some(check_labels("output", &labels, num_outputs)?);
        }
        pla.declared_terms = declared_terms;
        pla.terms = raw_terms
            .iter()
            .map(|raw| raw.parse(num_inputs, num_outputs))
            .collect::<Result<_, _>>()?;

        debug!(
            "read PLA with {} inputs, {} outputs, {} terms",
            pla.num_inputs,
            pla.num_outputs,
            pla.terms.len()
        );
        Ok(pla)
    }
}
