//! Tree output rendering

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize tree: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Rendered tree is not valid UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}

/// Indentation of the pretty rendering
pub const INDENT: &[u8] = b"      ";

/// Separator written between an object key and its value
pub const KEY_SEPARATOR: &[u8] = b" --> ";

/// JSON formatter with a fixed indent and ` --> ` between keys and values.
///
/// Entries are still separated by `,` and a newline.
pub struct ArrowFormatter {
    inner: PrettyFormatter<'static>,
}

impl ArrowFormatter {
    pub fn new() -> Self {
        Self {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Default for ArrowFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for ArrowFormatter {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(KEY_SEPARATOR)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

/// Render any serializable tree as indented text with keys sorted
pub fn render_pretty<T: Serialize + ?Sized>(tree: &T) -> Result<String, OutputError> {
    // Going through `Value` sorts the keys
    let value = serde_json::to_value(tree)?;

    let mut serializer = serde_json::Serializer::with_formatter(Vec::new(), ArrowFormatter::new());
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(serializer.into_inner())?)
}

/// Write a rendering to a file, creating parent directories if needed
pub fn write_rendering(content: &str, output_path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(output_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}
