//! # Formatters
//!
//! Solver input files are column aligned plain text. A [`Formatter`] collects a line's
//! worth of [`Field`]s and renders them in one go through a [`Layout`]:
//!
//! * [`KeyOverValue`]: a line of keys above a line of values
//! * [`ValueKeySplit`]: values, a split marker, then keys, on a single line
//! * [`Tabular`]: one row per dataset row
//!
//! ```
//! use vicar::{Field, KV2Formatter, Verbose};
//!
//! let nx = Field::new("nx", 151);
//! let ny = Field::new("ny", 101);
//!
//! let mut out = Vec::new();
//! let mut fmt = KV2Formatter::new(&mut out);
//! fmt.verbose = Verbose::NONE;
//! fmt += vec![&nx, &ny];
//! fmt.write().unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text, "nx      ny      \n151     101     \n");
//! ```

mod key_over_value;
mod tabular;
mod value_key_split;

pub use key_over_value::KeyOverValue;
pub use tabular::Tabular;
pub use value_key_split::ValueKeySplit;

use crate::prelude::*;
use std::ops::AddAssign;

/// How a buffer of fields is laid out on the page.
pub trait Layout {
    fn render<W: Write>(&self, writer: &mut W, fields: &[&Field], verbose: Verbose)
        -> Result<(), Error>;
}

/// Buffers borrowed fields and renders them into a sink with layout `L`.
///
/// Rendering always empties the buffer, even when it fails halfway.
pub struct Formatter<'a, W, L> {
    writer: &'a mut W,
    buffer: Vec<&'a Field>,
    layout: L,
    /// how much every field prints about itself, [`Verbose::KEYALL`] by default
    pub verbose: Verbose,
}

pub type KV2Formatter<'a, W> = Formatter<'a, W, KeyOverValue>;
pub type KV1Formatter<'a, W> = Formatter<'a, W, ValueKeySplit>;
pub type DatasetFormatter<'a, W> = Formatter<'a, W, Tabular>;

impl<'a, W: Write, L: Layout + Default> Formatter<'a, W, L> {
    pub fn new(writer: &'a mut W) -> Self {
        Self::with_layout(writer, L::default())
    }
}

impl<'a, W: Write, L: Layout> Formatter<'a, W, L> {
    pub fn with_layout(writer: &'a mut W, layout: L) -> Self {
        Self {
            writer,
            buffer: Vec::new(),
            layout,
            verbose: Verbose::KEYALL,
        }
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn buffer(&self) -> &[&'a Field] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn push(&mut self, field: &'a Field) {
        self.buffer.push(field);
    }

    pub fn extend<I: IntoIterator<Item = &'a Field>>(&mut self, fields: I) {
        self.buffer.extend(fields);
    }

    /// render and clear the buffer
    pub fn write(&mut self) -> Result<(), Error> {
        let fields = std::mem::take(&mut self.buffer);
        self.layout.render(&mut *self.writer, &fields, self.verbose)
    }

    /// the sink, for writing anything in between formatted blocks
    pub fn writer(&mut self) -> &mut W {
        &mut *self.writer
    }
}

impl<'a, W, L> AddAssign<&'a Field> for Formatter<'a, W, L> {
    fn add_assign(&mut self, field: &'a Field) {
        self.buffer.push(field);
    }
}

impl<'a, W, L> AddAssign<Vec<&'a Field>> for Formatter<'a, W, L> {
    fn add_assign(&mut self, fields: Vec<&'a Field>) {
        self.buffer.extend(fields);
    }
}

/// Write `content` centred in a line of `=` that is 80 characters wide.
///
/// ```
/// let mut out = Vec::new();
/// vicar::write_banner(&mut out, " Domain ").unwrap();
/// let line = String::from_utf8(out).unwrap();
///
/// assert_eq!(line.len(), 81);
/// assert!(line.starts_with("====") && line.ends_with("====\n"));
/// ```
pub fn write_banner<W: Write>(writer: &mut W, content: &str) -> Result<(), Error> {
    write_banner_with(writer, content, 80, '=')
}

/// [`write_banner`] with a custom width and fill character. Content longer than the
/// line is written without fill.
pub fn write_banner_with<W: Write>(
    writer: &mut W,
    content: &str,
    length: usize,
    filler: char,
) -> Result<(), Error> {
    let fill = length.saturating_sub(utils::char_len(content));
    let left = fill / 2;
    let right = fill - left;

    let left: String = std::iter::repeat(filler).take(left).collect();
    let right: String = std::iter::repeat(filler).take(right).collect();

    writeln!(writer, "{left}{content}{right}")?;
    Ok(())
}
