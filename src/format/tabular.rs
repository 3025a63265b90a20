use super::Layout;
use crate::array::DatasetElement;
use crate::prelude::*;

/// Every row of a dataset on its own line, columns `tab` characters wide.
///
/// Integer tables are written without a decimal point. Point fields are written as a
/// single row of three columns. Any other non-array field is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tabular {
    pub tab: usize,
    /// empty lines written after every field
    pub blank_lines: usize,
    /// prefix every row with its solver index
    pub print_index: bool,
}

impl Default for Tabular {
    fn default() -> Self {
        Self {
            tab: 24,
            blank_lines: 1,
            print_index: false,
        }
    }
}

impl Tabular {
    fn write_dataset<W: Write, T: DatasetElement>(
        &self,
        writer: &mut W,
        data: &Dataset2D<T>,
    ) -> Result<(), Error> {
        let width = self.tab.saturating_sub(1);

        for (index, row) in data.indexed_rows() {
            let mut columns = Vec::with_capacity(row.len() + 1);
            if self.print_index {
                columns.push(format!("{index:<width$}"));
            }
            for value in row.iter() {
                columns.push(format!("{:<width$}", value.render()));
            }
            writeln!(writer, "{}", columns.join(" "))?;
        }

        Ok(())
    }
}

impl Layout for Tabular {
    fn render<W: Write>(
        &self,
        writer: &mut W,
        fields: &[&Field],
        _verbose: Verbose,
    ) -> Result<(), Error> {
        for field in fields {
            match field.value() {
                Value::Dataset2D(data) => self.write_dataset(writer, data)?,
                Value::IntDataset2D(data) => self.write_dataset(writer, data)?,
                Value::Point3D(point) => self.write_dataset(writer, &point.to_dataset())?,
                _ => {
                    return Err(Error::NotA {
                        key: field.key().to_string(),
                        expected: ValueType::Dataset2D,
                        value: field.to_string(),
                    })
                }
            }

            for _ in 0..self.blank_lines {
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}
