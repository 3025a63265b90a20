use super::Layout;
use crate::prelude::*;
use crate::utils::{find_nearest_tab, pad_column};

/// A line of keys over a line of values, every column wide enough for both and aligned
/// to multiples of `tab`.
///
/// ```text
/// nx      ny      nz
/// 151     101     51
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOverValue {
    pub tab: usize,
}

impl Default for KeyOverValue {
    fn default() -> Self {
        Self { tab: 8 }
    }
}

impl Layout for KeyOverValue {
    fn render<W: Write>(
        &self,
        writer: &mut W,
        fields: &[&Field],
        verbose: Verbose,
    ) -> Result<(), Error> {
        let widths: Vec<usize> = fields
            .iter()
            .map(|field| find_nearest_tab(field.align_len(verbose), self.tab, 1))
            .collect();

        for (field, width) in fields.iter().zip(&widths) {
            write!(writer, "{}", pad_column(&field.key_str(verbose), *width))?;
        }
        writeln!(writer)?;

        for (field, width) in fields.iter().zip(&widths) {
            write!(writer, "{}", pad_column(&field.value_str(verbose), *width))?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
