use super::Layout;
use crate::prelude::*;
use crate::utils::{find_nearest_tab, pad_column};

/// Values first, then keys, on a single line separated by an optional split marker.
///
/// ```text
/// 1       12      6                       nPoint  nElem   nSeg
/// ```
///
/// The value section is filled up to at least `min_split` characters (aligned to
/// `lr_tab`) so that the keys of consecutive lines start in the same column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueKeySplit {
    /// column tab of every single key or value
    pub kv_tab: usize,
    /// tab the value section is filled up to
    pub lr_tab: usize,
    /// tab of the split marker
    pub split_tab: usize,
    /// minimum width of the value section
    pub min_split: usize,
    pub split_text: String,
}

impl Default for ValueKeySplit {
    fn default() -> Self {
        Self {
            kv_tab: 8,
            lr_tab: 8,
            split_tab: 16,
            min_split: 32,
            split_text: String::new(),
        }
    }
}

impl Layout for ValueKeySplit {
    fn render<W: Write>(
        &self,
        writer: &mut W,
        fields: &[&Field],
        verbose: Verbose,
    ) -> Result<(), Error> {
        let value_widths: Vec<usize> = fields
            .iter()
            .map(|field| find_nearest_tab(field.value_len(verbose), self.kv_tab, 1))
            .collect();
        let total: usize = value_widths.iter().sum();

        for (field, width) in fields.iter().zip(&value_widths) {
            write!(writer, "{}", pad_column(&field.value_str(verbose), *width))?;
        }

        let split = total.max(self.min_split);
        let fill = find_nearest_tab(split, self.lr_tab, 0) - total;
        write!(writer, "{:fill$}", "", fill = fill)?;

        let split_width = find_nearest_tab(utils::char_len(&self.split_text), self.split_tab, 1);
        write!(writer, "{}", pad_column(&self.split_text, split_width))?;

        for field in fields {
            let width = find_nearest_tab(field.key_len(verbose), self.kv_tab, 1);
            write!(writer, "{}", pad_column(&field.key_str(verbose), width))?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
