/// Width of a column holding `length` characters, aligned to the tab grid.
///
/// The result is always a multiple of `tab` and leaves at least `rear_blank` blank
/// characters behind the content. When `rear_blank` is zero and `length` already sits
/// on the grid a full extra tab is added, matching what the solver's own input
/// writers produce.
///
/// ```
/// assert_eq!(vicar::find_nearest_tab(3, 8, 1), 8);
/// assert_eq!(vicar::find_nearest_tab(7, 8, 1), 8);
/// assert_eq!(vicar::find_nearest_tab(8, 8, 1), 16);
/// assert_eq!(vicar::find_nearest_tab(32, 8, 0), 40);
/// ```
pub fn find_nearest_tab(length: usize, tab: usize, rear_blank: usize) -> usize {
    let tab = tab as isize;
    let modulo = length as isize % tab;

    // fill to the nearest tab, keeping `rear_blank` spare at the end
    let mut fill = tab - modulo - rear_blank as isize;
    while fill < 0 {
        fill += tab;
    }

    length + fill as usize + rear_blank
}

/// left align `text` in a column of `width` characters where the final character
/// is always a blank
pub(crate) fn pad_column(text: &str, width: usize) -> String {
    let inner = width.saturating_sub(1);
    format!("{:<inner$} ", text, inner = inner)
}

/// number of characters (not bytes) in a rendered string
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Render a float the way the solver's reference tooling does: shortest round-trip
/// digits, a trailing `.0` on integral values, and scientific notation with a signed
/// two digit exponent outside of `[1e-4, 1e16)`.
pub(crate) fn float_str(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    let scientific = magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude);

    if !scientific {
        let mut buffer = ryu::Buffer::new();
        let text = buffer.format_finite(value);
        // ryu only switches to exponents below 1e-5, which is already handled above
        return text.to_string();
    }

    // rust's `{:e}` gives the shortest round-trip mantissa, e.g. `1.5e-7`
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
