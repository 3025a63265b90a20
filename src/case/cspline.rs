use crate::prelude::*;
use crate::{Formatter, Tabular, ValueKeySplit};

/// Cubic spline surface file: a surface count followed by every surface.
///
/// Surfaces are only created through [`CSpline::append_new`] and [`CSpline::reset_new`]
/// so that `ncsp` always matches the number of surfaces written.
///
/// ```
/// use vicar::case::CSpline;
///
/// let mut cspline = CSpline::default();
/// let surface = &mut cspline.append_new(1).unwrap()[0];
/// surface.n_point.set(4).unwrap();
///
/// assert_eq!(cspline.ncsp.as_i64().unwrap(), 1);
/// assert!(cspline.surfaces().append(Default::default()).is_err());
/// ```
#[derive(Debug, Clone, vicar::Group)]
pub struct CSpline {
    pub ncsp: Field,
    csps: List<Surface>,
}

impl Default for CSpline {
    fn default() -> Self {
        Self {
            ncsp: Field::new("ncsp", 0),
            csps: List::new().factory_only(),
        }
    }
}

impl CSpline {
    /// the surface list. It is factory only, direct insertion is rejected
    pub fn surfaces(&mut self) -> &mut List<Surface> {
        &mut self.csps
    }

    pub fn surface(&self, index: usize) -> Option<&Surface> {
        self.csps.get(index)
    }

    pub fn surface_mut(&mut self, index: usize) -> Option<&mut Surface> {
        self.csps.get_mut(index)
    }

    fn sync_count(&mut self) -> Result<(), Error> {
        self.ncsp.set(self.csps.len())
    }

    /// create `n` surfaces at the end and return them
    pub fn append_new(&mut self, n: usize) -> Result<&mut [Surface], Error> {
        let first = self.csps.len() + self.csps.start_index();
        self.csps.append_new(n, |_| Surface::default())?;
        self.sync_count()?;
        Ok(self.csps.slice_mut(first..))
    }

    /// replace every surface by `n` new ones
    pub fn reset_new(&mut self, n: usize) -> Result<(), Error> {
        self.csps.reset_new(n, |_| Surface::default())?;
        self.sync_count()
    }
}

impl Writable for CSpline {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        {
            let mut fmt = KV1Formatter::new(writer);
            fmt += &self.ncsp;
            fmt.write()?;
        }
        writeln!(writer)?;

        for surface in &self.csps {
            surface.write(writer)?;
            writeln!(writer)?;
        }

        Ok(())
    }
}

/// A single spline surface: a header of counts and flags, the time frames and the
/// spline coefficients.
#[derive(Debug, Clone, vicar::Group)]
#[group(rename_all = "camelCase")]
pub struct Surface {
    pub i_body: Field,
    pub n_point: Field,
    pub n_elem: Field,
    pub n_seg: Field,
    pub time: Field,
    pub periodic: Field,
    pub t_frame: Field,
    pub coeff: Field,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            i_body: Field::new("iBody", 0),
            n_point: Field::new("nPoint", 0),
            n_elem: Field::new("nElem", 0),
            n_seg: Field::new("nSeg", 0),
            time: Field::new("time", 0.0),
            periodic: Field::new("periodic", true).with_map(SymbolMap::bool_to_int()),
            t_frame: Field::new("tFrame", Dataset2D::empty(1)),
            coeff: Field::new("coeff", Dataset2D::empty(4)),
        }
    }
}

impl Writable for Surface {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let tabular = Tabular::default();

        {
            // header columns line up with the array columns below
            let header = ValueKeySplit {
                kv_tab: tabular.tab,
                ..Default::default()
            };
            let mut fmt = Formatter::with_layout(&mut *writer, header);

            fmt += &self.i_body;
            fmt.write()?;

            fmt += vec![&self.n_point, &self.n_elem, &self.n_seg];
            fmt.write()?;

            fmt += vec![&self.time, &self.periodic];
            fmt.write()?;
        }
        writeln!(writer)?;

        let mut fmt = Formatter::with_layout(&mut *writer, tabular);
        fmt += &self.t_frame;
        fmt.write()?;
        writeln!(fmt.writer())?;

        fmt += &self.coeff;
        fmt.write()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn count_follows_surfaces() {
        let mut cspline = CSpline::default();
        cspline.append_new(2).unwrap();
        assert_eq!(cspline.ncsp.as_i64().unwrap(), 2);

        cspline.reset_new(1).unwrap();
        assert_eq!(cspline.ncsp.as_i64().unwrap(), 1);
        assert!(cspline.surface(1).is_some());
        assert!(cspline.surface(2).is_none());
    }

    #[test]
    fn surface_layout() {
        let mut surface = Surface::default();
        surface.i_body.set(1).unwrap();
        surface.t_frame.set(array![[0.0], [0.5]]).unwrap();
        surface.coeff.set(array![[1.0, 2.0, 3.0, 4.0]]).unwrap();

        let mut out = Vec::new();
        surface.write(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // 24 wide values filled up to the next 8 tab, then an empty 16 wide split
        assert_eq!(lines[0], format!("{:<56}{:<24}", "1", "iBody"));
        let values = format!("{:<24}{:<24}{:<24}", "0", "0", "0");
        assert_eq!(
            lines[1],
            format!("{:<96}{:<24}{:<24}{:<24}", values, "nPoint", "nElem", "nSeg")
        );
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], format!("{:<23}", "0.0"));
        assert_eq!(lines[5], format!("{:<23}", "0.5"));
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "");
        assert_eq!(
            lines[8],
            format!("{:<23} {:<23} {:<23} {:<23}", "1.0", "2.0", "3.0", "4.0")
        );
        assert_eq!(lines.len(), 10);
    }
}
