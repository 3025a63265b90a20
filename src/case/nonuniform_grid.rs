use crate::prelude::*;

/// Node coordinates of one stretched axis, written one indexed row per node.
#[derive(Debug, Clone, vicar::Group)]
pub struct NonuniformGrid {
    pub nodes: Field,
}

impl Default for NonuniformGrid {
    fn default() -> Self {
        Self {
            nodes: Field::new("nodes", Dataset2D::empty(1)),
        }
    }
}

impl Writable for NonuniformGrid {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let mut fmt = DatasetFormatter::new(writer);
        fmt.layout_mut().print_index = true;
        fmt += &self.nodes;
        fmt.write()
    }
}

#[test]
fn nodes_are_indexed_from_one() {
    let mut grid = NonuniformGrid::default();
    grid.nodes.set(Segment::from(vec![0.0, 0.5, 1.25])).unwrap();

    let mut out = Vec::new();
    grid.write(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = format!(
        "{:<23} {:<23}\n{:<23} {:<23}\n{:<23} {:<23}\n\n",
        1, "0.0", 2, "0.5", 3, "1.25"
    );
    assert_eq!(text, expected);
}
