use ndarray::array;
use vicar::prelude::*;
use vicar::{write_banner, write_banner_with, Formatter, Tabular, ValueKeySplit};

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn key_over_value_with_descriptions() {
    let nx = Field::new("nx", 151).describe("points");

    let mut out = Vec::new();
    let mut fmt = KV2Formatter::new(&mut out);
    fmt += &nx;
    fmt.write().unwrap();

    assert_eq!(text(out), "nx(points)      \n151             \n");
}

#[test]
fn value_key_split_line() {
    let npoint = Field::new("nPoint", 12);
    let nelem = Field::new("nElem", 6);
    let nseg = Field::new("nSeg", 1);

    let mut out = Vec::new();
    let mut fmt = KV1Formatter::new(&mut out);
    fmt.verbose = Verbose::NONE;
    fmt += vec![&npoint, &nelem, &nseg];
    fmt.write().unwrap();

    let expected = format!(
        "{:<56}{:<8}{:<8}{:<8}\n",
        "12      6       1", "nPoint", "nElem", "nSeg"
    );
    assert_eq!(text(out), expected);
}

#[test]
fn split_marker_is_written() {
    let ncsp = Field::new("ncsp", 2);
    let layout = ValueKeySplit {
        split_text: "!".to_string(),
        ..Default::default()
    };

    let mut out = Vec::new();
    let mut fmt = Formatter::with_layout(&mut out, layout);
    fmt += &ncsp;
    fmt.write().unwrap();

    assert_eq!(text(out), format!("{:<40}{:<16}{:<8}\n", "2", "!", "ncsp"));
}

#[test]
fn tabular_blocks_between_banners() {
    let t_frame = Field::new("tFrame", array![[0.0], [0.25]]);
    let coeff = Field::new("coeff", array![[1.0, 2.0]]);

    let mut out = Vec::new();
    {
        let mut fmt = DatasetFormatter::with_layout(
            &mut out,
            Tabular {
                tab: 8,
                ..Default::default()
            },
        );

        fmt += &t_frame;
        fmt.write().unwrap();
        write_banner_with(fmt.writer(), " coeff ", 20, '-').unwrap();
        fmt += &coeff;
        fmt.write().unwrap();
    }

    let expected = [
        "0.0    ",
        "0.25   ",
        "",
        "------ coeff -------",
        "1.0     2.0    ",
        "",
    ];
    let text = text(out);
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn non_array_fields_cannot_be_tabulated() {
    let coeff = Field::new("coeff", array![[1.0]]);
    let nx = Field::new("nx", 3);

    let mut out = Vec::new();
    let mut fmt = DatasetFormatter::new(&mut out);
    fmt += vec![&coeff, &nx];

    assert!(matches!(fmt.write(), Err(vicar::Error::NotA { .. })));
}

#[test]
fn banner_is_centred() {
    let mut out = Vec::new();
    write_banner(&mut out, "Computational Domain Configuration (domain)").unwrap();
    let line = text(out);

    // 43 characters leave 18 on the left and 19 on the right
    assert_eq!(line.len(), 81);
    assert!(line.starts_with(&format!("{}C", "=".repeat(18))));
    assert!(line.ends_with(&format!("){}\n", "=".repeat(19))));
}
