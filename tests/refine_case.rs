#[cfg(feature = "derive")]
mod inner {
    use approx::assert_relative_eq;
    use vicar::case::{grid_2d, grid_stats, refine_grid, uniform_grid_n, Axis, Case, RefineOptions};
    use vicar::prelude::*;
    use vicar::Error;

    #[test]
    fn refined_axis_matches_domain() {
        let mut case = Case::default();
        let options = RefineOptions::default();
        refine_grid(&mut case, "X".parse().unwrap(), [4.0, 6.0, 20.0], 0.1, &options).unwrap();

        let nodes = case.xgrid.get().unwrap().nodes.as_dataset().unwrap();
        assert_eq!(case.domain.xgrid_unif.as_i64().unwrap(), 2);
        assert_eq!(case.domain.nx.as_i64().unwrap() as usize, nodes.nrows());
        assert_relative_eq!(
            case.domain.xout.as_f64().unwrap(),
            nodes[(nodes.nrows(), 1)]
        );

        let stats = grid_stats(&case).unwrap();
        assert_eq!(stats.nodes[0], nodes.nrows());
        assert_eq!(stats.nodes[1], 101);
    }

    #[test]
    fn grid_file_rows() {
        let mut case = Case::default();
        let options = RefineOptions {
            resample: vicar::case::Resample::None,
            ..Default::default()
        };
        refine_grid(&mut case, Axis::Y, [1.0, 2.0, 5.0], 0.25, &options).unwrap();

        let mut out = Vec::new();
        case.write_grid(Axis::Y, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(rows.len() as i64, case.domain.ny.as_i64().unwrap());

        // index column, then the coordinate
        let first: Vec<&str> = rows[0].split_whitespace().collect();
        assert_eq!(first, vec!["1", "0.0"]);
        let last: Vec<&str> = rows[rows.len() - 1].split_whitespace().collect();
        assert_eq!(last, vec![rows.len().to_string().as_str(), "5.0"]);
    }

    #[test]
    fn input_file_reflects_domain_changes() {
        let mut case = Case::default();
        uniform_grid_n(&mut case, Axis::X, 30.0, 301).unwrap();
        grid_2d(&mut case, 0.1).unwrap();

        let mut out = Vec::new();
        case.write_input(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // banner, then key and value lines per record
        assert!(lines[0].starts_with('='));
        let counts: Vec<&str> = lines[6].split_whitespace().collect();
        assert_eq!(counts, vec!["301", "101", "3"]);
        let xaxis: Vec<&str> = lines[8].split_whitespace().collect();
        assert_eq!(xaxis, vec!["1", "30.0"]);
        let zaxis: Vec<&str> = lines[12].split_whitespace().collect();
        assert_eq!(zaxis, vec!["1", "0.2"]);
    }

    #[test]
    fn cspline_file() {
        let mut case = Case::default();
        let cspline = case.cspline.activate();
        cspline.append_new(2).unwrap();
        cspline
            .surface_mut(2)
            .unwrap()
            .set("nPoint", 4)
            .unwrap();

        let mut out = Vec::new();
        case.write_cspline(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let first: Vec<&str> = text.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(first, vec!["2", "ncsp"]);
        assert_eq!(text.matches("iBody").count(), 2);
        assert!(text.contains(&format!("{:<24}{:<24}", "4", "0")));
    }

    #[test]
    fn disabled_cspline_is_not_written() {
        let case = Case::default();
        let mut out = Vec::new();
        assert!(matches!(
            case.write_cspline(&mut out),
            Err(Error::Inactive(_))
        ));
    }
}
