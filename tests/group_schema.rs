#[cfg(feature = "derive")]
mod inner {
    use vicar::prelude::*;
    use vicar::tree::collect_fields;
    use vicar::Error;

    #[derive(vicar::Group, Debug, Clone)]
    struct Body {
        nbody: Field,
        #[group(rename = "bodyDensity")]
        density: Field,
    }

    impl Default for Body {
        fn default() -> Self {
            Self {
                nbody: Field::new("nbody", 0),
                density: Field::new("bodyDensity", 1.0),
            }
        }
    }

    #[derive(vicar::Group, Debug)]
    #[group(rename_all = "camelCase")]
    struct Probe {
        n_probe: Field,
        positions: List<Field, ValueType>,
        bodies: Dict<Body>,
        restart: Optional<Body>,
        #[group(skip)]
        #[allow(dead_code)]
        scratch: usize,
    }

    fn probe() -> Probe {
        Probe {
            n_probe: Field::new("nProbe", 0),
            positions: List::with_check(ValueType::Point3D),
            bodies: Dict::new(),
            restart: Optional::new("restart", Body::default()),
            scratch: 0,
        }
    }

    #[test]
    fn schema_is_fixed() {
        let mut probe = probe();
        assert_eq!(
            probe.keys(),
            &["nProbe", "positions", "bodies", "restart"][..]
        );

        probe.set("nProbe", 2).unwrap();
        assert_eq!(probe.n_probe.as_i64().unwrap(), 2);

        assert!(matches!(probe.set("nprobe", 2), Err(Error::UnknownName(_))));
        assert!(matches!(probe.set("scratch", 2), Err(Error::UnknownName(_))));
        assert!(matches!(probe.set("bodies", 2), Err(Error::NotSettable(_))));
    }

    #[test]
    fn unknown_names_list_the_schema() {
        let mut body = Body::default();
        let message = body.set("density", 2.0).unwrap_err().to_string();
        assert!(message.contains("`density`"));
        assert!(message.contains("nbody, bodyDensity"));
    }

    #[test]
    fn set_children_skips_foreign_names() {
        let mut body = Body::default();
        body.set_children([("bodyDensity", 2.5), ("viscosity", 0.1)])
            .unwrap();
        assert_eq!(body.density.as_f64().unwrap(), 2.5);
    }

    #[test]
    fn checked_list_elements() {
        let mut probe = probe();
        probe
            .positions
            .append(Field::new("p1", Point3D::new(0.0, 1.0, 2.0)))
            .unwrap();

        let err = probe.positions.append(Field::new("p2", 1.0)).unwrap_err();
        assert!(matches!(err, Error::Element(_)));
        assert!(err.to_string().contains("Point3D field"));
        assert_eq!(probe.positions.len(), 1);
    }

    #[test]
    fn dict_names_are_unique() {
        let mut probe = probe();
        probe.bodies.add_new("cylinder", |_| Body::default()).unwrap();

        let err = probe.bodies.add_new("cylinder", |_| Body::default()).unwrap_err();
        assert!(matches!(err, Error::KeyExists(_)));

        let existing = probe
            .bodies
            .get_or_create("cylinder", |_| Body::default())
            .unwrap();
        existing.set("nbody", 3).unwrap();
        assert_eq!(probe.bodies["cylinder"].nbody.as_i64().unwrap(), 3);
    }

    #[test]
    fn tree_paths() {
        let mut probe = probe();
        probe
            .positions
            .append(Field::new("p1", Point3D::new(0.0, 1.0, 2.0)))
            .unwrap();
        probe.bodies.add_new("wing", |_| Body::default()).unwrap();

        let paths: Vec<String> = collect_fields(&probe)
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "nProbe",
                "positions.1",
                "bodies.wing.nbody",
                "bodies.wing.bodyDensity"
            ]
        );

        // switching the optional node on exposes its fields
        probe.restart.enable();
        assert_eq!(collect_fields(&probe).len(), 6);
    }

    #[test]
    fn disabled_nodes_are_unreachable() {
        let mut probe = probe();
        assert!(matches!(probe.restart.get(), Err(Error::Inactive(_))));

        probe.restart.activate().set("nbody", 1).unwrap();
        assert_eq!(probe.restart.get().unwrap().nbody.as_i64().unwrap(), 1);

        probe.restart.disable();
        assert!(probe.restart.get_mut().is_err());
    }

    #[derive(vicar::Group)]
    #[group(rename_all = "camelCase")]
    struct Bodies {
        n_body: Field,
        bodies: List<Field>,
    }

    #[test]
    fn factory_bodies_written_as_one_record() {
        let mut group = Bodies {
            n_body: Field::new("nBody", 0),
            bodies: List::new(),
        };
        group
            .bodies
            .append_new(2, |i| Field::new(format!("body{i}"), 0))
            .unwrap();
        let nbody = group.bodies.len();
        group.set("nBody", nbody).unwrap();

        let mut out = Vec::new();
        let mut fmt = KV2Formatter::new(&mut out);
        fmt.extend(&group.bodies);
        fmt.write().unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "body1   body2   \n0       0       \n");
        assert_eq!(group.n_body.as_i64().unwrap(), 2);
    }
}
