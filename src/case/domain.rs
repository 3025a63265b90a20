use crate::prelude::*;

fn grid_unif_map() -> SymbolMap {
    SymbolMap::from_pairs([("uniform", 1), ("nonuniform", 2)]).unwrap_or_default()
}

fn flow_type_map() -> SymbolMap {
    SymbolMap::from_pairs([("viscous", 1), ("potential", 2), ("motionCheck", 3)])
        .unwrap_or_default()
}

fn switch(key: &str, on: bool) -> Field {
    Field::new(key, on).with_map(SymbolMap::bool_to_int())
}

/// Computational domain section of the solver input: restart switches, dimensions,
/// point counts and extents of the three axes, and the initial flow state.
#[derive(Debug, Clone, vicar::Group)]
#[group(rename_all = "camelCase")]
pub struct Domain {
    pub i_restart: Field,
    pub i_acou: Field,
    pub nsa: Field,
    pub i_acou_rest: Field,
    pub i_flow: Field,
    pub user_wall_vel: Field,

    pub n_dim: Field,
    pub flow_type: Field,

    pub nx: Field,
    pub ny: Field,
    pub nz: Field,

    pub xgrid_unif: Field,
    pub xout: Field,
    pub ygrid_unif: Field,
    pub yout: Field,
    pub zgrid_unif: Field,
    pub zout: Field,

    pub uinit: Field,
    pub vinit: Field,
    pub winit: Field,
    pub perturbation: Field,
    pub fully_developed_profile: Field,
    #[group(rename = "ICIn")]
    pub ic_in: Field,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            i_restart: switch("iRestart", false),
            i_acou: switch("iAcou", false),
            nsa: Field::new("nsa", 4),
            i_acou_rest: switch("iAcouRest", false),
            i_flow: switch("iFlow", true),
            user_wall_vel: switch("userWallVel", false),

            n_dim: Field::new("nDim", 3),
            flow_type: Field::new("flowType", 1).with_map(flow_type_map()),

            nx: Field::new("nx", 151),
            ny: Field::new("ny", 101),
            nz: Field::new("nz", 51),

            xgrid_unif: Field::new("xgridUnif", "uniform").with_map(grid_unif_map()),
            xout: Field::new("xout", 15.0),
            ygrid_unif: Field::new("ygridUnif", "uniform").with_map(grid_unif_map()),
            yout: Field::new("yout", 10.0),
            zgrid_unif: Field::new("zgridUnif", "uniform").with_map(grid_unif_map()),
            zout: Field::new("zout", 5.0),

            uinit: Field::new("uinit", 0.0),
            vinit: Field::new("vinit", 0.0),
            winit: Field::new("winit", 0.0),
            perturbation: Field::new("perturbation", 0.0),
            fully_developed_profile: switch("fullyDevelopedProfile", false),
            ic_in: switch("ICIn", false),
        }
    }
}

impl Writable for Domain {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        let mut fmt = KV2Formatter::new(writer);

        fmt += vec![
            &self.i_restart,
            &self.i_acou,
            &self.nsa,
            &self.i_acou_rest,
            &self.i_flow,
            &self.user_wall_vel,
        ];
        fmt.write()?;

        fmt += vec![&self.n_dim, &self.flow_type];
        fmt.write()?;

        fmt += vec![&self.nx, &self.ny, &self.nz];
        fmt.write()?;

        fmt += vec![&self.xgrid_unif, &self.xout];
        fmt.write()?;

        fmt += vec![&self.ygrid_unif, &self.yout];
        fmt.write()?;

        fmt += vec![&self.zgrid_unif, &self.zout];
        fmt.write()?;

        fmt += vec![
            &self.uinit,
            &self.vinit,
            &self.winit,
            &self.perturbation,
            &self.fully_developed_profile,
            &self.ic_in,
        ];
        fmt.write()
    }
}
