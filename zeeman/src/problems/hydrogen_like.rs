use std::time::Instant;

use atomic::{
    units::energy_units::{Energy, MicroElectronVolt},
    utility::{linspace, save_data, save_serialize},
};
use hhmmss::Hhmmss;
use zeeman::{HifiZeemanProblemBuilder, ZeemanSpectrum};

pub struct HydrogenLike;

impl HydrogenLike {
    pub fn run() {
        let problem = HifiZeemanProblemBuilder::new(2, 1, 1)
            .with_hyperfine_coupling(Energy(1.0, MicroElectronVolt))
            .build()
            .expect("p state configuration is valid");

        let mag_fields = linspace(0., 2., 200);

        let start = Instant::now();
        let levels = problem.levels(&mag_fields);
        println!("calculated in {}", start.elapsed().hhmmssxxx());

        let header = levels.iter().fold("Magnetic field [T]".to_string(), |s, level| {
            s + &format!("\t{} [eV]", level.label())
        });
        let mut data = vec![mag_fields.clone()];
        data.extend(levels.iter().map(|level| level.energies.clone()));

        save_data("hydrogen_like_zeeman", &header, &data).expect("error while saving results");

        let spectrum = ZeemanSpectrum { mag_fields, levels };
        save_serialize("hydrogen_like_zeeman", &spectrum).expect("error while saving results");
    }
}
