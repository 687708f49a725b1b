use std::time::Instant;

use atomic::{
    units::energy_units::{Energy, MicroElectronVolt},
    utility::linspace,
};
use hhmmss::Hhmmss;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;
use zeeman::{HifiZeemanProblemBuilder, utility::save_spectrum};

pub struct FineSweep;

impl FineSweep {
    pub fn run() {
        let problem = HifiZeemanProblemBuilder::new(2, 1, 1)
            .with_hyperfine_coupling(Energy(1.0, MicroElectronVolt))
            .build()
            .expect("p state configuration is valid");

        let mag_fields = linspace(0., 2., 20_000);

        let start = Instant::now();
        let values: Vec<Vec<f64>> = mag_fields
            .par_iter()
            .progress()
            .map(|&mag_field| problem.levels_at(mag_field))
            .collect();
        println!("calculated in {}", start.elapsed().hhmmssxxx());

        let header = "Magnetic field [T]\tSublevel energies [eV]";
        save_spectrum(header, "fine_sweep_zeeman", &mag_fields, &values)
            .expect("error while saving results");
    }
}
