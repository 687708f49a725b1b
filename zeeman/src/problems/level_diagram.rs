use atomic::units::{
    Si,
    energy_units::{ElectronVolt, Energy, MicroElectronVolt},
};
use zeeman::{HifiZeemanProblemBuilder, consts::Consts};

pub struct LevelDiagram;

impl LevelDiagram {
    pub fn run() {
        let problem = HifiZeemanProblemBuilder::new(2, 1, 1)
            .with_hyperfine_coupling(Energy(1.0, MicroElectronVolt))
            .build()
            .expect("p state configuration is valid");

        println!("J\tg_J\tF\tm\tshift [eV]\tshift [MHz]");
        for sublevel in problem.sublevels() {
            let shift_ev = Energy(sublevel.hifi_shift, Si).to(ElectronVolt).value();
            let shift_mhz = sublevel.hifi_shift / Consts::PLANCK / 1e6;

            println!(
                "{}\t{:.4}\t{}\t{}\t{:.3e}\t{:.2}",
                sublevel.j, sublevel.g_j, sublevel.f, sublevel.m, shift_ev, shift_mhz
            );
        }
    }
}
