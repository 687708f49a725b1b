use atomic::{
    spin::Spin,
    units::{
        Si,
        energy_units::{ElectronVolt, Energy, EnergyUnit},
    },
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::formulas::{hyperfine_energy, lande_g, zeeman_energy};

pub mod consts;
pub mod formulas;
pub mod utility;

/// Error of building an invalid level structure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelsError {
    /// The difference branch of coupling L and S vanishes.
    #[error("Landé g-factor is undefined for the J = 0 branch (L = {l}, S = {s})")]
    ZeroElectronicMomentum { l: f64, s: f64 },
}

/// Builder for the hyperfine Zeeman structure of a single atomic state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HifiZeemanProblemBuilder {
    pub l: Spin,
    pub s: Spin,
    pub i: Spin,
    pub a_hifi: Option<f64>,
}

impl HifiZeemanProblemBuilder {
    pub fn new(double_l: u32, double_s: u32, double_i: u32) -> Self {
        Self {
            l: Spin::new(double_l),
            s: Spin::new(double_s),
            i: Spin::new(double_i),
            a_hifi: None,
        }
    }

    pub fn with_hyperfine_coupling(mut self, a_hifi: Energy<impl EnergyUnit>) -> Self {
        self.a_hifi = Some(a_hifi.to_si());

        self
    }

    /// Validates the configuration, rejecting structures with a J = 0 branch.
    pub fn build(self) -> Result<HifiZeemanProblem, LevelsError> {
        let [_, j_diff] = self.l.couple(self.s);
        if j_diff.double() == 0 {
            return Err(LevelsError::ZeroElectronicMomentum {
                l: self.l.value(),
                s: self.s.value(),
            });
        }

        Ok(HifiZeemanProblem {
            l: self.l,
            s: self.s,
            i: self.i,
            a_hifi: self.a_hifi.unwrap_or(0.0),
        })
    }
}

/// A validated hyperfine Zeeman problem for a single atomic state.
///
/// Every sublevel energy is closed form in the field, so the level
/// structure is enumerated once and evaluated at any field value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HifiZeemanProblem {
    l: Spin,
    s: Spin,
    i: Spin,
    a_hifi: f64,
}

/// A single (F, m) sublevel with its field independent quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sublevel {
    pub j: f64,
    pub g_j: f64,
    pub f: f64,
    pub m: f64,
    /// Hyperfine shift in J.
    pub hifi_shift: f64,
}

impl Sublevel {
    /// Total energy at the field `mag_field` in T, in J.
    pub fn energy_at(&self, mag_field: f64) -> f64 {
        self.hifi_shift + zeeman_energy(self.g_j, self.m, mag_field)
    }
}

impl HifiZeemanProblem {
    /// Enumerates the coupled sublevels, the stretched branch of J first,
    /// then the stretched branch of F, then m ascending.
    ///
    /// Coinciding branches are enumerated separately.
    pub fn sublevels(&self) -> Vec<Sublevel> {
        let mut sublevels = Vec::new();

        for j in self.l.couple(self.s) {
            let g_j = lande_g(self.l.value(), self.s.value(), j.value());

            for f in j.couple(self.i) {
                let hifi_shift =
                    hyperfine_energy(f.value(), j.value(), self.i.value(), self.a_hifi);

                for m in f.projections() {
                    sublevels.push(Sublevel {
                        j: j.value(),
                        g_j,
                        f: f.value(),
                        m: m.value(),
                        hifi_shift,
                    });
                }
            }
        }

        sublevels
    }

    /// Energy curves of every sublevel over the field sweep in T,
    /// reported in eV.
    pub fn levels(&self, mag_fields: &[f64]) -> Vec<EnergyLevel> {
        self.sublevels()
            .into_iter()
            .map(|sublevel| {
                let energies = mag_fields
                    .iter()
                    .map(|&b| Energy(sublevel.energy_at(b), Si).to(ElectronVolt).value())
                    .collect();

                EnergyLevel {
                    f: sublevel.f,
                    m: sublevel.m,
                    energies,
                }
            })
            .collect()
    }

    /// Energies of every sublevel at a single field value in T, in eV,
    /// ordered as in [`Self::sublevels`].
    pub fn levels_at(&self, mag_field: f64) -> Vec<f64> {
        self.sublevels()
            .iter()
            .map(|sublevel| Energy(sublevel.energy_at(mag_field), Si).to(ElectronVolt).value())
            .collect()
    }
}

/// A labeled energy curve of a single (F, m) sublevel, in eV.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnergyLevel {
    pub f: f64,
    pub m: f64,
    pub energies: Vec<f64>,
}

impl EnergyLevel {
    /// Legend label of the curve.
    pub fn label(&self) -> String {
        format!("F={}, m={}", self.f, self.m)
    }
}

/// The full spectrum over a field sweep.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ZeemanSpectrum {
    pub mag_fields: Vec<f64>,
    pub levels: Vec<EnergyLevel>,
}

#[cfg(test)]
mod tests {
    use atomic::{
        units::energy_units::MicroElectronVolt,
        utility::linspace,
    };

    use super::*;

    fn hydrogen_like() -> HifiZeemanProblem {
        HifiZeemanProblemBuilder::new(2, 1, 1)
            .with_hyperfine_coupling(Energy(1.0, MicroElectronVolt))
            .build()
            .unwrap()
    }

    #[test]
    fn sublevel_count() {
        let sublevels = hydrogen_like().sublevels();

        // J = 3/2 gives F = 2, 1 and J = 1/2 gives F = 1, 0
        assert_eq!(sublevels.len(), (5 + 3) + (3 + 1));
    }

    #[test]
    fn enumeration_order() {
        let sublevels = hydrogen_like().sublevels();

        assert_eq!(sublevels[0].j, 1.5);
        assert_eq!(sublevels[0].f, 2.0);
        assert_eq!(sublevels[0].m, -2.0);
        assert_eq!(sublevels[4].m, 2.0);
        assert_eq!(sublevels[5].f, 1.0);

        let last = sublevels.last().unwrap();
        assert_eq!(last.j, 0.5);
        assert_eq!(last.f, 0.0);
        assert_eq!(last.m, 0.0);

        for window in sublevels.windows(2) {
            if window[0].j == window[1].j && window[0].f == window[1].f {
                assert!(window[0].m < window[1].m);
            }
        }
    }

    #[test]
    fn zero_field_is_hyperfine_shift() {
        let problem = hydrogen_like();

        for (sublevel, energy) in problem.sublevels().iter().zip(problem.levels_at(0.0)) {
            let shift_ev = Energy(sublevel.hifi_shift, Si).to(ElectronVolt).value();
            assert_eq!(energy, shift_ev);
        }
    }

    #[test]
    fn curves_align_with_sweep() {
        let problem = hydrogen_like();
        let mag_fields = [0.0, 1.0, 2.0];

        let levels = problem.levels(&mag_fields);
        for level in &levels {
            assert_eq!(level.energies.len(), mag_fields.len());
        }

        // the stretched sublevel shifts linearly with the field
        let stretched = &levels[4];
        assert_eq!(stretched.m, 2.0);
        let low = stretched.energies[1] - stretched.energies[0];
        let high = stretched.energies[2] - stretched.energies[1];
        assert!(low > 0.0);
        assert!((low - high).abs() < 1e-12);
    }

    #[test]
    fn empty_sweep() {
        let levels = hydrogen_like().levels(&[]);

        assert_eq!(levels.len(), 12);
        assert!(levels.iter().all(|level| level.energies.is_empty()));
    }

    #[test]
    fn deterministic_output() {
        let problem = hydrogen_like();
        let mag_fields = linspace(0.0, 2.0, 200);

        let first = problem.levels(&mag_fields);
        let second = problem.levels(&mag_fields);
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_vanishing_momentum() {
        let error = HifiZeemanProblemBuilder::new(1, 1, 1).build();
        assert_eq!(
            error,
            Err(LevelsError::ZeroElectronicMomentum { l: 0.5, s: 0.5 })
        );

        assert!(HifiZeemanProblemBuilder::new(2, 1, 1).build().is_ok());
    }
}
