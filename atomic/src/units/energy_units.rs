use super::{Si, Unit};

pub trait EnergyUnit: Unit {}

/// Struct for representing energy unit values
/// # Examples
/// ```
/// use atomic::units::energy_units::{Energy, ElectronVolt, Megahertz};
/// let energy_ev = Energy(1.0, ElectronVolt);
/// let energy_mhz = energy_ev.to(Megahertz);
/// let energy = energy_ev.to_si();
#[derive(Debug, Copy, Clone)]
pub struct Energy<U: EnergyUnit>(pub f64, pub U);

impl<U: EnergyUnit> Energy<U> {
    pub fn to_si(&self) -> f64 {
        self.1.to_si(self.0)
    }

    pub fn to<V: EnergyUnit>(&self, unit: V) -> Energy<V> {
        Energy(self.1.to_si(self.0) / unit.to_si(1.0), unit)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn unit(&self) -> U {
        self.1
    }
}

impl EnergyUnit for Si {}

#[derive(Copy, Clone)]
pub struct ElectronVolt;

impl Unit for ElectronVolt {
    const TO_SI_MUL: f64 = 1.602e-19;
}
impl EnergyUnit for ElectronVolt {}

#[derive(Copy, Clone)]
pub struct MicroElectronVolt;

impl Unit for MicroElectronVolt {
    const TO_SI_MUL: f64 = 1.602e-25;
}
impl EnergyUnit for MicroElectronVolt {}

/// Photon energy of a megahertz line, h times 1 MHz.
#[derive(Copy, Clone)]
pub struct Megahertz;

impl Unit for Megahertz {
    const TO_SI_MUL: f64 = 6.626e-28;
}
impl EnergyUnit for Megahertz {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_units() {
        let energy_ev = Energy(1.0, ElectronVolt);
        let energy_uev = energy_ev.to(MicroElectronVolt);
        assert_eq!(energy_ev.to_si(), energy_uev.to_si());
        assert!((energy_uev.value() - 1e6).abs() < 1e-6);

        let hifi = Energy(1.0, MicroElectronVolt);
        let line = hifi.to(Megahertz);
        assert!(line.value() > 241.0);
        assert!(line.value() < 242.0);
    }
}
