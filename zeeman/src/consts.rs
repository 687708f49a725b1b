pub struct Consts;

impl Consts {
    /// The Bohr magneton in J / T
    pub const BOHR_MAG: f64 = 9.274e-24;

    /// The Planck constant in J s
    pub const PLANCK: f64 = 6.626e-34;
}
