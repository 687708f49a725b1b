use atomic::problems_impl;
use fine_sweep::FineSweep;
use hydrogen_like::HydrogenLike;
use level_diagram::LevelDiagram;

mod fine_sweep;
mod hydrogen_like;
mod level_diagram;

pub struct Problems;

problems_impl!(Problems, "hyperfine Zeeman structure",
    "hydrogen-like spectrum" => |_| HydrogenLike::run(),
    "zero-field level diagram" => |_| LevelDiagram::run(),
    "fine field sweep" => |_| FineSweep::run()
);
