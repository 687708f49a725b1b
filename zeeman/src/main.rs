use atomic::problem_selector::{ProblemSelector, get_args};
use problems::Problems;

pub mod problems;

fn main() {
    Problems::select(&mut get_args());
}
