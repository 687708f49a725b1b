use std::{collections::VecDeque, panic};

/// Collects the command line arguments, skipping the program name.
pub fn get_args() -> VecDeque<String> {
    std::env::args().skip(1).collect()
}

/// Trait for selecting a problem to run from a numbered list.
pub trait ProblemSelector {
    /// Name of the problem set.
    const NAME: &'static str;

    /// All available problems to choose from.
    fn list() -> Vec<&'static str>;

    /// Runs the problem with the given number, consuming further arguments.
    fn methods(number: &str, args: &mut VecDeque<String>);

    /// Selects a problem from the arguments or from user input.
    /// Passing "-1" runs all problems in order.
    fn select(args: &mut VecDeque<String>) {
        let choice = match args.pop_front() {
            Some(arg) => arg,
            None => {
                println!();
                println!("{} problems, provide a problem number:", Self::NAME);
                println!("-1: run all problems");
                for (i, problem) in Self::list().iter().enumerate() {
                    println!("{}: {}", i, problem);
                }

                let mut input = String::new();
                std::io::stdin()
                    .read_line(&mut input)
                    .expect("could not read the problem number");

                input.trim().to_string()
            }
        };

        if choice == "-1" {
            run_all(&Self::list(), Self::methods);
        } else {
            Self::methods(&choice, args)
        }
    }
}

/// Runs every problem in order, isolating panics to the failing problem.
fn run_all(
    list: &[&'static str],
    methods: impl Fn(&str, &mut VecDeque<String>) + panic::RefUnwindSafe,
) {
    for i in 0..list.len() {
        let result = panic::catch_unwind(|| {
            let mut args = VecDeque::new();
            (methods)(&i.to_string(), &mut args)
        });

        if result.is_err() {
            println!("problem {} failed", i);
        }
    }
}

#[macro_export]
macro_rules! problems_impl {
    ($selector:ty, $name:expr, $($problem:expr => $method:expr),* $(,)?) => {
        impl $crate::problem_selector::ProblemSelector for $selector {
            const NAME: &'static str = $name;

            fn list() -> Vec<&'static str> {
                vec![$($problem),*]
            }

            #[allow(unused_assignments)]
            fn methods(number: &str, args: &mut std::collections::VecDeque<String>) {
                let names = Self::list();

                let mut i: usize = 0;
                $(
                    if i.to_string() == number {
                        println!("Chose problem: {}", names[i]);
                        $method(args);
                        return;
                    }

                    i += 1;
                )*

                panic!("no problem with number {number}");
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::problem_selector::{ProblemSelector, get_args};

    struct TestProblems;

    problems_impl!(TestProblems, "test",
        "first" => |_| println!("first"),
        "second" => |_| println!("second"),
        "with args" => |args| println!("{:?}", args)
    );

    #[test]
    fn problem_selector() {
        assert_eq!(TestProblems::list().len(), 3);
        TestProblems::methods("1", &mut get_args());
    }
}
