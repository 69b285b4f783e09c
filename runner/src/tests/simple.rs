use core::module_path;
use function_name::named;
use scheduler::ProcessSpec;

use super::run;

#[test]
#[named]
pub fn single_process() {
    let specs = [ProcessSpec::new(1, 0, 5)];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &specs,
    );
}

#[test]
#[named]
pub fn two_processes() {
    let specs = [ProcessSpec::new(1, 0, 4), ProcessSpec::new(2, 0, 2)];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &specs,
    );
}

#[test]
#[named]
pub fn three_processes() {
    let specs = [
        ProcessSpec::new(1, 0, 5),
        ProcessSpec::new(2, 1, 3),
        ProcessSpec::new(3, 2, 1),
    ];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &specs,
    );
}
