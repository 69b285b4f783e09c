use core::module_path;
use function_name::named;
use scheduler::ProcessSpec;

use super::run;

#[test]
#[named]
pub fn late_arrival() {
    let specs = [ProcessSpec::new(1, 3, 2)];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &specs,
    );
}

#[test]
#[named]
pub fn gap_between_processes() {
    let specs = [ProcessSpec::new(1, 0, 1), ProcessSpec::new(2, 4, 3)];

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &specs,
    );
}
