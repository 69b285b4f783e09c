use scheduler::{round_robin, InvalidInput, Pid, ProcessSpec};

#[test]
pub fn zero_quantum() {
    let specs = [ProcessSpec::new(1, 0, 5)];
    assert_eq!(round_robin(&specs, 0).err(), Some(InvalidInput::Quantum));
}

#[test]
pub fn zero_burst() {
    let specs = [ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 3, 0)];
    let error = round_robin(&specs, 2).err().unwrap();

    assert_eq!(error, InvalidInput::Burst { pid: Pid::new(2).unwrap() });
    assert_eq!(error.to_string(), "process 2: burst must be at least 1");
}

#[test]
pub fn duplicate_id() {
    let specs = [ProcessSpec::new(1, 0, 5), ProcessSpec::new(1, 3, 1)];
    assert_eq!(
        round_robin(&specs, 2).err(),
        Some(InvalidInput::DuplicateId {
            pid: Pid::new(1).unwrap()
        })
    );
}
