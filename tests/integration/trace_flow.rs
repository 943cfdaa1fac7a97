use namefp::engine::fingerprint::compute_fingerprint;
use namefp::engine::fingerprint::trace::trace_fingerprint;

#[test]
fn trace_records_one_hash_step_per_byte_and_one_mix_step_per_value() {
    let trace = trace_fingerprint(b"Mississippi");

    assert_eq!(trace.hash_steps.len(), 11);
    let values: Vec<(u8, u32)> = trace
        .mix_steps
        .iter()
        .map(|step| (step.value, step.count))
        .collect();
    assert_eq!(values, vec![(b'M', 1), (b'i', 4), (b'p', 2), (b's', 4)]);
    assert_eq!(trace.fingerprint, compute_fingerprint(b"Mississippi"));
}

#[test]
fn mix_steps_xor_contributions_into_hash() {
    let trace = trace_fingerprint(b"John");
    let mut expected = trace.fingerprint.hash;
    for step in &trace.mix_steps {
        assert_eq!(step.before, expected);
        assert_eq!(step.contribution, step.count * u32::from(step.value));
        expected ^= step.contribution;
        assert_eq!(step.after, expected);
    }
    assert_eq!(expected, 2_089_257_399);
}
