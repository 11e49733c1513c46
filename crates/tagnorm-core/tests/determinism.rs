use std::thread;

use tagnorm_core::{normalize_tag, Normalizer};

#[test]
fn same_input_same_output() {
    let inputs = ["web 01", "_need-to__be_normalized-", "a._.b", ""];
    for s in inputs {
        assert_eq!(normalize_tag(s), normalize_tag(s));
    }
}

#[test]
fn concurrent_callers_agree() {
    let n = Normalizer::corrected();
    let expected = n.normalize("svc (prod) / eu-west-1");
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || n.normalize("svc (prod) / eu-west-1")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
    assert_eq!(expected, "svc_prod_/_eu-west-1");
}
