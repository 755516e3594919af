#![no_main]
use fotogalerie::patch::{insert_fragment, AnchorPattern, Fragment};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let pattern = AnchorPattern::kontakt().unwrap();
    let fragment = Fragment::fotogalerie();

    let first = insert_fragment(data, &pattern, &fragment);
    if !first.changed {
        assert_eq!(first.text, data);
        return;
    }
    // A second pass must never insert the entry again
    let second = insert_fragment(&first.text, &pattern, &fragment);
    assert!(!second.changed);
});
