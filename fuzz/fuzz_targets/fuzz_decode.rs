#![no_main]
use dynjson::{from_slice, DecodeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&flags, input)) = data.split_first() else {
        return;
    };
    let options = DecodeOptions {
        use_number: flags & 1 != 0,
        use_int64: flags & 2 != 0,
        disable_unicode_replacement: flags & 4 != 0,
    };

    match from_slice(input, options) {
        Ok(value) => {
            // Re-encoding a decoded tree must itself decode, except for
            // non-finite doubles, which have no JSON representation.
            let text = value.to_string();
            if !text.contains("inf") && !text.contains("NaN") {
                from_slice(text.as_bytes(), options).expect("re-encoded value failed to decode");
            }
        }
        Err(err) => {
            assert!(err.offset() <= input.len(), "error offset out of bounds");
        }
    }
});
