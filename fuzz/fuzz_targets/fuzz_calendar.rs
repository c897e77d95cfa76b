#![no_main]
use booking_calendar::fuzzing::{run_fuzz_calendar, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_calendar(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
