#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode to an envelope or a typed error, never panic.
    if let Ok(envelope) = gamejolt_client::envelope::decode(data) {
        let _ = envelope.first_user();
        let _ = envelope.list::<gamejolt_client::Trophy>("trophies");
        let _ = envelope.list::<gamejolt_client::ScoreEntry>("scores");
        let _ = envelope.list::<gamejolt_client::ScoreTable>("tables");
    }
});
