#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Exercise the lenient scalar deserializers directly, outside an envelope.
    let _ = serde_json::from_slice::<gamejolt_client::User>(data);
    let _ = serde_json::from_slice::<gamejolt_client::Trophy>(data);
    let _ = serde_json::from_slice::<gamejolt_client::ScoreEntry>(data);
    let _ = serde_json::from_slice::<gamejolt_client::ScoreTable>(data);
});
