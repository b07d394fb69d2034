#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect and each forced codec must never panic
    let _ = imglib::decode(data, enough::Unstoppable);
    let _ = imglib::decode_bmp(data, enough::Unstoppable);
    let _ = imglib::decode_ppm(data, enough::Unstoppable);
    let _ = imglib::ImageInfo::from_bytes(data);
});
