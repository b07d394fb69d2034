#![no_main]
use imglib::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must survive re-encoding in both formats
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(decoded) = decode_with_limits(data, &limits, enough::Unstoppable) else {
        return;
    };
    assert!(decoded.is_valid(), "decode succeeded with an empty image");

    for request in [EncodeRequest::bmp(), EncodeRequest::ppm()] {
        let reencoded = request
            .encode(&decoded, enough::Unstoppable)
            .expect("valid image failed to encode");
        let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
            panic!("re-encoded {:?} data failed to decode", request.format());
        };
        assert_eq!(decoded, decoded2, "roundtrip pixel mismatch");
    }
});
