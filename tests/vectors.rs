use md5_block::{compute, compute_hex, pad, Digest};

#[test]
fn published_vectors() {
    assert_eq!(compute_hex(b"").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(
        compute_hex("The quick brown fox jumps over the lazy dog").unwrap(),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
    assert_eq!(
        compute_hex("The quick brown fox jumps over the lazy dog.").unwrap(),
        "e4d909c290d0fb1ca068ffaddf22cbd0"
    );
}

#[test]
fn sample_sentences() {
    let samples = [
        (
            "The quick brown fox jumps over the lazy dog once again.",
            "7c356cd6473710f55baf0b16d68487f1",
        ),
        (
            "A group of birds flew over the mountain during the sunset.",
            "9e12deffc80a48e89fd942556c061918",
        ),
        (
            "In the quiet evening, the city lights began to flicker one by one.",
            "670186aaf7018557d9f1048c32a46c02",
        ),
    ];
    for (input, output) in samples {
        assert_eq!(compute_hex(input).unwrap(), output, "{:?}", input);
    }
}

#[test]
fn block_boundaries() {
    let cases = [
        (55, 64, "c9ea3314b91c9fd4e38f9432064fd1f2"),
        (56, 128, "e3c4dd21a9171fd39d208efa09bf7883"),
        (64, 128, "3b5d3c7d207e37dceeedd301e35e2e58"),
        (1000, 1024, "ede3d3b685b4e137ba4cb2521329a75e"),
    ];
    for (len, padded, output) in cases {
        let data = vec![0u8; len];
        assert_eq!(pad(&data).unwrap().len(), padded, "{} bytes", len);
        assert_eq!(compute_hex(&data).unwrap(), output, "{} bytes", len);
    }
}

#[test]
fn embedded_zero() {
    let whole = compute(b"abc\x00def").unwrap();
    let prefix = compute(b"abc").unwrap();
    assert_eq!(format!("{:x}", whole), "a5e4d5963ae44c1f4bfb37b1a3d55a3c");
    assert_eq!(format!("{:x}", prefix), "900150983cd24fb0d6963f7d28e17f72");
    assert_ne!(whole, prefix);
    assert_eq!(
        compute_hex(b"a\x00b").unwrap(),
        "70350f6027bce3713f6b76473084309b"
    );
}

#[test]
fn raw_bytes() {
    let digest: [u8; 16] = compute(b"abc").unwrap().into();
    assert_eq!(
        digest,
        [
            0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0, 0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1,
            0x7f, 0x72
        ]
    );
    assert_eq!(Digest(digest), compute("abc").unwrap());
}
