//! Known-Answer Test Vectors
//!
//! Verifies both batch drivers against digests computed independently with
//! a reference implementation (`tests/test_vectors.json`).

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    hash: String,
    input: String,
    name: String,
}

#[derive(Deserialize)]
struct TestVectors {
    sha256_52b: Vec<Vector>,
    blake2s_64b: Vec<Vector>,
}

fn load_vectors() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).expect("Failed to parse JSON")
}

#[test]
fn test_sha256_52b_vectors() {
    let data = load_vectors();

    for vector in data.sha256_52b {
        let message = hex::decode(&vector.input).unwrap();
        assert_eq!(message.len(), 52, "bad vector input length: {}", vector.name);

        // Replicate the 52-byte message across all 8 lanes of one group.
        let mut records = [0u8; 8 * 64];
        for lane in 0..8 {
            records[lane * 64..lane * 64 + 52].copy_from_slice(&message);
        }

        let mut digests = [0u8; 8 * 32];
        octolane::compress_52b(&records, &mut digests);

        for lane in 0..8 {
            let hex_hash = hex::encode(&digests[lane * 32..(lane + 1) * 32]);
            assert_eq!(
                hex_hash, vector.hash,
                "Vector mismatched: {} lane {lane}",
                vector.name
            );
        }
    }
}

#[test]
fn test_blake2s_64b_vectors() {
    let data = load_vectors();

    for vector in data.blake2s_64b {
        let record = hex::decode(&vector.input).unwrap();
        assert_eq!(record.len(), 64, "bad vector input length: {}", vector.name);

        let mut digest = [0u8; 32];
        octolane::blake2s_batch_64b(&record, &mut digest, 1);

        assert_eq!(
            hex::encode(digest),
            vector.hash,
            "Vector mismatched: {}",
            vector.name
        );
    }
}

#[test]
fn test_vectors_pass_constant_time_verify() {
    let data = load_vectors();

    for vector in data.sha256_52b {
        let message = hex::decode(&vector.input).unwrap();
        let mut records = [0u8; 8 * 64];
        records[..52].copy_from_slice(&message);

        let mut digests = [0u8; 8 * 32];
        octolane::compress_52b(&records, &mut digests);

        let mut computed = [0u8; 32];
        computed.copy_from_slice(&digests[..32]);
        let mut expected = [0u8; 32];
        hex::decode_to_slice(&vector.hash, &mut expected).unwrap();

        assert!(octolane::verify_digest(&computed, &expected));
        expected[0] ^= 1;
        assert!(!octolane::verify_digest(&computed, &expected));
    }
}
