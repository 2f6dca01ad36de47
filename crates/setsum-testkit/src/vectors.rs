//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation of Setsum must produce identical digests for these
//! inputs. Element vectors list the inserted elements and the expected hex
//! digest; arithmetic vectors pin the column operations directly.

use serde::Serialize;
use setsum_core::{add_state, sub_state, Setsum, State};

/// A golden vector: insert `items` (and remove `removed`) into an empty setsum.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Elements inserted, in order. Each element is a list of pieces.
    #[serde(serialize_with = "serialize_pieces")]
    pub items: Vec<Vec<&'static [u8]>>,
    /// Elements removed after all insertions.
    #[serde(serialize_with = "serialize_pieces")]
    pub removed: Vec<Vec<&'static [u8]>>,
    /// Expected lowercase hex digest.
    pub expected_hex: &'static str,
}

fn serialize_pieces<S: serde::Serializer>(
    items: &[Vec<&'static [u8]>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let hexed: Vec<Vec<String>> = items
        .iter()
        .map(|pieces| pieces.iter().map(hex::encode).collect())
        .collect();
    hexed.serialize(serializer)
}

/// The seven values used throughout the tests, in their natural order.
pub const SEVEN_VALUES: [&str; 7] = [
    "this is the first value",
    "this is the second value",
    "this is the third value",
    "this is the fourth value",
    "this is the fifth value",
    "this is the sixth value",
    "this is the seventh value",
];

/// Digest of [`SEVEN_VALUES`] inserted in any order.
pub const SEVEN_VALUES_DIGEST: [u8; 32] = [
    197, 179, 253, 77, 1, 242, 184, 4, 15, 84, 171, 116, 18, 202, 83, 187, 252, 153, 14, 39, 42,
    64, 173, 209, 196, 206, 186, 107, 47, 228, 114, 213,
];

/// Hex form of [`SEVEN_VALUES_DIGEST`].
pub const SEVEN_VALUES_HEX: &str =
    "c5b3fd4d01f2b8040f54ab7412ca53bbfc990e272a40add1c4ceba6b2fe472d5";

fn single(items: &[&'static str]) -> Vec<Vec<&'static [u8]>> {
    items.iter().map(|&s| vec![s.as_bytes()]).collect()
}

fn pieces(pieces: &[&'static str]) -> Vec<&'static [u8]> {
    pieces.iter().map(|&s| s.as_bytes()).collect()
}

/// Get all golden element vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "empty",
            items: vec![],
            removed: vec![],
            expected_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        },
        GoldenVector {
            name: "empty_element",
            items: vec![pieces(&[""])],
            removed: vec![],
            // SHA3-256 of the empty string; every column is already below its prime.
            expected_hex: "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
        },
        GoldenVector {
            name: "hello",
            items: single(&["hello"]),
            removed: vec![],
            expected_hex: "3338be694f50c5f338814986cdf0686453a888b84f424d792af4b9202398f392",
        },
        GoldenVector {
            name: "hello_world",
            items: single(&["hello", "world"]),
            removed: vec![],
            expected_hex: "75436dcc6e8f928f6f96fdb15f41d7f7577df7ba22e450c2c42ee3453c645a45",
        },
        GoldenVector {
            name: "hello_twice",
            items: single(&["hello", "hello"]),
            removed: vec![],
            expected_hex: "66707cd3afa08ae7b102930c9ae1d1c8115111719e849af254e87341ff30e725",
        },
        GoldenVector {
            name: "remove_hello_from_empty",
            items: vec![],
            removed: single(&["hello"]),
            expected_hex: "c8c74196a0af3a0c877eb679d00e979b425777472abdb2863d0b46df24670c6d",
        },
        GoldenVector {
            name: "seven_values",
            items: single(&SEVEN_VALUES),
            removed: vec![],
            expected_hex: SEVEN_VALUES_HEX,
        },
        GoldenVector {
            name: "first_four_values",
            items: single(&SEVEN_VALUES[..4]),
            removed: vec![],
            expected_hex: "cb43f4b624a78a48101438d91cbc04dcfdb09dc019bdc089aa3ffe0f857209f1",
        },
        GoldenVector {
            name: "last_three_values",
            items: single(&SEVEN_VALUES[4..]),
            removed: vec![],
            expected_hex: "f56f0997cc4a2ebcbe3f739b930d4fdf94e870661183ec471a8fbc5bf17069e4",
        },
        GoldenVector {
            name: "vectored_first_value",
            items: vec![pieces(&["this is ", "the first", " value"])],
            removed: vec![],
            // Same as the single piece "this is the first value".
            expected_hex: "f1a18eae1704779c62f4ee9aa20dda11c645e7cb3a52eb4028b47f707c432088",
        },
        GoldenVector {
            name: "pieces_abc",
            items: vec![pieces(&["a", "b", "c"])],
            removed: vec![],
            expected_hex: "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
        },
        GoldenVector {
            name: "three_elements_abc",
            items: single(&["a", "b", "c"]),
            removed: vec![],
            expected_hex: "5b7c19efbdfa41abd8fc283c6a738ea2cc0b03d4e3287e5e5675c173163adb3d",
        },
        GoldenVector {
            name: "insert_all_remove_all",
            items: single(&SEVEN_VALUES),
            removed: single(&SEVEN_VALUES),
            expected_hex: "0000000000000000000000000000000000000000000000000000000000000000",
        },
    ]
}

/// Build the setsum a vector describes.
pub fn setsum_from_vector(vector: &GoldenVector) -> Setsum {
    let mut setsum = Setsum::default();
    for item in &vector.items {
        setsum.insert_vector(item);
    }
    for item in &vector.removed {
        setsum.remove_vector(item);
    }
    setsum
}

/// Check every vector. Returns `(name, matches, actual_hex)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = setsum_from_vector(v).hex_digest();
            let matches = actual == v.expected_hex;
            (v.name.to_string(), matches, actual)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic vectors
// ─────────────────────────────────────────────────────────────────────────────

/// Column pairs whose sums are exactly the primes; their sum is all zeros.
pub const ADD_EXACTLY_PRIMES: (State, State) = (
    [
        3146800025, 1792545563, 417324692, 3444237760, 2812742746, 1608771649, 1661742866,
        3220115897,
    ],
    [
        1148167266, 2502421716, 3877642539, 850729437, 1482224443, 2686195512, 2633224277,
        1074851214,
    ],
);

/// A descending input and its additive inverse.
pub const INVERT_DESCENDING: (State, State) = (
    [
        0xffffeeee, 0xddddcccc, 0xbbbbaaaa, 0x99998888, 0x77776666, 0x66665555, 0x44443333,
        0x22221111,
    ],
    [
        4365, 572666659, 1145328917, 1717991189, 2290653487, 2576984612, 3149646900, 3722309174,
    ],
);

/// Check the arithmetic vectors through the public combinators.
///
/// The inverse is observed as `0 - x`, which equals `invert(x)` whenever no
/// column of `x` is zero.
pub fn verify_arith_vectors() -> bool {
    let (lhs, rhs) = ADD_EXACTLY_PRIMES;
    let add_ok = add_state(&lhs, &rhs) == [0u32; 8];

    let (input, inverse) = INVERT_DESCENDING;
    let invert_ok = sub_state(&[0u32; 8], &input) == inverse;

    add_ok && invert_ok
}
