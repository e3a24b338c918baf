use huffman_codec::{
    HuffmanError, build_code_table, build_huffman_tree, build_tree, count_frequencies, decode,
    encode,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn round_trips_plain_text() {
    init_logs();
    let data = b"the quick brown fox jumps over the lazy dog";
    let tree = build_tree(data).unwrap();
    let table = build_code_table(&tree);

    let bits = encode(data, &table).unwrap();
    assert!(bits.len() < data.len() * 8);
    assert_eq!(decode(&bits, &tree).unwrap(), data);
}

#[test]
fn round_trips_every_byte_value() {
    init_logs();
    let data: Vec<u8> = (0u8..=255).cycle().take(4096).collect();
    let tree = build_tree(&data).unwrap();
    let table = build_code_table(&tree);

    let bits = encode(&data, &table).unwrap();
    assert_eq!(decode(&bits, &tree).unwrap(), data);
}

#[test]
fn skewed_distribution_compresses_below_fixed_width() {
    init_logs();
    let mut data = vec![b'a'; 1000];
    data.extend_from_slice(b"bbbbbccccdde");
    let tree = build_tree(&data).unwrap();
    let table = build_code_table(&tree);

    let bits = encode(&data, &table).unwrap();
    // Six distinct symbols would cost three bits each under a fixed-width
    // code; the skew toward 'a' should beat that comfortably.
    assert!(bits.len() < data.len() * 3);
    assert_eq!(decode(&bits, &tree).unwrap(), data);
}

// The encoder's tree is dropped before decoding; the decoder relies on the
// deterministic tie-break to rebuild the identical tree from the same
// frequency table.
#[test]
fn independent_decode_call_rebuilds_the_same_tree() {
    init_logs();
    let data = b"so much depends upon a red wheel barrow";
    let freq = count_frequencies(data);

    let bits = {
        let tree = build_huffman_tree(&freq).unwrap();
        let table = build_code_table(&tree);
        encode(data, &table).unwrap()
    };

    let tree = build_huffman_tree(&freq).unwrap();
    assert_eq!(decode(&bits, &tree).unwrap(), data);
}

#[test]
fn truncated_stream_surfaces_an_error_end_to_end() {
    init_logs();
    let data = b"abracadabra";
    let tree = build_tree(data).unwrap();
    let table = build_code_table(&tree);

    let mut bits = encode(data, &table).unwrap();
    // The final 'a' is a one-bit code, so cutting two bits lands inside the
    // preceding 'r' code.
    bits.truncate(bits.len() - 2);
    assert!(matches!(
        decode(&bits, &tree).unwrap_err(),
        HuffmanError::TruncatedInput { .. }
    ));
}
