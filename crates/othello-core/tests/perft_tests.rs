use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    assert_eq!(perft_root(5), 1_396);
    assert_eq!(perft_root(6), 8_200);
    assert_eq!(perft_root(7), 55_092);
    assert_eq!(perft_root(8), 390_216);
}
