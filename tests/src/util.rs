use subnetr_common::network::block::AddressBlock;

pub fn block(s: &str) -> AddressBlock {
    s.parse().unwrap()
}

pub fn cidrs(blocks: &[AddressBlock]) -> Vec<String> {
    blocks.iter().map(ToString::to_string).collect()
}

pub fn is_aligned(block: &AddressBlock) -> bool {
    let host_bits = (block.size() - 1) as u32;
    block.start() & host_bits == 0
}

/// Checks that `pieces` tile `parent` exactly: no gaps, no overlaps, nothing outside.
pub fn assert_exact_cover(parent: &AddressBlock, pieces: &[AddressBlock]) {
    let mut sorted: Vec<AddressBlock> = pieces.to_vec();
    sorted.sort();

    let mut next: u64 = u64::from(parent.start());
    for piece in &sorted {
        assert_eq!(
            u64::from(piece.start()),
            next,
            "gap or overlap before {piece} while covering {parent}"
        );
        next = u64::from(piece.end()) + 1;
    }
    assert_eq!(next, u64::from(parent.end()) + 1, "{parent} is not fully covered");
}
