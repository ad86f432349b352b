use quickcheck::{Arbitrary, Gen};

mod weighted;

/// An enum for the various kinds of "things" to do to
/// a weighted tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert a payload under the weight
    Insert(i16, u8),
    /// Remove the weight from the tree
    Remove(i16),
    /// Drop everything and start over
    Clear,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2]).unwrap() {
            0 => Op::Insert(i16::arbitrary(g), u8::arbitrary(g)),
            1 => Op::Remove(i16::arbitrary(g)),
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
