//! Kani arbitrary implementations for super tic-tac-toe types.
//!
//! These implementations allow Kani to explore all possible values of our
//! types during model checking.

#[cfg(kani)]
use crate::{Move, Outcome, Player, Position, Square};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() {
            Player::X
        } else {
            Player::O
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: u8 = kani::any();
        kani::assume(index < 9);
        match Position::from_index(index as usize) {
            Some(position) => position,
            None => unreachable!(),
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Outcome {
    fn any() -> Self {
        let tag: u8 = kani::any();
        kani::assume(tag < 3);
        match tag {
            0 => Outcome::Open,
            1 => Outcome::Won(kani::any()),
            _ => Outcome::Tie,
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Move {
    fn any() -> Self {
        Move::new(kani::any(), kani::any(), kani::any())
    }
}
