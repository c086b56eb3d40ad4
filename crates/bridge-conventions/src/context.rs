use bridge_core::{Auction, Hand, HandEvaluation, Position};

/// Everything a condition may look at: one seat's hand, the auction so far,
/// and the precomputed evaluation of the hand.
#[derive(Debug, Clone)]
pub struct BiddingContext {
    pub hand: Hand,
    pub auction: Auction,
    pub seat: Position,
    pub evaluation: HandEvaluation,
}

impl BiddingContext {
    /// Context for the seat due to call next in `auction`.
    pub fn new(hand: Hand, auction: Auction) -> Self {
        let seat = auction.current_player();
        let evaluation = hand.evaluate();
        Self {
            hand,
            auction,
            seat,
            evaluation,
        }
    }

    pub fn with_evaluation(
        hand: Hand,
        auction: Auction,
        seat: Position,
        evaluation: HandEvaluation,
    ) -> Self {
        Self {
            hand,
            auction,
            seat,
            evaluation,
        }
    }

    /// A context with no cards, used when reasoning about someone else's
    /// call: only the auction is real.
    pub fn probe(auction: Auction, seat: Position) -> Self {
        Self {
            hand: Hand::default(),
            auction,
            seat,
            evaluation: HandEvaluation::default(),
        }
    }

    pub fn partner(&self) -> Position {
        self.seat.partner()
    }
}
