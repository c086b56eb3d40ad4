use crate::condition::{
    and, any_suit_min, auction_matches, hcp_min, opponents_silent, partner_opened,
    seat_has_not_acted, suit_min,
};
use crate::registry::Convention;
use crate::tree::RuleNode;
use bridge_core::{Call, Strain, Suit};

pub const STAYMAN_ID: &str = "stayman";

/// 2♣ over partner's 1NT asks for a four-card major. Opener shows hearts
/// first, then spades, and bids 2♦ with neither.
pub fn stayman() -> Convention {
    let one_nt = Call::bid(1, Strain::NoTrump);
    let two_clubs = Call::bid(2, Strain::Clubs);

    let responder = RuleNode::decision(
        "uncontested",
        and(vec![opponents_silent(), seat_has_not_acted()]),
        RuleNode::decision(
            "invitational-values",
            hcp_min(8),
            RuleNode::decision(
                "four-card-major",
                any_suit_min(&[Suit::Hearts, Suit::Spades], 4),
                RuleNode::bid("stayman", two_clubs)
                    .with_meaning("Asks opener for a four-card major"),
                RuleNode::fallback(),
            ),
            RuleNode::fallback(),
        ),
        RuleNode::fallback(),
    );

    let opener = RuleNode::decision(
        "asked-for-majors",
        auction_matches(&[one_nt, Call::Pass, two_clubs, Call::Pass]),
        RuleNode::decision(
            "four-hearts",
            suit_min(Suit::Hearts, 4),
            RuleNode::bid("show-hearts", Call::bid(2, Strain::Hearts))
                .with_meaning("Four or more hearts"),
            RuleNode::decision(
                "four-spades",
                suit_min(Suit::Spades, 4),
                RuleNode::bid("show-spades", Call::bid(2, Strain::Spades))
                    .with_meaning("Four or more spades, fewer than four hearts"),
                RuleNode::bid("deny-majors", Call::bid(2, Strain::Diamonds))
                    .with_meaning("No four-card major"),
            ),
        ),
        RuleNode::fallback(),
    );

    let tree = RuleNode::decision("partner-opened-1nt", partner_opened(one_nt), responder, opener);
    Convention::new(STAYMAN_ID, "Stayman", tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BiddingContext;
    use crate::tree::{evaluate_tree, find_siblings, flatten_tree};
    use bridge_core::{Auction, Hand, Position};

    fn bid_for(hand: &str, dealer: Position, calls: &str) -> Option<Call> {
        let convention = stayman();
        let ctx = BiddingContext::new(
            Hand::parse(hand).unwrap(),
            Auction::parse(dealer, calls).unwrap(),
        );
        evaluate_tree(&convention.tree, &ctx)
            .matched_call(&ctx)
            .map(|call| call.unwrap())
    }

    #[test]
    fn test_responder_asks_with_values_and_a_major() {
        // 10 HCP, four spades
        assert_eq!(
            bid_for("AK2.QJ3.T98.7654", Position::North, "1N P"),
            Some(Call::bid(2, Strain::Clubs))
        );
        // Passed-out dealer seat in front of the 1NT opener.
        assert_eq!(
            bid_for("AK2.QJ3.T98.7654", Position::West, "P 1N P"),
            Some(Call::bid(2, Strain::Clubs))
        );
    }

    #[test]
    fn test_responder_declines() {
        // 4 HCP
        assert_eq!(bid_for("432.J32.T98.K654", Position::North, "1N P"), None);
        // No four-card major
        assert_eq!(bid_for("AK32.QJ32.T98.76", Position::North, "1N P"), None);
        // Interference
        assert_eq!(bid_for("AK2.QJ3.T98.7654", Position::North, "1N 2H"), None);
    }

    #[test]
    fn test_opener_answers() {
        let answer = |hand| bid_for(hand, Position::North, "1N P 2C P");
        assert_eq!(answer("AK2.KJ3.AQ98.Q54"), Some(Call::bid(2, Strain::Hearts)));
        assert_eq!(answer("AK2.KJ3.Q98.AQ54"), Some(Call::bid(2, Strain::Spades)));
        assert_eq!(answer("AK32.KJ3.Q98.AQ5"), Some(Call::bid(2, Strain::Diamonds)));
    }

    #[test]
    fn test_every_path_is_auction_first() {
        let convention = stayman();
        let rules = flatten_tree(&convention.tree);
        assert_eq!(rules.len(), 4);
        for rule in &rules {
            assert!(!rule.auction_conditions.is_empty());
            assert!(!rule.hand_conditions.is_empty());
        }
    }

    #[test]
    fn test_opener_siblings() {
        let convention = stayman();
        let ctx = BiddingContext::new(
            Hand::parse("AK2.KJ3.Q98.AQ54").unwrap(),
            Auction::parse(Position::North, "1N P 2C P").unwrap(),
        );
        let result = evaluate_tree(&convention.tree, &ctx);
        let siblings = find_siblings(&convention.tree, result.matched.unwrap(), &ctx).unwrap();
        let calls: Vec<Call> = siblings.iter().map(|s| s.call).collect();
        assert_eq!(
            calls,
            vec![Call::bid(2, Strain::Hearts), Call::bid(2, Strain::Diamonds)]
        );
    }
}
