use super::{Condition, ConditionCategory, ConditionRef};
use crate::context::BiddingContext;
use bridge_core::Call;
use std::sync::Arc;

fn render_calls(calls: &[Call]) -> String {
    if calls.is_empty() {
        return "(empty)".to_string();
    }
    calls
        .iter()
        .map(|c| c.render())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The auction so far is exactly this call sequence.
#[derive(Debug)]
pub struct AuctionMatches(pub Vec<Call>);
impl Condition for AuctionMatches {
    fn name(&self) -> String {
        format!("auction-{}", render_calls(&self.0).replace(' ', "-"))
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.auction.calls == self.0
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        format!(
            "auction is {} (need {})",
            render_calls(&ctx.auction.calls),
            render_calls(&self.0)
        )
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// Nobody has bid yet.
#[derive(Debug)]
pub struct NotOpened;
impl Condition for NotOpened {
    fn name(&self) -> String {
        "not-opened".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        !ctx.auction.is_open()
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        match ctx.auction.opening() {
            Some((pos, call)) => format!("{} opened {}", pos, call),
            None => "no opening bid yet".to_string(),
        }
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// The seat to act made the opening bid.
#[derive(Debug)]
pub struct IsOpener;
impl Condition for IsOpener {
    fn name(&self) -> String {
        "is-opener".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.auction.opener() == Some(ctx.seat)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        match ctx.auction.opener() {
            Some(pos) => format!("opener is {} (need {})", pos, ctx.seat),
            None => "no opening bid yet".to_string(),
        }
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// Partner made the opening bid, and it was this call.
#[derive(Debug)]
pub struct PartnerOpened(pub Call);
impl Condition for PartnerOpened {
    fn name(&self) -> String {
        format!("partner-opened-{}", self.0)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.auction.opening() == Some((ctx.partner(), self.0))
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        match ctx.auction.opening() {
            Some((pos, call)) => format!("{} opened {} (need partner {})", pos, call, self.0),
            None => format!("no opening bid yet (need partner {})", self.0),
        }
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// Neither opponent has made anything but a pass.
#[derive(Debug)]
pub struct OpponentsSilent;
impl Condition for OpponentsSilent {
    fn name(&self) -> String {
        "opponents-silent".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        !ctx
            .auction
            .partnership_has_acted(ctx.seat.partnership().opponent())
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        if self.test(ctx) {
            "opponents have only passed".to_string()
        } else {
            "opponents have interfered".to_string()
        }
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// The seat to act has made no call other than pass.
#[derive(Debug)]
pub struct SeatHasNotActed;
impl Condition for SeatHasNotActed {
    fn name(&self) -> String {
        "seat-has-not-acted".to_string()
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        !ctx.auction.player_has_acted(ctx.seat)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        let calls = ctx.auction.calls_by(ctx.seat);
        format!("{} has called {}", ctx.seat, render_calls(&calls))
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

/// Partner's most recent call was this one.
#[derive(Debug)]
pub struct PartnerLastCall(pub Call);
impl Condition for PartnerLastCall {
    fn name(&self) -> String {
        format!("partner-last-{}", self.0)
    }
    fn test(&self, ctx: &BiddingContext) -> bool {
        ctx.auction.calls_by(ctx.partner()).last() == Some(&self.0)
    }
    fn describe(&self, ctx: &BiddingContext) -> String {
        match ctx.auction.calls_by(ctx.partner()).last() {
            Some(call) => format!("partner last called {} (need {})", call, self.0),
            None => format!("partner has not called (need {})", self.0),
        }
    }
    fn category(&self) -> Option<ConditionCategory> {
        Some(ConditionCategory::Auction)
    }
}

pub fn auction_matches(calls: &[Call]) -> ConditionRef {
    Arc::new(AuctionMatches(calls.to_vec()))
}

pub fn not_opened() -> ConditionRef {
    Arc::new(NotOpened)
}

pub fn is_opener() -> ConditionRef {
    Arc::new(IsOpener)
}

pub fn partner_opened(call: Call) -> ConditionRef {
    Arc::new(PartnerOpened(call))
}

pub fn opponents_silent() -> ConditionRef {
    Arc::new(OpponentsSilent)
}

pub fn seat_has_not_acted() -> ConditionRef {
    Arc::new(SeatHasNotActed)
}

pub fn partner_last_call(call: Call) -> ConditionRef {
    Arc::new(PartnerLastCall(call))
}
