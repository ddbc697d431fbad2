//! Property-based tests for the escrow ledger.
//!
//! - Conservation: a campaign's `pledged_total` always equals the sum of
//!   the individual pledges recorded against it.
//! - Non-negativity: no pledge balance ever goes below zero.
//! - Single settlement: no campaign is paid out more than once, and only
//!   with the goal reached.

use chrono::{DateTime, Duration, TimeZone, Utc};
use crowdvault_shared::types::{CampaignId, PartyId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::campaign::CreateCampaignInput;
use crate::event::LedgerEvent;

use super::ledger::EscrowLedger;

const CAMPAIGNS: u64 = 3;
const PARTIES: usize = 4;

/// One step of a randomized ledger workload.
#[derive(Debug, Clone)]
enum Op {
    Pledge {
        campaign: u64,
        party: usize,
        amount: Decimal,
        minute: i64,
    },
    Withdraw {
        campaign: u64,
        party: usize,
        amount: Option<Decimal>,
        minute: i64,
    },
    Collect {
        campaign: u64,
        caller: usize,
        minute: i64,
    },
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Minutes past ledger start; deadlines sit at minute 60.
fn minute_strategy() -> impl Strategy<Value = i64> {
    0i64..180i64
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..CAMPAIGNS, 0..PARTIES, amount_strategy(), minute_strategy()).prop_map(
            |(campaign, party, amount, minute)| Op::Pledge {
                campaign,
                party,
                amount,
                minute,
            }
        ),
        (
            0..CAMPAIGNS,
            0..PARTIES,
            proptest::option::of(amount_strategy()),
            minute_strategy()
        )
            .prop_map(|(campaign, party, amount, minute)| Op::Withdraw {
                campaign,
                party,
                amount,
                minute,
            }),
        (0..CAMPAIGNS, 0..PARTIES, minute_strategy()).prop_map(
            |(campaign, caller, minute)| Op::Collect {
                campaign,
                caller,
                minute,
            }
        ),
    ]
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

fn at_minute(minute: i64) -> DateTime<Utc> {
    start() + Duration::minutes(minute)
}

/// Builds a ledger with `CAMPAIGNS` campaigns (goal 50, deadline at minute
/// 60) owned by the first parties, plus a pool of pledger identities.
fn seeded_ledger() -> (EscrowLedger, Vec<PartyId>) {
    let parties: Vec<PartyId> = (0..PARTIES).map(|_| PartyId::new()).collect();
    let mut ledger = EscrowLedger::new(PartyId::new());
    for owner_index in 0..CAMPAIGNS {
        ledger
            .create_campaign(
                CreateCampaignInput {
                    owner: parties[usize::try_from(owner_index).unwrap() % PARTIES],
                    title: format!("campaign {owner_index}"),
                    goal: Decimal::new(5_000, 2),
                    deadline: at_minute(60),
                },
                start(),
            )
            .unwrap();
    }
    (ledger, parties)
}

fn apply(ledger: &mut EscrowLedger, parties: &[PartyId], op: &Op) {
    match op {
        Op::Pledge {
            campaign,
            party,
            amount,
            minute,
        } => {
            let _ = ledger.pledge(
                CampaignId(*campaign),
                parties[*party],
                *amount,
                at_minute(*minute),
            );
        }
        Op::Withdraw {
            campaign,
            party,
            amount,
            minute,
        } => {
            let _ = ledger.withdraw_pledge(
                CampaignId(*campaign),
                parties[*party],
                *amount,
                at_minute(*minute),
            );
        }
        Op::Collect {
            campaign,
            caller,
            minute,
        } => {
            let _ = ledger.collect_pledges(
                CampaignId(*campaign),
                parties[*caller],
                at_minute(*minute),
            );
        }
    }
}

proptest! {
    /// Property: conservation holds for every campaign after any workload.
    #[test]
    fn prop_pledged_total_equals_pledge_sum(ops in proptest::collection::vec(op_strategy(), 1..80)) {
        let (mut ledger, parties) = seeded_ledger();

        for op in &ops {
            apply(&mut ledger, &parties, op);
            for campaign in ledger.registry().iter() {
                prop_assert_eq!(campaign.pledged_total, ledger.pledged_sum(campaign.id));
                prop_assert!(campaign.pledged_total >= Decimal::ZERO);
            }
        }
    }

    /// Property: every pledger balance stays non-negative.
    #[test]
    fn prop_pledge_balances_non_negative(ops in proptest::collection::vec(op_strategy(), 1..80)) {
        let (mut ledger, parties) = seeded_ledger();

        for op in &ops {
            apply(&mut ledger, &parties, op);
        }

        for campaign in ledger.registry().iter() {
            for party in &parties {
                prop_assert!(ledger.pledge_of(campaign.id, *party) >= Decimal::ZERO);
            }
        }
    }

    /// Property: at most one collection per campaign, and only with the
    /// goal reached at settlement time.
    #[test]
    fn prop_collection_happens_at_most_once(ops in proptest::collection::vec(op_strategy(), 1..120)) {
        let (mut ledger, parties) = seeded_ledger();

        for op in &ops {
            apply(&mut ledger, &parties, op);
        }

        for campaign in ledger.registry().iter() {
            let collections = ledger
                .events()
                .iter()
                .filter(|event| {
                    matches!(event, LedgerEvent::CollectedPledges { .. })
                        && event.campaign_id() == campaign.id
                })
                .count();
            prop_assert!(collections <= 1);
            prop_assert_eq!(collections == 1, campaign.collected);
            if campaign.collected {
                prop_assert!(campaign.pledged_total >= campaign.goal);
            }
        }
    }
}
