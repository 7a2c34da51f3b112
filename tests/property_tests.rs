//! Property tests for the round components.

use blind_bidding::bidding::resolve_round;
use blind_bidding::cards::{build_deck, Card, CardCatalog, EffectKind};
use blind_bidding::core::{GameRng, PlayerMap};
use blind_bidding::effects::{apply_effect, EffectEvent};
use blind_bidding::validation::validate;
use blind_bidding::ResourceBounds;
use proptest::prelude::*;

/// Resources for 1-6 players named P0, P1, ...
fn resources_strategy() -> impl Strategy<Value = PlayerMap<i64>> {
    prop::collection::vec(-50i64..400, 1..=6).prop_map(|totals| {
        totals
            .into_iter()
            .enumerate()
            .map(|(i, total)| (format!("P{}", i), total))
            .collect()
    })
}

/// Resources plus a non-empty bid set over a subset of the players.
fn round_strategy() -> impl Strategy<Value = (PlayerMap<i64>, PlayerMap<i64>)> {
    resources_strategy().prop_flat_map(|resources| {
        let n = resources.len();
        (
            Just(resources),
            prop::collection::vec((any::<bool>(), 0i64..100), n),
            0..n,
        )
    })
    .prop_map(|(resources, choices, forced)| {
        let bids: PlayerMap<i64> = resources
            .names()
            .zip(choices)
            .enumerate()
            .filter(|(i, (_, (bids, _)))| *bids || *i == forced)
            .map(|(_, (name, (_, bid)))| (name.clone(), bid))
            .collect();
        (resources, bids)
    })
}

proptest! {
    #[test]
    fn winners_hold_the_max_bid((resources, bids) in round_strategy()) {
        let outcome = resolve_round(&resources, &bids).unwrap();
        let max = bids.values().copied().max().unwrap();

        prop_assert_eq!(outcome.winning_bid, max);
        prop_assert!(!outcome.winning_players.is_empty());
        for (player, &bid) in bids.iter() {
            prop_assert_eq!(outcome.is_winner(player.as_str()), bid == max);
        }
    }

    #[test]
    fn bid_deduction_conserves_resources((resources, bids) in round_strategy()) {
        let outcome = resolve_round(&resources, &bids).unwrap();

        let before: i64 = resources.values().sum();
        let after: i64 = outcome.updated_resources.values().sum();
        let paid = outcome.winning_bid * outcome.winning_players.len() as i64;

        prop_assert_eq!(before - paid, after);
        prop_assert_eq!(outcome.updated_resources.len(), resources.len());
        prop_assert!(outcome.updated_resources.names().eq(resources.names()));
    }

    #[test]
    fn steal_conserves_pair_totals(
        resources in resources_strategy(),
        amount in 0u32..50,
        seed in any::<u64>(),
    ) {
        let thief = resources.names().next().unwrap().clone();
        let card = Card::new("Steal", EffectKind::Steal, amount);

        let winners = [thief.clone()];
        let mut rng = GameRng::new(seed);
        let applied = apply_effect(&resources, Some(&card), &winners, &mut rng).unwrap();

        match &applied.events[..] {
            [EffectEvent::Stole { victim, amount: taken, .. }] => {
                let victim = victim.as_str();
                prop_assert!(resources[victim] > 0);
                prop_assert_eq!(*taken, i64::from(amount).min(resources[victim]));
                prop_assert_eq!(
                    resources[thief.as_str()] + resources[victim],
                    applied.resources[thief.as_str()] + applied.resources[victim]
                );
            }
            [EffectEvent::NothingToSteal { .. }] => {
                prop_assert!(resources.iter().all(|(p, &v)| *p == thief || v <= 0));
                prop_assert_eq!(&applied.resources, &resources);
            }
            other => prop_assert!(false, "unexpected events {:?}", other),
        }

        let before: i64 = resources.values().sum();
        let after: i64 = applied.resources.values().sum();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn deck_size_matches_catalog(quantities in prop::collection::vec(0u32..20, 0..8)) {
        let catalog = quantities.iter().enumerate().fold(CardCatalog::new(), |catalog, (i, &q)| {
            catalog.with_entry(format!("Type {}", i), q, EffectKind::Gain, 1)
        });

        let deck = build_deck(&catalog).unwrap();
        prop_assert_eq!(deck.len(), quantities.iter().map(|&q| q as usize).sum::<usize>());
    }

    #[test]
    fn validator_is_pure(
        resources in resources_strategy(),
        min in -100i64..100,
        span in 0i64..400,
    ) {
        let bounds = ResourceBounds::new(min, min + span).unwrap();
        let snapshot = resources.clone();

        let first = validate(&resources, &bounds);
        let second = validate(&resources, &bounds);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&resources, &snapshot);
        for (player, status) in first.iter() {
            prop_assert_eq!(status.resources, resources[player.as_str()]);
        }
    }
}
