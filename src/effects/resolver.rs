//! Effect resolution - applying a revealed card to the round's winners.
//!
//! The bid has already been deducted by bid resolution; nothing here
//! touches it. Effects are applied once per winner, in winner order, against
//! the running totals, so two steal winners in the same round see each
//! other's transfers.

use log::debug;
use serde::Serialize;

use super::event::EffectEvent;
use crate::cards::{Card, EffectKind};
use crate::core::{BiddingError, GameRng, PlayerMap, PlayerName, Result};

/// Resources after a card was applied, plus what happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EffectResult {
    /// Updated totals for every player.
    pub resources: PlayerMap<i64>,
    /// One event per winner, in application order. Empty when no card was revealed.
    pub events: Vec<EffectEvent>,
}

/// Apply a revealed card to the round's winners.
///
/// `card` is `None` when the deck was exhausted; resources pass through
/// unchanged. Steal targets are drawn uniformly from the other players with
/// resources above zero at the moment that winner resolves, using `rng`.
///
/// The input map is never mutated. Fails with `UnknownPlayer` if a winner is
/// missing from `resources`, before anything is applied, and with
/// `ResourceOverflow` if a total would leave the `i64` range.
///
/// ```
/// use blind_bidding::cards::{Card, EffectKind};
/// use blind_bidding::core::{GameRng, PlayerMap, PlayerName};
/// use blind_bidding::effects::apply_effect;
///
/// let resources: PlayerMap<i64> = [("A", 40), ("B", 60)].into_iter().collect();
/// let card = Card::new("Resource Gain", EffectKind::Gain, 10);
/// let winners = [PlayerName::new("A")];
///
/// let result = apply_effect(&resources, Some(&card), &winners, &mut GameRng::new(0)).unwrap();
/// assert_eq!(result.resources["A"], 50);
/// assert_eq!(result.resources["B"], 60);
/// ```
pub fn apply_effect(
    resources: &PlayerMap<i64>,
    card: Option<&Card>,
    winners: &[PlayerName],
    rng: &mut GameRng,
) -> Result<EffectResult> {
    if let Some(unknown) = winners.iter().find(|w| !resources.contains(w.as_str())) {
        return Err(BiddingError::UnknownPlayer(unknown.to_string()));
    }

    let mut updated = resources.clone();
    let mut events = Vec::new();

    let Some(card) = card else {
        return Ok(EffectResult {
            resources: updated,
            events,
        });
    };

    let amount = i64::from(card.amount);

    for winner in winners {
        let event = match card.effect {
            EffectKind::Gain => {
                adjust(&mut updated, winner, amount)?;
                EffectEvent::Gained {
                    player: winner.clone(),
                    amount,
                }
            }

            EffectKind::Lose => {
                adjust(&mut updated, winner, -amount)?;
                EffectEvent::Lost {
                    player: winner.clone(),
                    amount,
                }
            }

            EffectKind::Steal => steal(&mut updated, winner, amount, rng)?,

            EffectKind::None => EffectEvent::NoEffect {
                player: winner.clone(),
            },
        };

        debug!("{}: {}", card.card_type, event);
        events.push(event);
    }

    Ok(EffectResult {
        resources: updated,
        events,
    })
}

fn adjust(resources: &mut PlayerMap<i64>, player: &PlayerName, delta: i64) -> Result<()> {
    let total = &mut resources[player.as_str()];
    *total = total
        .checked_add(delta)
        .ok_or_else(|| BiddingError::ResourceOverflow(player.to_string()))?;
    Ok(())
}

/// Move up to `amount` from a random eligible victim to `thief`.
fn steal(
    resources: &mut PlayerMap<i64>,
    thief: &PlayerName,
    amount: i64,
    rng: &mut GameRng,
) -> Result<EffectEvent> {
    let candidates: Vec<PlayerName> = resources
        .iter()
        .filter(|&(player, &total)| player != thief && total > 0)
        .map(|(player, _)| player.clone())
        .collect();

    let Some(victim) = rng.choose(&candidates) else {
        return Ok(EffectEvent::NothingToSteal {
            player: thief.clone(),
        });
    };

    // Victim total is positive, so only the thief side can overflow
    let taken = amount.min(resources[victim.as_str()]);
    adjust(resources, thief, taken)?;
    resources[victim.as_str()] -= taken;

    Ok(EffectEvent::Stole {
        player: thief.clone(),
        victim: victim.clone(),
        amount: taken,
    })
}
