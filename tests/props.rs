//! Property tests for card parsing, scoring and whole-game invariants.

use std::collections::HashSet;

use cribbage::{
    Card, Deck, Game, GameOptions, GameState, Hand, HandScore, PlayRound, Player, Progress,
    RandomSelector, Seat, Suit, score_hand,
};
use proptest::prelude::*;

fn full_deck() -> Vec<Card> {
    Deck::new().cards().to_vec()
}

/// Five distinct cards: four held and the cut, in random order.
fn five_cards() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(full_deck(), 5).prop_shuffle()
}

fn subsets(cards: &[Card]) -> impl Iterator<Item = Vec<Card>> + '_ {
    (1u32..(1 << cards.len())).map(move |mask| {
        cards
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, card)| *card)
            .collect()
    })
}

fn is_run(cards: &[Card]) -> bool {
    let mut ranks: Vec<u8> = cards.iter().map(|card| card.rank).collect();
    ranks.sort_unstable();
    ranks.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Scores by brute force over every subset, one category at a time.
fn brute_force(held: &[Card], cut: Card, is_crib: bool) -> HandScore {
    let mut all = held.to_vec();
    all.push(cut);

    let fifteens = subsets(&all)
        .filter(|subset| subset.iter().map(|card| u16::from(card.value())).sum::<u16>() == 15)
        .count() as u16
        * 2;

    let pairs = subsets(&all)
        .filter(|subset| subset.len() == 2 && subset[0].rank == subset[1].rank)
        .count() as u16
        * 2;

    let longest = subsets(&all)
        .filter(|subset| subset.len() >= 3 && is_run(subset))
        .map(|subset| subset.len())
        .max()
        .unwrap_or(0);
    let runs = subsets(&all)
        .filter(|subset| subset.len() == longest && longest >= 3 && is_run(subset))
        .count() as u16
        * longest as u16;

    let held_suited = held.iter().all(|card| card.suit == held[0].suit);
    let flush = match (held_suited, cut.suit == held[0].suit, is_crib) {
        (true, true, _) => 5,
        (true, false, false) => 4,
        _ => 0,
    };

    let nobs = u16::from(
        held.iter()
            .any(|card| card.rank == Card::JACK && card.suit == cut.suit),
    );

    HandScore {
        fifteens,
        pairs,
        runs,
        flush,
        nobs,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rendering a parsed spec gives back the canonical upper-case spec.
    #[test]
    fn prop_spec_round_trip(rank in 1u8..=13, suit in 0usize..4, lower in any::<bool>()) {
        let card = Card::new(Suit::ALL[suit], rank);
        let spec = card.to_string();
        let typed = if lower { spec.to_lowercase() } else { spec.clone() };

        let parsed = Card::from_spec(&typed).unwrap();
        prop_assert_eq!(parsed, card);
        prop_assert_eq!(parsed.to_string(), spec);
    }

    /// Every scoring category matches an independent brute-force count.
    #[test]
    fn prop_hand_score_matches_brute_force(cards in five_cards(), is_crib in any::<bool>()) {
        let (held, cut) = (&cards[..4], cards[4]);
        let score = score_hand(held, Some(cut), is_crib);
        let expected = brute_force(held, cut, is_crib);

        prop_assert_eq!(score, expected);
        prop_assert_eq!(
            score.total(),
            expected.fifteens + expected.pairs + expected.runs + expected.flush + expected.nobs
        );
    }

    /// The order of the held cards never matters.
    #[test]
    fn prop_hand_score_ignores_order(cards in five_cards(), rotate in 0usize..4) {
        let mut held = cards[..4].to_vec();
        let cut = cards[4];
        let before = score_hand(&held, Some(cut), false);
        held.rotate_left(rotate);
        held.reverse();
        prop_assert_eq!(score_hand(&held, Some(cut), false), before);
    }

    /// A crib never scores more than the same cards as a hand.
    #[test]
    fn prop_crib_never_beats_hand(cards in five_cards()) {
        let (held, cut) = (&cards[..4], cards[4]);
        prop_assert!(score_hand(held, Some(cut), true).total() <= score_hand(held, Some(cut), false).total());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Cards are never duplicated across deck, hands, crib and cut, and the
    /// play never passes 31.
    #[test]
    fn prop_hand_keeps_cards_unique(seed in any::<u64>(), one in any::<u64>(), two in any::<u64>()) {
        let mut game = Game::with_players(
            GameOptions::default(),
            seed,
            Player::new("North").with_selector(RandomSelector::new(one)),
            Player::new("South").with_selector(RandomSelector::new(two)),
        );

        game.deal().unwrap();
        game.form_crib().unwrap();
        prop_assert_eq!(game.cut().unwrap(), Progress::Continue);

        let mut seen: Vec<Card> = game.deck.cards().to_vec();
        for seat in Seat::ALL {
            prop_assert_eq!(game.player(seat).hand().len(), 4);
            seen.extend(game.player(seat).hand().iter());
        }
        prop_assert_eq!(game.crib().len(), 4);
        seen.extend(game.crib().iter());
        seen.extend(game.cut_card());

        let unique: HashSet<Card> = seen.iter().copied().collect();
        prop_assert_eq!(unique.len(), 52);
        prop_assert_eq!(seen.len(), 52);

        prop_assert_eq!(game.play_phase().unwrap(), Progress::Continue);
        prop_assert!(game.round().count() <= 31);

        let played: HashSet<Card> = game.round().all_cards().iter().copied().collect();
        prop_assert_eq!(played.len(), 8);
        for seat in Seat::ALL {
            for card in game.player(seat).hand() {
                prop_assert!(played.contains(card));
            }
            prop_assert!(!game.player(seat).has_unplayed_cards());
        }
    }

    /// Laying cards one at a time never takes the count past 31, and a card
    /// that does not fit is refused without touching the round.
    #[test]
    fn prop_count_never_passes_thirty_one(
        deck in Just(full_deck()).prop_shuffle(),
        one in any::<u64>(),
        two in any::<u64>(),
    ) {
        let mut players = [
            Player::new("North").with_selector(RandomSelector::new(one)),
            Player::new("South").with_selector(RandomSelector::new(two)),
        ];
        for (index, player) in players.iter_mut().enumerate() {
            player.set_hand(Hand::from(deck[index * 4..index * 4 + 4].to_vec()));
            player.reset_eligible_play_cards();
        }

        let mut round = PlayRound::new();
        let mut seat = Seat::Two;
        while players.iter().any(Player::has_unplayed_cards) {
            let reset = match players[seat.index()].get_play_card(&round).unwrap() {
                Some(card) => {
                    prop_assert!(round.play(seat, card).is_some());
                    prop_assert!(round.count() <= 31);
                    round.count() == 31
                }
                None => players[seat.other().index()].said_go(),
            };
            if reset {
                round.reset_count();
                for player in &mut players {
                    player.clear_go();
                }
            }

            for player in &players {
                for card in player.remaining_play_cards() {
                    if !round.can_play(card) {
                        let mut refused = round.clone();
                        prop_assert!(refused.play(seat, *card).is_none());
                        prop_assert_eq!(&refused, &round);
                    }
                }
            }

            if !players[seat.other().index()].said_go() {
                seat = seat.other();
            }
        }

        prop_assert_eq!(round.all_cards().len(), 8);
    }

    /// A game always ends with exactly one player at or over the threshold.
    #[test]
    fn prop_game_ends_with_one_winner(seed in any::<u64>(), threshold in 31u16..=121) {
        let mut game = Game::with_players(
            GameOptions::default().with_win_threshold(threshold),
            seed,
            Player::new("North").with_selector(RandomSelector::new(seed ^ 1)),
            Player::new("South").with_selector(RandomSelector::new(seed ^ 2)),
        );

        let over = game.run().unwrap();
        prop_assert_eq!(game.state(), GameState::Finished);
        prop_assert!(game.player(over.winner).score() >= threshold);
        prop_assert!(game.player(over.winner.other()).score() < threshold);
    }
}
