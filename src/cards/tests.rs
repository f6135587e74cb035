use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::seq::SliceRandom;

const TRIALS: usize = 2048;

fn deck() -> Vec<Card> {
    Rank::all()
        .into_iter()
        .flat_map(|r| Suit::all().into_iter().map(move |s| Card::from((r, s))))
        .collect()
}

fn random_hand(rng: &mut SmallRng) -> Hand {
    let cards = deck()
        .choose_multiple(rng, Hand::SIZE)
        .copied()
        .collect::<Vec<Card>>();
    Hand::try_from(cards).unwrap()
}

#[test]
fn key_invariant_under_permutation() {
    let ref mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let hand = random_hand(rng);
        let mut cards = Vec::<Card>::from(hand);
        cards.shuffle(rng);
        let shuffled = Hand::try_from(cards).unwrap();
        assert_eq!(hand_rank(&hand), hand_rank(&shuffled), "{} vs {}", hand, shuffled);
        assert_eq!(card_ranks(&hand), card_ranks(&shuffled));
    }
}

#[test]
fn higher_category_always_wins() {
    let ref mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let a = hand_rank(&random_hand(rng));
        let b = hand_rank(&random_hand(rng));
        if a.category() > b.category() {
            assert!(a > b, "{} vs {}", a, b);
            assert!(a.key() > b.key());
        }
    }
}

#[test]
fn ranks_sorted_descending() {
    let ref mut rng = SmallRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let ranks = card_ranks(&random_hand(rng)).values();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
        assert!(ranks.iter().all(|r| (1..=14).contains(r)));
    }
}

#[test]
fn wheel_in_any_order_and_suits() {
    let ref mut rng = SmallRng::seed_from_u64(17);
    let faces = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
    for _ in 0..TRIALS {
        let mut cards = faces
            .iter()
            .map(|r| {
                let suit = *Suit::all().choose(rng).unwrap();
                Card::from((*r, suit))
            })
            .collect::<Vec<Card>>();
        cards.shuffle(rng);
        let hand = Hand::try_from(cards).unwrap();
        let expected = match hand.suited() {
            true => vec![8, 5],
            false => vec![4, 5],
        };
        assert_eq!(hand_rank(&hand).key(), expected, "{}", hand);
    }
}

#[test]
fn exactly_one_category_per_shape() {
    let ref mut rng = SmallRng::seed_from_u64(19);
    for _ in 0..TRIALS {
        let hand = random_hand(rng);
        let ranks = card_ranks(&hand);
        let strength = hand_rank(&hand);
        let expected = match (ranks.distinct(), strength.ranking()) {
            (5, Ranking::HighCard | Ranking::Straight(_) | Ranking::Flush | Ranking::StraightFlush(_)) => true,
            (4, Ranking::OnePair(_)) => true,
            (3, Ranking::TwoPair(..) | Ranking::ThreeOAK(_)) => true,
            (2, Ranking::FullHouse(..) | Ranking::FourOAK(_)) => true,
            _ => false,
        };
        assert!(expected, "{} classified as {}", hand, strength);
    }
}

#[test]
fn sort_is_stable_and_descending() {
    let ref mut rng = SmallRng::seed_from_u64(23);
    for _ in 0..TRIALS / 16 {
        let hands = (0..12).map(|_| random_hand(rng)).collect::<Vec<Hand>>();
        let sorted = sort_hands(&hands);
        let strengths = sorted.iter().map(hand_rank).collect::<Vec<_>>();
        assert!(strengths.windows(2).all(|w| w[0] >= w[1]));
        for w in sorted.windows(2) {
            if hand_rank(&w[0]) == hand_rank(&w[1]) {
                let i = hands.iter().position(|h| *h == w[0]).unwrap();
                let j = hands.iter().position(|h| *h == w[1]).unwrap();
                assert!(i < j);
            }
        }
        assert_eq!(winner(&hands), Ok(sorted[0]));
    }
}
