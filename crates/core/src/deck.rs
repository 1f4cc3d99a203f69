use crate::{shuffled, Card, RngState};

const SUITS: [&str; 4] = ["♠", "♥", "♣", "♦"];
const RANKS: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// The built-in canonical deck: one of every rank in every suit.
pub fn standard52() -> Vec<Card> {
    let mut cards = Vec::with_capacity(SUITS.len() * RANKS.len());
    for suit in SUITS {
        for rank in RANKS {
            cards.push(Card::new(format!("{rank}{suit}")));
        }
    }
    cards
}

/// Result of drawing from the piles: the cards taken and whether the discard
/// pile had to be folded back in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draw {
    pub cards: Vec<Card>,
    pub reshuffled: bool,
}

/// Takes up to `count` cards from the head of `draw`, folding a shuffled
/// `discard` back into `draw` whenever it runs dry.
pub fn draw_cards(
    draw: &mut Vec<Card>,
    discard: &mut Vec<Card>,
    count: usize,
    rng: &mut RngState,
) -> Draw {
    let mut out = Draw {
        cards: Vec::with_capacity(count),
        reshuffled: false,
    };
    while out.cards.len() < count {
        if draw.is_empty() {
            if discard.is_empty() {
                break;
            }
            let folded = shuffled(discard, rng);
            discard.clear();
            draw.extend(folded);
            out.reshuffled = true;
        }
        let take = (count - out.cards.len()).min(draw.len());
        out.cards.extend(draw.drain(..take));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_unique_faces() {
        let deck = standard52();
        assert_eq!(deck.len(), 52);
        let mut labels: Vec<_> = deck.iter().map(Card::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 52);
        assert_eq!(deck[0], Card::from("A♠"));
    }

    #[test]
    fn draw_takes_from_head() {
        let mut rng = RngState::from_seed(3);
        let mut draw: Vec<Card> = ["a", "b", "c"].into_iter().map(Card::from).collect();
        let mut discard = Vec::new();
        let out = draw_cards(&mut draw, &mut discard, 2, &mut rng);
        assert_eq!(out.cards, vec![Card::from("a"), Card::from("b")]);
        assert!(!out.reshuffled);
        assert_eq!(draw, vec![Card::from("c")]);
    }

    #[test]
    fn draw_folds_discard_when_exhausted() {
        let mut rng = RngState::from_seed(3);
        let mut draw = vec![Card::from("a")];
        let mut discard: Vec<Card> = ["x", "y", "z"].into_iter().map(Card::from).collect();
        let out = draw_cards(&mut draw, &mut discard, 3, &mut rng);
        assert!(out.reshuffled);
        assert_eq!(out.cards.len(), 3);
        assert_eq!(out.cards[0], Card::from("a"));
        assert!(discard.is_empty());
        assert_eq!(draw.len(), 1);
    }

    #[test]
    fn draw_stops_when_both_piles_are_empty() {
        let mut rng = RngState::from_seed(3);
        let mut draw = vec![Card::from("a")];
        let mut discard = vec![Card::from("b")];
        let out = draw_cards(&mut draw, &mut discard, 5, &mut rng);
        assert_eq!(out.cards.len(), 2);
        assert!(draw.is_empty());
        assert!(discard.is_empty());
    }
}
