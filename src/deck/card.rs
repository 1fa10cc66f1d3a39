//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties of a single tarot card: its
//! canonical name, display name, and the asset paths the dashboard uses to
//! fetch the card image and meaning document. Identity is the canonical
//! name; everything else is presentation data.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Number of cards in a standard deck (22 major + 4 suits x 14 ranks).
pub const DECK_SIZE: usize = 78;

/// Major arcana canonical names, in traditional order (The Fool through
/// The World). Canonical names double as image/meaning file stems.
pub const MAJOR_NAMES: [&str; 22] = [
    "FOOL", "MAGICIAN", "HIGH_PRIESTESS", "EMPRESS",
    "EMPEROR", "HIEROPHANT", "LOVERS", "CHARIOT",
    "STRENGTH", "HERMIT", "WHEEL_OF_FORTUNE", "JUSTICE",
    "HANGED_MAN", "DEATH", "TEMPERANCE", "DEVIL",
    "TOWER", "STAR", "MOON", "SUN", "JUDGEMENT", "WORLD",
];

/// The two sub-divisions of a tarot deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arcana {
    /// The 22 symbolic trump cards.
    Major,
    /// The 56 suit-and-rank cards.
    Minor,
}

/// Minor arcana suits, in deck-construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Cups,
    Pentacles,
    Swords,
    Wands,
}

impl Suit {
    /// All suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Pentacles, Suit::Swords, Suit::Wands];

    /// Lowercase name used in asset paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Suit::Cups => "cups",
            Suit::Pentacles => "pentacles",
            Suit::Swords => "swords",
            Suit::Wands => "wands",
        }
    }

    /// Title-case name used in display names.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Pentacles => "Pentacles",
            Suit::Swords => "Swords",
            Suit::Wands => "Wands",
        }
    }
}

/// Minor arcana ranks, in deck-construction order (Ace through King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

impl Rank {
    /// All ranks, in deck-construction order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five,
        Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Ten,
        Rank::Page, Rank::Knight, Rank::Queen, Rank::King,
    ];

    /// Uppercase name used in canonical names and asset paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rank::Ace => "ACE",
            Rank::Two => "TWO",
            Rank::Three => "THREE",
            Rank::Four => "FOUR",
            Rank::Five => "FIVE",
            Rank::Six => "SIX",
            Rank::Seven => "SEVEN",
            Rank::Eight => "EIGHT",
            Rank::Nine => "NINE",
            Rank::Ten => "TEN",
            Rank::Page => "PAGE",
            Rank::Knight => "KNIGHT",
            Rank::Queen => "QUEEN",
            Rank::King => "KING",
        }
    }

    /// Title-case name used in display names.
    #[must_use]
    pub const fn display(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Page => "Page",
            Rank::Knight => "Knight",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }
}

/// A single immutable tarot card.
///
/// Serializes to the wire shape the dashboard consumes: the arcana kind
/// under the `type` key, `suit`/`rank` omitted for major arcana, and the
/// asset paths as dashboard-relative URLs.
///
/// ## Example
///
/// ```
/// use tarot_deck::deck::{Card, Rank, Suit};
///
/// let card = Card::minor(Suit::Swords, Rank::Ten);
/// assert_eq!(card.name, "TEN_OF_SWORDS");
/// assert_eq!(card.display_name, "Ten of Swords");
/// assert_eq!(card.image_path, "assets/images/minor/swords/TEN.png");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Arcana kind (serialized as `type`).
    #[serde(rename = "type")]
    pub arcana: Arcana,

    /// Canonical name, e.g. `HERMIT` or `TEN_OF_SWORDS`. Card identity.
    pub name: String,

    /// Human-readable name, e.g. `Ten of Swords`.
    pub display_name: String,

    /// Suit, present only for minor arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<Suit>,

    /// Rank, present only for minor arcana.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<Rank>,

    /// Dashboard-relative URL of the card image.
    pub image_path: String,

    /// Dashboard-relative URL of the meaning document.
    pub meaning_path: String,
}

impl Card {
    /// Build a major arcana card from its canonical name.
    #[must_use]
    pub fn major(name: &str) -> Self {
        Self {
            arcana: Arcana::Major,
            name: name.to_string(),
            display_name: title_case(name),
            suit: None,
            rank: None,
            image_path: format!("assets/images/major/{name}.png"),
            meaning_path: format!("assets/meanings/major/{name}.docx"),
        }
    }

    /// Build a minor arcana card from its suit and rank.
    #[must_use]
    pub fn minor(suit: Suit, rank: Rank) -> Self {
        Self {
            arcana: Arcana::Minor,
            name: format!("{}_OF_{}", rank.as_str(), suit.as_str().to_uppercase()),
            display_name: format!("{} of {}", rank.display(), suit.display()),
            suit: Some(suit),
            rank: Some(rank),
            image_path: format!("assets/images/minor/{}/{}.png", suit.as_str(), rank.as_str()),
            meaning_path: format!("assets/meanings/minor/{}/{}.docx", suit.as_str(), rank.as_str()),
        }
    }
}

// Identity is the canonical name only.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Build the standard 78-card deck: 22 major arcana in traditional order,
/// then the minor arcana suit by suit, Ace through King within each suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for name in MAJOR_NAMES {
        deck.push(Card::major(name));
    }

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::minor(suit, rank));
        }
    }

    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// `WHEEL_OF_FORTUNE` -> `Wheel Of Fortune`.
fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_composition() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let majors = deck.iter().filter(|c| c.arcana == Arcana::Major).count();
        let minors = deck.iter().filter(|c| c.arcana == Arcana::Minor).count();
        assert_eq!(majors, 22);
        assert_eq!(minors, 56);

        let names: HashSet<_> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), DECK_SIZE);
    }

    #[test]
    fn test_major_card_shape() {
        let hermit = Card::major("HERMIT");
        assert_eq!(hermit.display_name, "Hermit");
        assert_eq!(hermit.suit, None);
        assert_eq!(hermit.rank, None);
        assert_eq!(hermit.image_path, "assets/images/major/HERMIT.png");
        assert_eq!(hermit.meaning_path, "assets/meanings/major/HERMIT.docx");

        let wheel = Card::major("WHEEL_OF_FORTUNE");
        assert_eq!(wheel.display_name, "Wheel Of Fortune");
    }

    #[test]
    fn test_minor_card_shape() {
        let card = Card::minor(Suit::Pentacles, Rank::Knight);
        assert_eq!(card.name, "KNIGHT_OF_PENTACLES");
        assert_eq!(card.display_name, "Knight of Pentacles");
        assert_eq!(card.suit, Some(Suit::Pentacles));
        assert_eq!(card.rank, Some(Rank::Knight));
        assert_eq!(card.image_path, "assets/images/minor/pentacles/KNIGHT.png");
        assert_eq!(card.meaning_path, "assets/meanings/minor/pentacles/KNIGHT.docx");
    }

    #[test]
    fn test_identity_is_name() {
        let mut a = Card::major("FOOL");
        let b = Card::major("FOOL");
        a.image_path = "elsewhere.png".to_string();
        assert_eq!(a, b);
        assert_ne!(Card::major("FOOL"), Card::major("MOON"));
    }

    #[test]
    fn test_serde_wire_shape() {
        let major = serde_json::to_value(Card::major("STAR")).unwrap();
        assert_eq!(major["type"], "major");
        assert_eq!(major["name"], "STAR");
        assert!(major.get("suit").is_none());
        assert!(major.get("rank").is_none());

        let minor = serde_json::to_value(Card::minor(Suit::Cups, Rank::Ace)).unwrap();
        assert_eq!(minor["type"], "minor");
        assert_eq!(minor["suit"], "cups");
        assert_eq!(minor["rank"], "ACE");
    }

    #[test]
    fn test_composition_is_stable() {
        let first: Vec<_> = standard_deck().into_iter().map(|c| c.name).collect();
        let second: Vec<_> = standard_deck().into_iter().map(|c| c.name).collect();
        assert_eq!(first, second);
    }
}
