//! Stock cards: the default search template, mutation pool and a basic
//! Horde deck.

use super::definition::{Card, CardRef};

/// 1/1 creature used by the starter template.
#[must_use]
pub fn sample_creature() -> CardRef {
    Card::new("sample", "Sample Creature", 1)
        .with_types(["Creature"])
        .with_colors(["C"])
        .with_stats(1, 1)
        .into_ref()
}

#[must_use]
pub fn forest() -> CardRef {
    Card::new("forest", "Forest", 0)
        .with_types(["Basic", "Land"])
        .with_colors(["G"])
        .into_ref()
}

/// The Horde's 2/2 zombie.
#[must_use]
pub fn zombie_token() -> CardRef {
    Card::new("token", "Zombie Token", 0)
        .with_types(["Token", "Creature", "Zombie"])
        .with_stats(2, 2)
        .into_ref()
}

fn creature(id: &str, name: &str, cost: u32, power: u32, toughness: u32) -> CardRef {
    Card::new(id, name, cost)
        .with_types(["Creature"])
        .with_colors(["G"])
        .with_stats(power, toughness)
        .into_ref()
}

/// Four sample creatures and 56 Forests.
#[must_use]
pub fn starter_cards() -> Vec<CardRef> {
    let mut cards = vec![sample_creature(); 4];
    cards.extend(vec![forest(); 56]);
    cards
}

/// Cards the search may swap into a deck.
#[must_use]
pub fn default_pool() -> Vec<CardRef> {
    vec![
        forest(),
        sample_creature(),
        creature("grizzly_bears", "Grizzly Bears", 2, 2, 2),
        creature("elvish_warrior", "Elvish Warrior", 2, 2, 3),
        creature("hill_giant", "Hill Giant", 4, 3, 3),
        creature("craw_wurm", "Craw Wurm", 6, 6, 4),
        Card::new("giant_growth", "Giant Growth", 1)
            .with_types(["Instant"])
            .with_colors(["G"])
            .with_text("Target creature gets +3/+3 until end of turn.")
            .into_ref(),
    ]
}

/// A forty-card zombie Horde: mostly tokens, broken up by a few real cards.
#[must_use]
pub fn basic_horde() -> Vec<CardRef> {
    let token = zombie_token();
    let corpse = Card::new("walking_corpse", "Walking Corpse", 2)
        .with_types(["Creature", "Zombie"])
        .with_colors(["B"])
        .with_stats(2, 2)
        .into_ref();
    let brute = Card::new("ghoul_brute", "Ghoul Brute", 4)
        .with_types(["Creature", "Zombie"])
        .with_colors(["B"])
        .with_stats(3, 3)
        .into_ref();
    let ritual = Card::new("call_the_grave", "Call the Grave", 3)
        .with_types(["Sorcery"])
        .with_colors(["B"])
        .with_text("Each player sacrifices a creature.")
        .into_ref();

    let breakers = [&corpse, &corpse, &brute, &corpse, &ritual, &corpse, &brute, &corpse, &ritual, &corpse];
    let mut cards = Vec::with_capacity(40);
    for breaker in breakers {
        cards.extend(std::iter::repeat(token.clone()).take(3));
        cards.push((*breaker).clone());
    }
    cards
}
