//! Composite keys: which relations an entity must resolve before mapping.
//!
//! A relation may itself be composite. The aggregator walks the tree
//! recursively and emits parts in pre-order, so declaration order here is
//! exactly the order the mapper receives.

/// One relation to follow, plus the relations of the fetched resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    pub name: &'static str,
    pub nested: &'static [Relation],
}

impl Relation {
    pub const fn leaf(name: &'static str) -> Self {
        Self { name, nested: &[] }
    }

    pub const fn composite(name: &'static str, nested: &'static [Relation]) -> Self {
        Self { name, nested }
    }
}

/// `[tournament, game, admin]`
pub const TOURNAMENT: &[Relation] = &[Relation::leaf("game"), Relation::leaf("admin")];

/// `[registration, tournament, game, user]`
pub const REGISTRATION: &[Relation] = &[
    Relation::composite("tournament", &[Relation::leaf("game")]),
    Relation::leaf("user"),
];

/// Number of parts a join over `relations` yields, primary included.
pub const fn arity(relations: &[Relation]) -> usize {
    let mut count = 1;
    let mut i = 0;
    while i < relations.len() {
        count += arity(relations[i].nested);
        i += 1;
    }
    count
}
