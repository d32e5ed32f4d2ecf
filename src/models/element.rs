use serde::{Deserialize, Serialize};

/// The five element categories, in definition order.
///
/// This order is observable: apportionment emits its per-category runs in
/// exactly this sequence (before the shuffle), and remainder ties are broken
/// by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Metal => "metal",
            Element::Wood => "wood",
            Element::Water => "water",
            Element::Fire => "fire",
            Element::Earth => "earth",
        }
    }
}

/// A five-way percentage split. Intended to sum to 100, but never enforced;
/// the apportionment engine degrades gracefully on out-of-domain values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRatio {
    pub metal: f64,
    pub wood: f64,
    pub water: f64,
    pub fire: f64,
    pub earth: f64,
}

impl ElementRatio {
    pub const ZERO: ElementRatio = ElementRatio {
        metal: 0.0,
        wood: 0.0,
        water: 0.0,
        fire: 0.0,
        earth: 0.0,
    };

    pub fn new(metal: f64, wood: f64, water: f64, fire: f64, earth: f64) -> Self {
        Self {
            metal,
            wood,
            water,
            fire,
            earth,
        }
    }

    pub fn get(&self, element: Element) -> f64 {
        match element {
            Element::Metal => self.metal,
            Element::Wood => self.wood,
            Element::Water => self.water,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
        }
    }

    pub fn total(&self) -> f64 {
        Element::ALL.iter().map(|e| self.get(*e)).sum()
    }
}

/// One "#RRGGBB" hex string per element category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementColorMap {
    pub metal: String,
    pub wood: String,
    pub water: String,
    pub fire: String,
    pub earth: String,
}

impl ElementColorMap {
    pub fn get(&self, element: Element) -> &str {
        match element {
            Element::Metal => &self.metal,
            Element::Wood => &self.wood,
            Element::Water => &self.water,
            Element::Fire => &self.fire,
            Element::Earth => &self.earth,
        }
    }
}

/// The ratio document returned by the analysis service: where the user is
/// now, where they should be, and the palette to express it with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioContainer {
    pub current: ElementRatio,
    pub goal: ElementRatio,
    pub colors: ElementColorMap,
}
