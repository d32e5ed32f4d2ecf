use uuid::Uuid;

/// A single bead on the bracelet.
///
/// The id is client-local and exists only to give the renderer a stable
/// ordering key; it carries no server meaning and is deliberately excluded
/// from color comparisons.
#[derive(Debug, Clone)]
pub struct Bead {
    pub id: Uuid,
    pub color_hex: String, // "#RRGGBB"
}

impl Bead {
    pub fn new(color_hex: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            color_hex: color_hex.into(),
        }
    }

    pub fn same_color(&self, other: &Bead) -> bool {
        self.color_hex == other.color_hex
    }
}

/// The ordered bead sequence the user wears. Rebuilt wholesale whenever the
/// bead count or the goal ratio/colors change, never patched incrementally.
pub type Bracelet = Vec<Bead>;
