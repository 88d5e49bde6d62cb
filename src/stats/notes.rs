use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, FromRepr};

/// Ids at or above this value use the wide packing.
pub const WIDE_ID_THRESHOLD: i32 = 100_000;

/// Number of cells in the 4x3 note grid.
pub const GRID_CELLS: usize = 12;

/// How a note contributes to score. Discriminants match the packed id.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    FromRepr,
    Serialize,
    Deserialize,
)]
#[repr(i32)]
#[strum(serialize_all = "snake_case")]
pub enum ScoringType {
    #[default]
    Default = 0,
    Ignore = 1,
    NoScore = 2,
    Normal = 3,
    SliderHead = 4,
    SliderTail = 5,
    BurstSliderHead = 6,
    BurstSliderElement = 7,
}

impl ScoringType {
    /// Best possible score for one note of this type.
    #[inline(always)]
    pub fn max_note_score(self) -> i32 {
        match self {
            Self::BurstSliderHead => 85,
            Self::BurstSliderElement => 20,
            _ => 115,
        }
    }

    #[inline(always)]
    pub fn is_burst(self) -> bool {
        matches!(self, Self::BurstSliderHead | Self::BurstSliderElement)
    }
}

/// Fields unpacked from a note id.
///
/// Colour 0 is the left saber, 1 the right, 2 a bomb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteParams {
    pub scoring_type: ScoringType,
    pub line_index: i32,
    pub line_layer: i32,
    pub color_type: i32,
    pub cut_direction: i32,
}

impl NoteParams {
    /// Digit extraction in field order. Any integer decodes; an unknown
    /// scoring discriminant is treated as [`ScoringType::Default`].
    pub fn from_note_id(note_id: i32) -> Self {
        let (type_base, index_base, layer_base) = if note_id < WIDE_ID_THRESHOLD {
            (10_000, 1_000, 100)
        } else {
            (10_000_000, 1_000_000, 100_000)
        };

        let mut id = note_id;

        let raw_type = id / type_base;
        id -= raw_type * type_base;

        let line_index = id / index_base;
        id -= line_index * index_base;

        let line_layer = id / layer_base;
        id -= line_layer * layer_base;

        let color_type = id / 10;
        let cut_direction = id - color_type * 10;

        Self {
            scoring_type: ScoringType::from_repr(raw_type).unwrap_or_default(),
            line_index,
            line_layer,
            color_type,
            cut_direction,
        }
    }

    /// Narrow (base-10000) packing used by standard maps.
    pub fn to_note_id(&self) -> i32 {
        self.scoring_type as i32 * 10_000
            + self.line_index * 1_000
            + self.line_layer * 100
            + self.color_type * 10
            + self.cut_direction
    }

    /// Wide packing for maps placing notes outside the standard grid.
    pub fn to_wide_note_id(&self) -> i32 {
        self.scoring_type as i32 * 10_000_000
            + self.line_index * 1_000_000
            + self.line_layer * 100_000
            + self.color_type * 10
            + self.cut_direction
    }

    /// Cell in the 4x3 grid. Out-of-range positions fall back to cell 0.
    #[inline(always)]
    pub fn grid_index(&self) -> usize {
        let index = self.line_layer * 4 + self.line_index;
        if (0..GRID_CELLS as i32).contains(&index) {
            index as usize
        } else {
            0
        }
    }

    #[inline(always)]
    pub fn is_left(&self) -> bool {
        self.color_type == 0
    }

    #[inline(always)]
    pub fn is_block(&self) -> bool {
        self.color_type != 2
    }
}

impl From<i32> for NoteParams {
    fn from(note_id: i32) -> Self {
        Self::from_note_id(note_id)
    }
}
