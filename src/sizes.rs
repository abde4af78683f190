//! Standard paper and card sizes.
//!
//! ISO 216 (A, B and C series plus the common oversize variants), North
//! American and traditional British/US paper, and ISO/IEC 7810 ID cards.
//! Dimensions are given in the unit the standard publishes them in.

use crate::size::Size;
use crate::units::LengthUnit;

/// A named size, kept as const data in its published unit.
///
/// Only this table builds them, which keeps their dimensions non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub struct PaperSize {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
    pub unit: LengthUnit,
}

impl PaperSize {
    pub(crate) const fn new(name: &'static str, width: f64, height: f64, unit: LengthUnit) -> Self {
        PaperSize {
            name,
            width,
            height,
            unit,
        }
    }

    /// The size in its published unit
    pub fn size(&self) -> Size {
        Size::unchecked(self.width, self.height, self.unit)
    }

    /// The size in points
    pub fn to_pt(&self) -> Size {
        self.size().to_pt()
    }
}

impl From<PaperSize> for Size {
    fn from(paper: PaperSize) -> Size {
        paper.size()
    }
}

macro_rules! paper_sizes {
    ($($(#[$meta:meta])* $ident:ident = $name:literal, $unit:ident($w:expr, $h:expr);)*) => {
        $(
            $(#[$meta])*
            pub const $ident: PaperSize = PaperSize::new($name, $w, $h, LengthUnit::$unit);
        )*

        /// Every named size, in declaration order
        pub const ALL: &[PaperSize] = &[$($ident),*];
    };
}

paper_sizes! {
    // ISO 216 A series
    ISO_4A0 = "4A0", Mm(1682.0, 2378.0);
    ISO_2A0 = "2A0", Mm(1189.0, 1682.0);
    A0 = "A0", Mm(841.0, 1189.0);
    A1 = "A1", Mm(594.0, 841.0);
    A2 = "A2", Mm(420.0, 594.0);
    A3 = "A3", Mm(297.0, 420.0);
    A4 = "A4", Mm(210.0, 297.0);
    A5 = "A5", Mm(148.0, 210.0);
    A6 = "A6", Mm(105.0, 148.0);
    A7 = "A7", Mm(74.0, 105.0);
    A8 = "A8", Mm(52.0, 74.0);
    A9 = "A9", Mm(37.0, 52.0);
    A10 = "A10", Mm(26.0, 37.0);

    // ISO 216 B series
    B0 = "B0", Mm(1000.0, 1414.0);
    B1 = "B1", Mm(707.0, 1000.0);
    B2 = "B2", Mm(500.0, 707.0);
    B3 = "B3", Mm(353.0, 500.0);
    B4 = "B4", Mm(250.0, 353.0);
    B5 = "B5", Mm(176.0, 250.0);
    B6 = "B6", Mm(125.0, 176.0);
    B7 = "B7", Mm(88.0, 125.0);
    B8 = "B8", Mm(62.0, 88.0);
    B9 = "B9", Mm(44.0, 62.0);
    B10 = "B10", Mm(31.0, 44.0);

    // ISO 269 C series (envelopes)
    C0 = "C0", Mm(917.0, 1297.0);
    C1 = "C1", Mm(648.0, 917.0);
    C2 = "C2", Mm(458.0, 648.0);
    C3 = "C3", Mm(324.0, 458.0);
    C4 = "C4", Mm(229.0, 324.0);
    C5 = "C5", Mm(162.0, 229.0);
    C6 = "C6", Mm(114.0, 162.0);
    C7 = "C7", Mm(81.0, 114.0);
    C8 = "C8", Mm(57.0, 81.0);
    C9 = "C9", Mm(40.0, 57.0);
    C10 = "C10", Mm(28.0, 40.0);

    // Oversize ISO variants
    A2EXTRA = "A2EXTRA", Mm(445.0, 619.0);
    A3EXTRA = "A3EXTRA", Mm(322.0, 445.0);
    A3SUPER = "A3SUPER", Mm(305.0, 508.0);
    SUPERA3 = "SUPERA3", Mm(305.0, 487.0);
    A4EXTRA = "A4EXTRA", Mm(235.0, 322.0);
    A4SUPER = "A4SUPER", Mm(229.0, 322.0);
    SUPERA4 = "SUPERA4", Mm(227.0, 356.0);
    A4LONG = "A4LONG", Mm(210.0, 348.0);
    A5EXTRA = "A5EXTRA", Mm(173.0, 235.0);
    SOB5EXTRA = "SOB5EXTRA", Mm(202.0, 276.0);

    // North American paper
    LETTER = "LETTER", Inch(8.5, 11.0);
    LEGAL = "LEGAL", Inch(8.5, 14.0);
    TABLOID = "TABLOID", Inch(11.0, 17.0);
    JUNIOR_LEGAL = "JUNIOR_LEGAL", Inch(5.0, 8.0);
    HALF_LETTER = "HALF_LETTER", Inch(5.5, 8.0);
    GOV_LETTER = "GOV_LETTER", Inch(8.0, 10.5);
    GOV_LEGAL = "GOV_LEGAL", Inch(8.5, 13.0);
    /// Tabloid turned on its side
    LEDGER = "LEDGER", Inch(17.0, 11.0);

    // Traditional British and US sizes
    EMPEROR = "EMPEROR", Inch(48.0, 72.0);
    QUAD_ROYAL = "QUAD_ROYAL", Inch(40.0, 50.0);
    QUAD_DEMY = "QUAD_DEMY", Inch(35.0, 40.0);
    ANTIQUARIAN = "ANTIQUARIAN", Inch(31.0, 53.0);
    GRAND_EAGLE = "GRAND_EAGLE", Inch(28.75, 42.0);
    DOUBLE_ELEPHANT = "DOUBLE_ELEPHANT", Inch(26.75, 40.0);
    ATLAS = "ATLAS", Inch(26.0, 34.0);
    DOUBLE_ROYAL = "DOUBLE_ROYAL", Inch(25.0, 40.0);
    COLOMBIER = "COLOMBIER", Inch(23.5, 34.5);
    DOUBLE_DEMY_US = "DOUBLE_DEMY_US", Inch(22.5, 35.5);
    DOUBLE_DEMY = "DOUBLE_DEMY", Inch(22.5, 35.0);
    IMPERIAL = "IMPERIAL", Inch(22.0, 30.0);
    DOUBLE_LARGE_POST = "DOUBLE_LARGE_POST", Inch(21.0, 33.0);
    ELEPHANT = "ELEPHANT", Inch(23.0, 28.0);
    PRINCESS = "PRINCESS", Inch(22.5, 28.0);
    CARTRIDGE = "CARTRIDGE", Inch(21.0, 26.0);
    ROYAL = "ROYAL", Inch(20.0, 25.0);
    SHEET = "SHEET", Inch(19.5, 23.5);
    DOUBLE_POST = "DOUBLE_POST", Inch(19.0, 30.5);
    SUPER_ROYAL = "SUPER_ROYAL", Inch(19.0, 27.0);
    BROADSHEET = "BROADSHEET", Inch(18.0, 24.0);
    MEDIUM_US = "MEDIUM_US", Inch(17.5, 23.0);
    MEDIUM_UK = "MEDIUM_UK", Inch(18.0, 23.0);
    DEMY = "DEMY", Inch(17.5, 22.5);
    COPY_DRAUGHT = "COPY_DRAUGHT", Inch(16.0, 20.0);
    LARGE_POST_US = "LARGE_POST_US", Inch(15.5, 20.0);
    LARGE_POST_UK = "LARGE_POST_UK", Inch(16.5, 21.0);
    POST_US = "POST_US", Inch(15.5, 19.35);
    POST_UK = "POST_UK", Inch(15.5, 19.5);
    CROWN = "CROWN", Inch(15.0, 20.0);
    PINCHED_POST = "PINCHED_POST", Inch(14.75, 18.5);
    FOOLSCAP_US = "FOOLSCAP_US", Inch(13.5, 17.0);
    FOOLSCAP_UK = "FOOLSCAP_UK", Inch(13.0, 18.0);
    SMALL_FOOLSCAP = "SMALL_FOOLSCAP", Inch(13.35, 16.5);
    BRIEF = "BRIEF", Inch(13.5, 16.0);
    POTT = "POTT", Inch(12.5, 15.0);
    QUARTO_US = "QUARTO_US", Inch(9.0, 11.0);
    EXECUTIVE = "EXECUTIVE", Inch(7.35, 10.5);
    FOLIO = "FOLIO", Inch(8.0, 13.0);
    QUARTO = "QUARTO", Inch(8.0, 10.0);
    KINGS = "KINGS", Inch(6.5, 8.0);
    DUKES = "DUKES", Inch(5.5, 7.0);

    // ISO/IEC 7810 identification cards
    /// Bank cards and most ID cards
    ID_1 = "ID_1", Mm(85.60, 53.98);
    /// French and other ID cards; visas
    ID_2 = "ID_2", Mm(105.0, 74.0);
    /// Passports
    ID_3 = "ID_3", Mm(125.0, 88.0);
    /// SIM cards
    ID_000 = "ID_000", Mm(25.0, 15.0);
}

pub const ELEVENSEVENTEEN: PaperSize = TABLOID;
pub const DOUBLE_DEMY_UK: PaperSize = DOUBLE_DEMY;
pub const HALF_POST: PaperSize = SHEET;
pub const MONARCH: PaperSize = EXECUTIVE;
pub const FOOLSCAP_FOLIO: PaperSize = FOLIO;
pub const QUARTO_UK: PaperSize = QUARTO;

/// Alternative names that resolve to an entry of [`ALL`]
pub const ALIASES: &[(&str, PaperSize)] = &[
    ("ELEVENSEVENTEEN", ELEVENSEVENTEEN),
    ("DOUBLE_DEMY_UK", DOUBLE_DEMY_UK),
    ("HALF_POST", HALF_POST),
    ("MONARCH", MONARCH),
    ("FOOLSCAP_FOLIO", FOOLSCAP_FOLIO),
    ("QUARTO_UK", QUARTO_UK),
];

/// Uppercase with `-`, `_` and spaces removed, so `id-1`, `ID 1` and `ID_1` agree.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Find a named size, ignoring case and separators.
pub fn lookup(name: &str) -> Option<PaperSize> {
    let wanted = normalize(name);
    ALL.iter()
        .copied()
        .find(|paper| normalize(paper.name) == wanted)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| normalize(alias) == wanted)
                .map(|(_, paper)| *paper)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(normalize(a.name), normalize(b.name), "duplicate {}", a.name);
            }
        }
    }

    #[test]
    fn dimensions_are_non_negative() {
        for paper in ALL {
            assert!(paper.width > 0.0 && paper.height > 0.0, "{}", paper.name);
        }
    }

    #[test]
    fn lookup_ignores_case_and_separators() {
        assert_eq!(lookup("a4"), Some(A4));
        assert_eq!(lookup("id-1"), Some(ID_1));
        assert_eq!(lookup("Quarto US"), Some(QUARTO_US));
        assert_eq!(lookup("4a0"), Some(ISO_4A0));
        assert_eq!(lookup("A11"), None);
    }

    #[test]
    fn lookup_resolves_aliases() {
        assert_eq!(lookup("elevenseventeen"), Some(TABLOID));
        assert_eq!(lookup("MONARCH"), Some(EXECUTIVE));
        assert_eq!(lookup("foolscap_folio"), Some(FOLIO));
    }

    #[test]
    fn letter_in_points() {
        assert_eq!(LETTER.to_pt(), (612.0, 792.0));
        assert_eq!(Size::from(LEGAL).to_pt(), (612.0, 1008.0));
    }
}
