//! Named sizes and orientation properties across the whole table.

use pagesizes::sizes::{self, PaperSize};
use pagesizes::{LengthUnit, Size};

#[test]
fn iso_a_series_round_trips_in_mm() {
    let expected = [
        (sizes::A0, (841.0, 1189.0)),
        (sizes::A1, (594.0, 841.0)),
        (sizes::A2, (420.0, 594.0)),
        (sizes::A3, (297.0, 420.0)),
        (sizes::A4, (210.0, 297.0)),
        (sizes::A5, (148.0, 210.0)),
        (sizes::A6, (105.0, 148.0)),
        (sizes::A7, (74.0, 105.0)),
        (sizes::A8, (52.0, 74.0)),
        (sizes::A9, (37.0, 52.0)),
        (sizes::A10, (26.0, 37.0)),
    ];
    for (paper, mm) in expected {
        assert_eq!(paper.to_pt().mm(), mm, "{}", paper.name);
    }
}

#[test]
fn every_named_size_round_trips_through_points() {
    for paper in sizes::ALL {
        let published = (paper.width, paper.height);
        assert_eq!(paper.to_pt().convert(paper.unit), published, "{}", paper.name);
    }
}

#[test]
fn a_series_is_portrait() {
    for paper in [sizes::A6, sizes::A5, sizes::A4, sizes::A3, sizes::A2, sizes::A1, sizes::A0] {
        let size = paper.to_pt();
        assert!(size.is_portrait(), "{}", paper.name);
        assert!(size.portrait().is_portrait());
        assert!(size.landscape().portrait().is_portrait());
        assert_eq!(size.landscape().portrait(), size);
        assert!(size.landscape().is_landscape());
    }
}

#[test]
fn orientation_properties_hold_for_every_named_size() {
    for paper in sizes::ALL {
        let s = paper.size();
        assert_eq!(s.landscape().landscape(), s.landscape(), "{}", paper.name);
        assert_eq!(s.portrait().portrait(), s.portrait(), "{}", paper.name);
        if s.is_square() {
            assert!(s.is_landscape() && !s.is_portrait());
        } else {
            assert_ne!(s.is_portrait(), s.is_landscape(), "{}", paper.name);
        }
    }
}

#[test]
fn cards_are_landscape() {
    for card in [sizes::ID_1, sizes::ID_2, sizes::ID_3, sizes::ID_000] {
        assert!(card.size().is_landscape(), "{}", card.name);
    }
    assert!(sizes::LEDGER.size().is_landscape());
    assert_eq!(sizes::LEDGER.size(), sizes::TABLOID.size().landscape());
}

#[test]
fn us_sizes_in_points() {
    let cases: [(PaperSize, (f64, f64)); 4] = [
        (sizes::LETTER, (612.0, 792.0)),
        (sizes::LEGAL, (612.0, 1008.0)),
        (sizes::TABLOID, (792.0, 1224.0)),
        (sizes::HALF_LETTER, (396.0, 576.0)),
    ];
    for (paper, pt) in cases {
        assert_eq!(paper.to_pt(), pt, "{}", paper.name);
    }
}

#[test]
fn page_size_converts_between_units() {
    for unit in [LengthUnit::Pt, LengthUnit::Inch, LengthUnit::Cm, LengthUnit::Mm, LengthUnit::Um, LengthUnit::Pica] {
        let size = Size::new(12.0, 34.0, unit).unwrap();
        assert_eq!(size.convert(unit), (12.0, 34.0), "{}", unit.name());
    }
}

#[test]
fn negative_dimensions_never_make_a_size() {
    assert!(Size::new(-10.0, 5.0, LengthUnit::Mm).is_err());
    assert!(Size::try_from((5.0, -0.5)).is_err());
}

#[test]
fn lookup_by_name() {
    let a4 = sizes::lookup("A4").map(|p| p.to_pt());
    assert_eq!(a4, Size::new(210.0, 297.0, LengthUnit::Mm).ok());
    assert_eq!(sizes::lookup("tabloid"), sizes::lookup("ELEVENSEVENTEEN"));
    assert!(sizes::lookup("A-nothing").is_none());
}
