//! Catalog tests - standard shapes and externally supplied catalogs

use blockfall::core::catalog::tetromino;
use blockfall::core::{Catalog, Error, PolyominoDef};
use blockfall::types::{Color, PolyominoColors};

// ============== Standard set ==============

#[test]
fn test_standard_set_order_and_colors() {
    let catalog = Catalog::tetrominoes();
    assert_eq!(catalog.len(), 7);

    let fills: Vec<Color> = catalog.iter().map(|p| p.colors().fill_color).collect();
    assert_eq!(
        fills,
        vec![
            Color::LightBlue,
            Color::Yellow,
            Color::Purple,
            Color::Aqua,
            Color::Orange,
            Color::BrightGreen,
            Color::Red,
        ]
    );
    assert!(catalog.iter().all(|p| p.colors().border_color == Color::Wine));
    assert_eq!(catalog.fill_color(tetromino::O), Some(Color::Yellow));
    assert_eq!(catalog.fill_color(99), None);
}

#[test]
fn test_i_piece_layouts() {
    let catalog = Catalog::tetrominoes();
    let i = catalog.entry(tetromino::I);

    assert_eq!(i.layout(0).cells(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(i.layout(1).cells(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!((i.layout(1).height(), i.layout(1).width()), (4, 1));
}

#[test]
fn test_t_piece_layouts() {
    let catalog = Catalog::tetrominoes();
    let t = catalog.entry(tetromino::T);

    assert_eq!(t.layout(0).to_mask(), vec!["XXX", ".X."]);
    assert_eq!(t.layout(1).to_mask(), vec![".X", "XX", ".X"]);
    assert_eq!(t.layout(2).to_mask(), vec![".X.", "XXX"]);
    assert_eq!(t.layout(3).to_mask(), vec!["X.", "XX", "X."]);
}

#[test]
fn test_s_and_z_are_mirrors() {
    let catalog = Catalog::tetrominoes();
    let s = catalog.entry(tetromino::S);
    let z = catalog.entry(tetromino::Z);

    for orientation in 0..2 {
        let mirrored: Vec<String> = s
            .layout(orientation)
            .to_mask()
            .iter()
            .map(|row| row.chars().rev().collect())
            .collect();
        assert_eq!(mirrored, z.layout(orientation).to_mask());
    }
}

// ============== External catalogs ==============

#[test]
fn test_catalog_from_json() {
    let json = r#"[
        {"blocks": [["XXX", "X.X"], ["XX", "X.", "XX"]],
         "colors": {"borderColor": "Black", "fillColor": "Pink"}},
        {"blocks": [["X"]],
         "colors": {"borderColor": "White", "fillColor": "Bone"}}
    ]"#;
    let catalog = Catalog::from_json(json).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entry(0).rotation_count(), 2);
    assert_eq!(catalog.entry(0).layout(0).cells().len(), 5);
    assert_eq!(catalog.entry(1).layout(0).cells(), &[(0, 0)]);
    assert_eq!(
        catalog.entry(1).colors(),
        PolyominoColors::new(Color::White, Color::Bone)
    );
}

#[test]
fn test_catalog_json_round_trip_of_standard_set() {
    let catalog = Catalog::tetrominoes();
    let json = catalog.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value[0]["blocks"][0][0], "XXXX");
    assert_eq!(value[1]["colors"]["fillColor"], "Yellow");
    assert_eq!(Catalog::from_json(&json).unwrap(), catalog);
}

#[test]
fn test_empty_catalog_rejected() {
    assert!(matches!(Catalog::new(&[]), Err(Error::EmptyCatalog)));
    assert!(matches!(Catalog::from_json("[]"), Err(Error::EmptyCatalog)));
}

#[test]
fn test_entry_without_rotations_rejected() {
    let colors = PolyominoColors::new(Color::Wine, Color::Red);
    let defs = [
        PolyominoDef::new(&[&["X"]], colors),
        PolyominoDef::new(&[], colors),
    ];
    let err = Catalog::new(&defs).unwrap_err();
    assert!(matches!(err, Error::NoRotations { entry: 1 }));
    assert_eq!(err.code(), "invalid_catalog");
}

#[test]
fn test_blank_layout_rejected() {
    let colors = PolyominoColors::new(Color::Wine, Color::Red);
    let defs = [PolyominoDef::new(&[&["XX"], &["..", ".."]], colors)];
    assert!(matches!(
        Catalog::new(&defs),
        Err(Error::EmptyLayout {
            entry: 0,
            rotation: 1
        })
    ));
}

#[test]
fn test_oversized_layout_rejected() {
    let colors = PolyominoColors::new(Color::Wine, Color::Red);
    let defs = [PolyominoDef::new(&[&["XXXXXX", "XXXXXX", "XXXXXX"]], colors)];
    assert!(matches!(
        Catalog::new(&defs),
        Err(Error::LayoutTooLarge {
            cells: 18,
            max: 16,
            ..
        })
    ));
}

#[test]
fn test_malformed_json_rejected() {
    let err = Catalog::from_json(r#"[{"blocks": "XX"}]"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(err.code(), "invalid_json");
}
