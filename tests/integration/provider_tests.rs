use packcalc::PackMap;
use packcalc::core::{Method, SolveOptions, calculate_packs_with_provider, save_pack_sizes};
use packcalc::storage::Database;

#[test]
fn calculates_from_stored_sizes() {
    let db = Database::open_in_memory().unwrap();
    save_pack_sizes(&db, &[53, 31, 23]).unwrap();

    let (solved, sizes) =
        calculate_packs_with_provider(&db, 500_000, &SolveOptions::default()).unwrap();
    assert_eq!(sizes, vec![23, 31, 53]);
    assert_eq!(solved.packs, PackMap::from([(23, 2), (31, 7), (53, 9429)]));
    assert_eq!(solved.total_items, 500_000);
    assert_eq!(solved.method, Method::Exact);
}

#[test]
fn table_bound_switches_to_heuristic() {
    let db = Database::open_in_memory().unwrap();
    save_pack_sizes(&db, &[250, 500, 1000, 2000, 5000]).unwrap();

    let options = SolveOptions::with_max_table_len(Some(1_000));
    let (solved, _) = calculate_packs_with_provider(&db, 12_500, &options).unwrap();
    assert_eq!(solved.method, Method::Heuristic);
    assert!(solved.total_items >= 12_500);
}

#[test]
fn empty_store_yields_empty_packing() {
    let db = Database::open_in_memory().unwrap();
    let (solved, sizes) = calculate_packs_with_provider(&db, 10, &SolveOptions::default()).unwrap();
    assert!(solved.packs.is_empty());
    assert!(sizes.is_empty());
}

#[test]
fn rejected_sizes_leave_store_unchanged() {
    let db = Database::open_in_memory().unwrap();
    save_pack_sizes(&db, &[250, 500]).unwrap();

    let err = save_pack_sizes(&db, &[250, 0]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("size amount is not positive: 0"));

    let (_, sizes) = calculate_packs_with_provider(&db, 1, &SolveOptions::default()).unwrap();
    assert_eq!(sizes, vec![250, 500]);
}
